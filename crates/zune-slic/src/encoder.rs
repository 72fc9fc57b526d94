/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::constants::{SLIC_HEADER_SIZE, SLIC_MAX_DIMENSION, SLIC_MAX_TILE_SIZE, SLIC_RECORD_SIZE};
use crate::coverage::CoverageTracker;
use crate::errors::SlicEncodeErrors;
use crate::surface::{PixelSurface, RgbSurface, SUPPORTED_COLORSPACES};
use crate::tile::{Tile, TileRecord, TileShape, SEARCH_ORDER};

/// Greedy tile search over a pixel surface
///
/// Each call to `next` finds the first uncovered pixel and returns the
/// largest homogeneous tile anchored there, trying squares, then row runs,
/// then column runs, and falling back to a single dot.
///
/// A tile grows over every pixel inside the image that has the cursor's
/// color, including pixels an earlier tile already covered. Overlapping
/// pixels always carry the color both tiles paint, so replaying the tiles
/// in order restores the image exactly.
///
/// # Example
/// ```
/// use zune_core::colorspace::ColorSpace;
/// use zune_slic::{RgbSurface, TileEncoder, TileShape};
///
/// let pixels = [7_u8; 3 * 5];
/// let surface = RgbSurface::new(&pixels, 5, 1, ColorSpace::RGB).unwrap();
///
/// let tiles: Vec<_> = TileEncoder::new(surface).collect();
/// assert_eq!(tiles.len(), 1);
/// assert_eq!(tiles[0].record.shape, TileShape::RowRun);
/// assert_eq!(tiles[0].record.size, 5);
/// ```
pub struct TileEncoder<S: PixelSurface> {
    surface: S,
    tracker: CoverageTracker
}

impl<S: PixelSurface> TileEncoder<S> {
    /// Start a new pass over `surface` with nothing covered
    pub fn new(surface: S) -> TileEncoder<S> {
        let tracker = CoverageTracker::new(surface.width(), surface.height());

        TileEncoder { surface, tracker }
    }

    /// Whether pixel `row`,`col` can join a tile of `color`
    #[inline]
    fn accepts(&self, row: usize, col: usize, color: [u8; 3]) -> bool {
        row < self.surface.height()
            && col < self.surface.width()
            && self.surface.pixel(row, col) == color
    }

    /// Check whether a tile of `shape` anchored at `row`,`col` that
    /// was homogeneous at `size - 1` stays homogeneous at `size`.
    ///
    /// Only the pixels added by the growth step are inspected.
    fn extends(&self, shape: TileShape, row: usize, col: usize, size: usize, color: [u8; 3]) -> bool {
        let edge = size - 1;

        match shape {
            TileShape::Dot => false,
            TileShape::RowRun => self.accepts(row, col + edge, color),
            TileShape::ColumnRun => self.accepts(row + edge, col, color),
            TileShape::Square => {
                // new bottom row, then the new right column without the shared corner
                (0..size).all(|c| self.accepts(row + edge, col + c, color))
                    && (0..edge).all(|r| self.accepts(row + r, col + edge, color))
            }
        }
    }

    /// Largest size in `1..=SLIC_MAX_TILE_SIZE` for which `shape` stays homogeneous
    fn grow(&self, shape: TileShape, row: usize, col: usize, color: [u8; 3]) -> u8 {
        // the cursor pixel itself is uncovered and has its own color
        let mut size = 1;

        while size < SLIC_MAX_TILE_SIZE && self.extends(shape, row, col, usize::from(size) + 1, color)
        {
            size += 1;
        }
        size
    }

    /// Choose the tile anchored at `row`, `col`
    fn select(&self, row: usize, col: usize) -> TileRecord {
        let color = self.surface.pixel(row, col);

        SEARCH_ORDER
            .iter()
            .find_map(|&shape| {
                let size = self.grow(shape, row, col, color);
                (size > 1).then(|| TileRecord::new(color, shape, size))
            })
            .unwrap_or_else(|| TileRecord::new(color, TileShape::Dot, 0))
    }
}

impl<S: PixelSurface> Iterator for TileEncoder<S> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let (row, col) = self.tracker.next_uncovered()?;

        let record = self.select(row, col);
        let (width, height) = record.dimensions();

        let outcome = self.tracker.cover(row, col, width, height);

        debug_assert!(!outcome.clipped);

        Some(Tile { row, col, record })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // one tile can cover everything that is left, or one pixel at a time
        let uncovered = self.tracker.uncovered();

        (usize::from(uncovered != 0), Some(uncovered))
    }
}

/// Encode a surface into a SLIC stream
///
/// Writes the header followed by one record per tile produced by
/// [`TileEncoder`].
///
/// # Returns
/// - Ok(size): Actual bytes used for encoding
/// - Err: The error encountered during encoding
pub fn encode_surface<S: PixelSurface, T: ZByteWriterTrait>(
    surface: S, sink: T
) -> Result<usize, SlicEncodeErrors> {
    let width = surface.width();
    let height = surface.height();

    if width > SLIC_MAX_DIMENSION {
        return Err(SlicEncodeErrors::TooLargeDimensions(width));
    }
    if height > SLIC_MAX_DIMENSION {
        return Err(SlicEncodeErrors::TooLargeDimensions(height));
    }
    let mut stream = ZWriter::new(sink);

    // it's safe to convert to u16 here, we checked the
    // dimensions fit
    stream.write_u16_be_err(height as u16)?;
    stream.write_u16_be_err(width as u16)?;

    let mut tiles = 0_usize;

    for tile in TileEncoder::new(surface) {
        stream.write_const_bytes(&tile.record.to_bytes())?;
        tiles += 1;
    }
    trace!("Image width: {width}");
    trace!("Image height: {height}");
    trace!("Encoded {tiles} tiles");

    Ok(stream.bytes_written())
}

/// A Squares and Lines Image Compression encoder
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use zune_core::bit_depth::BitDepth;
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_slic::SlicEncoder;
/// use zune_slic::SlicEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), SlicEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| ((i / 3) / 16) as u8);
///     let mut encoder = SlicEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert!(size < pixels.len());
///     Ok(())
///}
/// ```
pub struct SlicEncoder<'a> {
    // raw pixels, in RGB, RGBA, Luma or LumaA
    pixel_data: &'a [u8],
    options:    EncoderOptions
}

impl<'a> SlicEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    #[allow(clippy::redundant_field_names)]
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> SlicEncoder<'a> {
        SlicEncoder {
            pixel_data: data,
            options:    options
        }
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// This is reached when every pixel becomes a dot
    pub fn max_size(&self) -> usize {
        self.options.width() * self.options.height() * SLIC_RECORD_SIZE + SLIC_HEADER_SIZE
    }

    /// Encode into a sink
    ///
    /// # Arguments.
    /// - sink: Where to write encoded content to
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, SlicEncodeErrors> {
        let options = &self.options;

        if options.depth() != BitDepth::Eight {
            return Err(SlicEncodeErrors::UnsupportedBitDepth(options.depth()));
        }
        if !SUPPORTED_COLORSPACES.contains(&options.colorspace()) {
            return Err(SlicEncodeErrors::UnsupportedColorspace(
                options.colorspace(),
                &SUPPORTED_COLORSPACES
            ));
        }
        if options.width() > SLIC_MAX_DIMENSION {
            return Err(SlicEncodeErrors::TooLargeDimensions(options.width()));
        }
        if options.height() > SLIC_MAX_DIMENSION {
            return Err(SlicEncodeErrors::TooLargeDimensions(options.height()));
        }
        let expected_len =
            options.width() * options.height() * options.colorspace().num_components();

        if self.pixel_data.len() != expected_len {
            return Err(SlicEncodeErrors::TooShortInput(
                expected_len,
                self.pixel_data.len()
            ));
        }
        let surface = RgbSurface::new(
            self.pixel_data,
            options.width(),
            options.height(),
            options.colorspace()
        )?;

        encode_surface(surface, sink)
    }
}
