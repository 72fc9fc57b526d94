/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use alloc::{format, vec};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::constants::{SLIC_HEADER_SIZE, SLIC_RECORD_SIZE};
use crate::coverage::CoverageTracker;
use crate::errors::SlicDecodeErrors;
use crate::surface::{PixelSurface, PixelSurfaceMut, RgbSurface};
use crate::tile::{Tile, TileRecord};

/// Check whether `bytes` could be a SLIC stream
///
/// The format has no magic bytes, so this only checks that the
/// length is a header followed by whole tiles, and that an image
/// without pixels carries no tiles.
pub fn probe_slic(bytes: &[u8]) -> bool {
    if bytes.len() < SLIC_HEADER_SIZE || (bytes.len() - SLIC_HEADER_SIZE) % SLIC_RECORD_SIZE != 0 {
        return false;
    }
    let height = u16::from_be_bytes([bytes[0], bytes[1]]);
    let width = u16::from_be_bytes([bytes[2], bytes[3]]);

    if width == 0 || height == 0 {
        return bytes.len() == SLIC_HEADER_SIZE;
    }
    bytes.len() > SLIC_HEADER_SIZE
}

/// A Squares and Lines Image Compression decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed RGB pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// # Strict mode
/// By default the decoder accepts malformed streams the way the format
/// always has, a trailing partial tile is dropped, tiles after the image is
/// full are skipped and tiles crossing the image edge are clipped, each with
/// a warning. With [`DecoderOptions::set_strict_mode`] these become errors.
///
/// [`decode_headers`]:SlicDecoder::decode_headers
/// [`decode`]:SlicDecoder::decode
pub struct SlicDecoder<T>
where
    T: ZByteReaderTrait
{
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    stream:          ZReader<T>,
    options:         DecoderOptions
}

impl<T> SlicDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new SLIC decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed SLIC data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zune_core::bytestream::ZCursor;
    /// let mut decoder = zune_slic::SlicDecoder::new(ZCursor::new(&[]));
    /// // additional code
    /// ```
    pub fn new(data: T) -> SlicDecoder<T> {
        SlicDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new SLIC decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_slic::SlicDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let  options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder=SlicDecoder::new_with_options(ZCursor::new([]),options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: T, options: DecoderOptions) -> SlicDecoder<T> {
        SlicDecoder {
            width:           0,
            height:          0,
            decoded_headers: false,
            stream:          ZReader::new(data),
            options:         options
        }
    }

    /// Decode the four byte header storing image dimensions
    /// into the decoder instance
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers
    ///     error type will be an instance of [SlicDecodeErrors]
    pub fn decode_headers(&mut self) -> Result<(), SlicDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header = match self.stream.read_fixed_bytes_or_error::<SLIC_HEADER_SIZE>() {
            Ok(header) => header,
            Err(_) => {
                let found = self.stream.remaining_bytes()?.len();
                return Err(SlicDecodeErrors::InsufficientData(SLIC_HEADER_SIZE, found));
            }
        };
        // rows come first
        let height = usize::from(u16::from_be_bytes([header[0], header[1]]));
        let width = usize::from(u16::from_be_bytes([header[2], header[3]]));

        if width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(SlicDecodeErrors::Generic(msg));
        }

        if height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(SlicDecodeErrors::Generic(msg));
        }
        self.width = width;
        self.height = height;

        trace!("Image width: {:?}", self.width);
        trace!("Image height: {:?}", self.height);
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of bytes required to hold a decoded image frame
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image was not decoded.
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(self.colorspace()?.num_components())
        } else {
            None
        }
    }

    /// Decode a SLIC image, returning RGB pixels
    ///
    /// Pixels no tile covers are left black
    ///
    /// # Returns
    /// - On success: The decoded bytes, `width*height*3` of them
    /// - On error: An instance of [SlicDecodeErrors] which gives a reason why the image could not
    /// be decoded
    pub fn decode(&mut self) -> Result<Vec<u8>, SlicDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(SlicDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a SLIC image and store the RGB pixels into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the image
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), SlicDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(SlicDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        if pixels.len() < size {
            return Err(SlicDecodeErrors::TooSmallOutput(size, pixels.len()));
        }
        let mut surface =
            RgbSurface::new(&mut pixels[..size], self.width, self.height, ColorSpace::RGB)?;

        self.decode_into_surface(&mut surface)
    }

    /// Decode a SLIC image painting every tile onto `surface`
    ///
    /// The surface must have the same dimensions as the image
    pub fn decode_into_surface<S: PixelSurfaceMut>(
        &mut self, surface: &mut S
    ) -> Result<(), SlicDecodeErrors> {
        self.decode_headers()?;

        if surface.width() != self.width || surface.height() != self.height {
            let msg = format!(
                "Surface of {}x{} pixels cannot hold a {}x{} image",
                surface.width(),
                surface.height(),
                self.width,
                self.height
            );
            return Err(SlicDecodeErrors::Generic(msg));
        }
        self.replay(|tile, width, height| {
            surface.fill(tile.row, tile.col, width, height, tile.record.color);
        })
    }

    /// Decode the tiles of a SLIC image together with the
    /// position each one is placed at, without painting them
    pub fn decode_tiles(&mut self) -> Result<Vec<Tile>, SlicDecodeErrors> {
        self.decode_headers()?;

        let mut tiles = vec![];

        self.replay(|tile, _, _| tiles.push(tile))?;

        Ok(tiles)
    }

    /// Walk every tile in the stream, handing each placed tile and the
    /// part of it inside the image to `paint`
    fn replay<F>(&mut self, mut paint: F) -> Result<(), SlicDecodeErrors>
    where
        F: FnMut(Tile, usize, usize)
    {
        let strict = self.options.strict_mode();

        let mut tracker = CoverageTracker::new(self.width, self.height);
        let mut excess = 0_usize;
        let mut tiles = 0_usize;

        while let Ok(bytes) = self.stream.read_fixed_bytes_or_error::<SLIC_RECORD_SIZE>() {
            let record = TileRecord::from_bytes(bytes);

            let Some((row, col)) = tracker.next_uncovered() else {
                excess += 1;
                continue;
            };
            let (width, height) = record.dimensions();

            if width == 0 || height == 0 {
                if strict {
                    return Err(SlicDecodeErrors::ZeroSizedTile { row, col });
                }
                warn!("Tile at row {row}, column {col} has a size of zero, ignoring it");
                continue;
            }
            let outcome = tracker.cover(row, col, width, height);

            if outcome.clipped {
                if strict {
                    return Err(SlicDecodeErrors::TileOutOfBounds {
                        row,
                        col,
                        width,
                        height
                    });
                }
                warn!("Tile of {width}x{height} pixels at row {row}, column {col} extends past the image, clipping it");
            }
            tiles += 1;

            paint(
                Tile { row, col, record },
                width.min(self.width - col),
                height.min(self.height - row)
            );
        }
        trace!("Decoded {tiles} tiles");

        let leftover = self.stream.remaining_bytes()?.len();

        if leftover != 0 {
            if strict {
                return Err(SlicDecodeErrors::TrailingBytes(leftover));
            }
            warn!("Ignoring {leftover} trailing bytes that do not form a tile");
        }
        if excess != 0 {
            if strict {
                return Err(SlicDecodeErrors::ExcessTiles(excess));
            }
            warn!("Ignoring {excess} tiles found after the image was fully covered");
        }
        if !tracker.is_complete() {
            if strict {
                return Err(SlicDecodeErrors::IncompleteImage(tracker.uncovered()));
            }
            warn!("{} pixels were not covered by any tile", tracker.uncovered());
        }
        Ok(())
    }

    /// Returns the colorspace of decoded pixels or none if the
    /// headers haven't been decoded
    ///
    /// This is always [RGB]
    ///
    /// [RGB]: zune_core::colorspace::ColorSpace::RGB
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(ColorSpace::RGB)
        } else {
            None
        }
    }

    /// Return SLIC bit depth
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_slic::SlicDecoder;
    /// // 2 rows, 3 columns, no tiles
    /// let mut decoder = SlicDecoder::new(ZCursor::new([0_u8, 2, 0, 3]));
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w,h)=decoder.dimensions().unwrap();
    /// assert_eq!((w, h), (3, 2));
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }
}

/// Count tiles of each shape, indexed by shape code
pub fn shape_histogram(tiles: &[Tile]) -> [usize; 4] {
    let mut histogram = [0; 4];

    for tile in tiles {
        histogram[usize::from(tile.record.shape.code())] += 1;
    }
    histogram
}
