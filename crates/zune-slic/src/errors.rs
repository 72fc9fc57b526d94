/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
/// Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

use crate::constants::SLIC_MAX_DIMENSION;

/// Possible Errors that may occur during decoding
///
/// Apart from [`InsufficientData`](SlicDecodeErrors::InsufficientData) and
/// I/O errors, every variant describes a malformed stream that the decoder
/// only rejects when strict mode is enabled
pub enum SlicDecodeErrors {
    /// The input buffer is too short to hold the header
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// A tile extends past the right or bottom edge of the image
    TileOutOfBounds {
        row:    usize,
        col:    usize,
        width:  usize,
        height: usize
    },
    /// A row, column or square tile has a size of zero and paints nothing
    ZeroSizedTile { row: usize, col: usize },
    /// The stream ends with this many bytes, which do not form a full tile
    TrailingBytes(usize),
    /// This many tiles came after the whole image was already covered
    ExcessTiles(usize),
    /// The stream ended with this many pixels not covered by any tile
    IncompleteImage(usize),
    /// To small output size
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for SlicDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SlicDecodeErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            SlicDecodeErrors::TileOutOfBounds {
                row,
                col,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Tile of {width}x{height} pixels at row {row}, column {col} extends past the image"
                )
            }
            SlicDecodeErrors::ZeroSizedTile { row, col } => {
                writeln!(f, "Tile at row {row}, column {col} has a size of zero")
            }
            SlicDecodeErrors::TrailingBytes(count) => {
                writeln!(f, "Stream ends with {count} bytes that do not form a tile")
            }
            SlicDecodeErrors::ExcessTiles(count) => {
                writeln!(f, "{count} tiles found after the image was fully covered")
            }
            SlicDecodeErrors::IncompleteImage(count) => {
                writeln!(f, "Stream ended with {count} pixels not covered by any tile")
            }
            SlicDecodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            SlicDecodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            SlicDecodeErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            SlicDecodeErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<&'static str> for SlicDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for SlicDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        SlicDecodeErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum SlicEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// SLIC only stores 8 bit channels
    UnsupportedBitDepth(BitDepth),
    /// Too large dimensions
    /// The dimension cannot be stored in the 16 bit header fields
    TooLargeDimensions(usize),
    /// Pixel buffer length differs from the length the options describe
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes found
    TooShortInput(usize, usize),

    Generic(&'static str),

    IoError(ZByteIoError)
}

impl Debug for SlicEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SlicEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into SLIC, supported ones are {supported:?}")
            }
            SlicEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, SLIC only encodes 8 bit images")
            }
            SlicEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, SLIC can only encode images up to {SLIC_MAX_DIMENSION}"
                )
            }
            SlicEncodeErrors::TooShortInput(expected, found) => {
                writeln!(
                    f,
                    "Expected input of {expected} bytes for the image dimensions but found {found}"
                )
            }
            SlicEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            SlicEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for SlicEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for SlicDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SlicEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for SlicDecodeErrors {}

impl From<ZByteIoError> for SlicEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}

impl From<&'static str> for SlicEncodeErrors {
    fn from(value: &'static str) -> Self {
        Self::Generic(value)
    }
}
