/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use zune_slic::{SlicDecodeErrors, SlicEncodeErrors};

/// Errors that stop a command line workflow
pub enum SlicBinErrors {
    EncodeErrors(SlicEncodeErrors),
    DecodeErrors(SlicDecodeErrors),
    /// Reading or writing a raster image failed
    ImageErrors(image::ImageError),
    IoErrors(std::io::Error),
    GenericString(String)
}

impl Debug for SlicBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SlicBinErrors::EncodeErrors(err) => writeln!(f, "Could not encode: {err:?}"),
            SlicBinErrors::DecodeErrors(err) => writeln!(f, "Could not decode: {err:?}"),
            SlicBinErrors::ImageErrors(err) => writeln!(f, "Image error: {err}"),
            SlicBinErrors::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            SlicBinErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for SlicBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for SlicBinErrors {}

impl From<SlicEncodeErrors> for SlicBinErrors {
    fn from(value: SlicEncodeErrors) -> Self {
        SlicBinErrors::EncodeErrors(value)
    }
}

impl From<SlicDecodeErrors> for SlicBinErrors {
    fn from(value: SlicDecodeErrors) -> Self {
        SlicBinErrors::DecodeErrors(value)
    }
}

impl From<image::ImageError> for SlicBinErrors {
    fn from(value: image::ImageError) -> Self {
        SlicBinErrors::ImageErrors(value)
    }
}

impl From<std::io::Error> for SlicBinErrors {
    fn from(value: std::io::Error) -> Self {
        SlicBinErrors::IoErrors(value)
    }
}

impl From<String> for SlicBinErrors {
    fn from(value: String) -> Self {
        SlicBinErrors::GenericString(value)
    }
}
