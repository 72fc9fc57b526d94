/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sizes and bit layout of the SLIC format

/// Size of the header, a BE u16 row count followed by a BE u16 column count
pub const SLIC_HEADER_SIZE: usize = 4;

/// Size of a single tile record
pub const SLIC_RECORD_SIZE: usize = 4;

/// Largest tile size the encoder will test and emit.
///
/// The size field has six bits, but the encoder stops growing a tile
/// at 62.
pub const SLIC_MAX_TILE_SIZE: u8 = 62;

/// Mask extracting the size from the last byte of a record
pub const SLIC_SIZE_MASK: u8 = 0x3F;

/// Position of the two shape bits in the last byte of a record
pub const SLIC_SHAPE_SHIFT: u8 = 6;

/// Largest width or height the header can carry
pub const SLIC_MAX_DIMENSION: usize = u16::MAX as usize;

/// File extension used for SLIC images
pub const SLIC_EXTENSION: &str = "slc";
