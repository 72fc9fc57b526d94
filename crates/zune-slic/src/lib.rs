/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Squares and Lines Image Compression (SLIC) images
//!
//! SLIC covers an RGB raster with monochromatic tiles, each tile being a single
//! pixel, a horizontal run, a vertical run or a square, and stores every tile
//! in four bytes.
//!
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                              ║
//! ╠════════╪══════════════════════════════════════════════════════════╣
//! ║ 2      │ 16-Bit BE unsigned integer (height, row count)           ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 2      │ 16-Bit BE unsigned integer (width, column count)         ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ [1111] │ R, G, B, (shape << 6 | size) per tile                    ║
//! ╚════════╧══════════════════════════════════════════════════════════╝
//! ```
//!
//! Tile positions are never stored. The origin of every tile is the first
//! pixel, in row-major order, not yet covered by an earlier tile, and both the
//! encoder and the decoder derive it the same way.
//!
//! | Shape | Code | Width  | Height |
//! |-------|------|--------|--------|
//! | Dot   | 0    | 1      | 1      |
//! | Row   | 1    | size   | 1      |
//! | Column| 2    | 1      | size   |
//! | Square| 3    | size   | size   |
//!
//! # Features
//! - Decoding and encoding
//! -`no_std`
//! - Fuzz tested
//!
//! # Example
//! ```
//! use zune_core::bit_depth::BitDepth;
//! use zune_core::bytestream::ZCursor;
//! use zune_core::colorspace::ColorSpace;
//! use zune_core::options::EncoderOptions;
//! use zune_slic::{SlicDecoder, SlicEncoder};
//!
//! let pixels = [255_u8; 4 * 4 * 3];
//! let options = EncoderOptions::new(4, 4, ColorSpace::RGB, BitDepth::Eight);
//!
//! let mut encoded = vec![];
//! SlicEncoder::new(&pixels, options).encode(&mut encoded).unwrap();
//! // one 4x4 white square
//! assert_eq!(encoded.len(), 8);
//!
//! let decoded = SlicDecoder::new(ZCursor::new(&encoded)).decode().unwrap();
//! assert_eq!(&decoded[..], &pixels[..]);
//! ```
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use coverage::*;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use surface::*;
pub use tile::*;
pub use zune_core;

pub mod constants;
mod coverage;
mod decoder;
mod encoder;
mod errors;
mod surface;
mod tile;
