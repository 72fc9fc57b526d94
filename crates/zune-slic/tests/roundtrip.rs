/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_slic::constants::SLIC_MAX_TILE_SIZE;
use zune_slic::{shape_histogram, SlicDecoder, SlicEncoder, TileShape};

fn encode(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
    let mut encoder = SlicEncoder::new(pixels, options);

    let mut output = Vec::with_capacity(encoder.max_size());
    let written = encoder.encode(&mut output).unwrap();
    assert_eq!(written, output.len());

    output
}

fn decode_strict(data: &[u8]) -> Vec<u8> {
    let options = DecoderOptions::default().set_strict_mode(true);
    SlicDecoder::new_with_options(ZCursor::new(data), options)
        .decode()
        .unwrap()
}

/// Noise where every pixel differs from its neighbours
fn random_image(rand: &mut nanorand::WyRand, width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3).map(|_| rand.generate::<u8>()).collect()
}

/// An image made of flat rectangles drawn over each other, a few
/// colors only so runs and squares show up
fn blocky_image(rand: &mut nanorand::WyRand, width: usize, height: usize) -> Vec<u8> {
    let palette = [[255_u8, 0, 0], [0, 255, 0], [0, 0, 255], [20, 20, 20]];
    let mut pixels = vec![255_u8; width * height * 3];

    for _ in 0..12 {
        let color = palette[rand.generate_range(0..palette.len())];
        let row = rand.generate_range(0..height);
        let col = rand.generate_range(0..width);
        let h = rand.generate_range(1..=height - row);
        let w = rand.generate_range(1..=width - col);

        for r in row..row + h {
            for c in col..col + w {
                let offset = (r * width + c) * 3;
                pixels[offset..offset + 3].copy_from_slice(&color);
            }
        }
    }
    pixels
}

#[test]
fn roundtrip_random_noise() {
    let mut rand = nanorand::WyRand::new_seed(0x5EED);

    for _ in 0..8 {
        let width = rand.generate_range(1_usize..=40);
        let height = rand.generate_range(1_usize..=40);
        let pixels = random_image(&mut rand, width, height);

        let encoded = encode(&pixels, width, height);
        assert_eq!(decode_strict(&encoded), pixels);
    }
}

#[test]
fn roundtrip_blocky_images() {
    let mut rand = nanorand::WyRand::new_seed(42);

    for _ in 0..16 {
        let width = rand.generate_range(1_usize..=150);
        let height = rand.generate_range(1_usize..=150);
        let pixels = blocky_image(&mut rand, width, height);

        let encoded = encode(&pixels, width, height);
        assert_eq!(decode_strict(&encoded), pixels);
        assert!(encoded.len() <= 4 + width * height * 4);
    }
}

#[test]
fn every_pixel_is_covered_by_a_tile_of_its_color() {
    let mut rand = nanorand::WyRand::new_seed(7);
    let (width, height) = (97, 61);
    let pixels = blocky_image(&mut rand, width, height);

    let encoded = encode(&pixels, width, height);
    let tiles = SlicDecoder::new(ZCursor::new(&encoded))
        .decode_tiles()
        .unwrap();

    let mut hits = vec![0_u32; width * height];

    for tile in &tiles {
        assert!(tile.row + tile.height() <= height);
        assert!(tile.col + tile.width() <= width);
        assert!(tile.record.size <= SLIC_MAX_TILE_SIZE);

        for r in tile.row..tile.row + tile.height() {
            for c in tile.col..tile.col + tile.width() {
                let offset = (r * width + c) * 3;
                // tiles may overlap, but only over pixels of their own color
                assert_eq!(&pixels[offset..offset + 3], &tile.record.color);
                hits[r * width + c] += 1;
            }
        }
    }
    assert!(hits.iter().all(|x| *x >= 1));
    assert_eq!(tiles.len(), (encoded.len() - 4) / 4);
}

#[test]
fn header_stores_rows_then_columns() {
    let (width, height) = (513, 2);
    let pixels = vec![9_u8; width * height * 3];
    let encoded = encode(&pixels, width, height);

    assert_eq!(&encoded[..4], &[0_u8, 2, 2, 1]);

    let mut decoder = SlicDecoder::new(ZCursor::new(&encoded));
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((width, height)));
    assert_eq!(decoder.output_buffer_size(), Some(width * height * 3));
}

#[test]
fn reencoding_is_idempotent() {
    let mut rand = nanorand::WyRand::new_seed(1234);
    let (width, height) = (64, 48);
    let pixels = blocky_image(&mut rand, width, height);

    let first = encode(&pixels, width, height);
    let decoded = decode_strict(&first);
    let second = encode(&decoded, width, height);

    assert_eq!(first, second);
}

#[test]
fn solid_image_uses_capped_squares() {
    let (width, height) = (130, 130);
    let pixels = vec![77_u8; width * height * 3];

    let encoded = encode(&pixels, width, height);
    let tiles = SlicDecoder::new(ZCursor::new(&encoded))
        .decode_tiles()
        .unwrap();

    assert_eq!(tiles[0].record.shape, TileShape::Square);
    assert_eq!(tiles[0].record.size, SLIC_MAX_TILE_SIZE);
    assert_eq!(tiles[1].record.size, SLIC_MAX_TILE_SIZE);
    assert!(shape_histogram(&tiles)[usize::from(TileShape::Square.code())] >= 4);
    assert_eq!(decode_strict(&encoded), pixels);
}

#[test]
fn rgba_and_luma_inputs_decode_to_rgb() {
    let rgba = [1_u8, 2, 3, 0, 1, 2, 3, 128, 4, 5, 6, 255];
    let options = EncoderOptions::new(3, 1, ColorSpace::RGBA, BitDepth::Eight);
    let mut encoded = vec![];
    SlicEncoder::new(&rgba, options).encode(&mut encoded).unwrap();

    // alpha is dropped, so the first two pixels form a row run
    assert_eq!(encoded.len(), 4 + 8);
    assert_eq!(decode_strict(&encoded), vec![1_u8, 2, 3, 1, 2, 3, 4, 5, 6]);

    let luma = [10_u8, 10, 20, 20];
    let options = EncoderOptions::new(2, 2, ColorSpace::Luma, BitDepth::Eight);
    let mut encoded = vec![];
    SlicEncoder::new(&luma, options).encode(&mut encoded).unwrap();

    assert_eq!(
        decode_strict(&encoded),
        vec![10_u8, 10, 10, 10, 10, 10, 20, 20, 20, 20, 20, 20]
    );
}
