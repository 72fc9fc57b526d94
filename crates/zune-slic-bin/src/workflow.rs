/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_slic::{SlicDecoder, SlicEncoder};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SlicBinErrors;
use crate::file_io::verify_file_paths;
use crate::probe_files::probe_input_files;

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, SlicBinErrors> {
    args.get_one::<String>(id)
        .map(Path::new)
        .ok_or_else(|| SlicBinErrors::GenericString(format!("Missing argument {id}")))
}

/// Run whichever subcommand was given on the command line
pub(crate) fn run_subcommand(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), SlicBinErrors> {
    match args.subcommand() {
        Some(("encode", sub)) => encode_file(path_arg(sub, "in")?, path_arg(sub, "out")?, cmd_opts),
        Some(("decode", sub)) => decode_file(path_arg(sub, "in")?, path_arg(sub, "out")?, cmd_opts),
        Some(("probe", sub)) => {
            let files = sub
                .get_raw("in")
                .ok_or_else(|| SlicBinErrors::GenericString("No input files".to_string()))?;
            probe_input_files(files, cmd_opts)
        }
        Some((name, _)) => Err(SlicBinErrors::GenericString(format!(
            "Unknown subcommand {name}"
        ))),
        None => Err(SlicBinErrors::GenericString("No subcommand given".to_string()))
    }
}

/// Compress the raster image at `input` into a SLIC file at `output`
pub fn encode_file(input: &Path, output: &Path, cmd_opts: &CmdOptions) -> Result<(), SlicBinErrors> {
    verify_file_paths(input, output, cmd_opts)?;

    debug!("Reading {:?}", input);
    let image = image::open(input)?.to_rgb8();

    let (width, height) = (image.width() as usize, image.height() as usize);
    let pixels = image.into_raw();

    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
    let mut encoder = SlicEncoder::new(&pixels, options);

    let mut encoded = vec![];
    let written = encoder.encode(&mut encoded)?;

    std::fs::write(output, &encoded)?;

    info!(
        "Compressed {width}x{height} image to {written} bytes, {} tiles",
        (written - 4) / 4
    );
    Ok(())
}

/// Decompress the SLIC file at `input` into a raster image at `output`,
/// the image format follows the extension of `output`
pub fn decode_file(input: &Path, output: &Path, cmd_opts: &CmdOptions) -> Result<(), SlicBinErrors> {
    verify_file_paths(input, output, cmd_opts)?;

    debug!("Treating {:?} as a slc file", input);
    let data = std::fs::read(input)?;

    let mut decoder =
        SlicDecoder::new_with_options(ZCursor::new(&data), get_decoder_options(cmd_opts));
    let pixels = decoder.decode()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| SlicBinErrors::GenericString("Headers not decoded".to_string()))?;

    // dimensions come from 16 bit header fields
    let image = image::RgbImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| SlicBinErrors::GenericString("Decoded pixels do not fill the image".to_string()))?;

    image.save(output)?;

    info!("Wrote {width}x{height} image to {:?}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use image::{Rgb, RgbImage};

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::probe_files::probe_file;
    use crate::workflow::{decode_file, encode_file};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zune-slic-bin-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn test_image() -> RgbImage {
        RgbImage::from_fn(37, 23, |x, y| {
            if x < 20 && y < 10 {
                Rgb([200, 10, 10])
            } else if (x + y) % 7 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([10, 200, (y * 4) as u8])
            }
        })
    }

    #[test]
    fn test_png_to_slc_to_bmp() {
        let dir = scratch_dir("roundtrip");
        let png = dir.join("in.png");
        let slc = dir.join("in.slc");
        let bmp = dir.join("out.bmp");

        let original = test_image();
        original.save(&png).unwrap();

        let options = CmdOptions::new();
        encode_file(&png, &slc, &options).unwrap();
        decode_file(&slc, &bmp, &options).unwrap();

        let decoded = image::open(&bmp).unwrap().to_rgb8();
        assert_eq!(decoded, original);

        let metadata = probe_file(slc.as_os_str(), &options).unwrap().unwrap();
        assert_eq!((metadata.width, metadata.height), (37, 23));
        assert_eq!(
            metadata.tiles() as u64 * 4 + 4,
            fs::metadata(&slc).unwrap().len()
        );

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_existing_output_needs_yes() {
        let dir = scratch_dir("existing");
        let png = dir.join("in.png");
        let slc = dir.join("in.slc");

        test_image().save(&png).unwrap();
        fs::write(&slc, b"keep").unwrap();

        let mut options = CmdOptions::new();
        assert!(encode_file(&png, &slc, &options).is_err());
        assert_eq!(fs::read(&slc).unwrap(), b"keep");

        options.override_files = true;
        encode_file(&png, &slc, &options).unwrap();
        assert_ne!(fs::read(&slc).unwrap(), b"keep");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_strict_rejects_truncated_file() {
        let dir = scratch_dir("strict");
        let slc = dir.join("short.slc");
        // 1x2 image with a single dot
        fs::write(&slc, [0_u8, 1, 0, 2, 9, 9, 9, 0]).unwrap();

        let mut options = CmdOptions::new();
        decode_file(&slc, &dir.join("lenient.ppm"), &options).unwrap();

        options.strict_mode = true;
        assert!(decode_file(&slc, &dir.join("strict.ppm"), &options).is_err());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_probe_skips_other_files() {
        let dir = scratch_dir("probe");
        let other = dir.join("notes.txt");
        fs::write(&other, b"hello").unwrap();

        assert!(probe_file(other.as_os_str(), &CmdOptions::new())
            .unwrap()
            .is_none());

        fs::remove_dir_all(dir).unwrap();
    }
}
