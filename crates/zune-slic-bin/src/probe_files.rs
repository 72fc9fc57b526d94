/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use log::warn;
use zune_core::bytestream::ZCursor;
use zune_slic::{probe_slic, shape_histogram, SlicDecoder};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SlicBinErrors;
use crate::serde::SlicMetadata;

/// Read the header and tiles of one SLIC file
///
/// Returns `None` if the file does not look like SLIC
///
/// Replaying the tiles tracks coverage per pixel, so the header is held to
/// the same size limits as decoding. Malformed tiles are only warned about.
pub fn probe_file(path: &OsStr, cmd_opts: &CmdOptions) -> Result<Option<SlicMetadata>, SlicBinErrors> {
    let data = std::fs::read(path)?;

    if !probe_slic(&data) {
        return Ok(None);
    }
    let options = get_decoder_options(cmd_opts).set_strict_mode(false);

    let mut decoder = SlicDecoder::new_with_options(ZCursor::new(&data), options);
    let tiles = decoder.decode_tiles()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| format!("Could not read dimensions of {:?}", path))?;

    Ok(Some(SlicMetadata {
        file: path.to_os_string(),
        file_size: data.len() as u64,
        width,
        height,
        shapes: shape_histogram(&tiles)
    }))
}

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files<'a, I>(files: I, cmd_opts: &CmdOptions) -> Result<(), SlicBinErrors>
where
    I: IntoIterator<Item = &'a OsStr>
{
    for in_file in files {
        match probe_file(in_file, cmd_opts)? {
            Some(metadata) => {
                let json = serde_json::to_string_pretty(&metadata)
                    .map_err(|e| format!("Could not serialize metadata: {e}"))?;
                println!("{json}");
            }
            None => warn!("{:?} is not a SLIC file, skipping", in_file)
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::errors::SlicBinErrors;
    use crate::probe_files::probe_file;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zune-slic-bin-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_header_above_limits_is_rejected() {
        let dir = scratch_dir("limits");
        let file = dir.join("huge.slc");
        // claims 65535x65535 pixels with a single tile
        fs::write(&file, [0xFF_u8, 0xFF, 0xFF, 0xFF, 1, 2, 3, 0xFF]).unwrap();

        let mut options = CmdOptions::new();
        options.max_width = 1024;
        options.max_height = 1024;

        let result = probe_file(file.as_os_str(), &options);
        assert!(matches!(result, Err(SlicBinErrors::DecodeErrors(_))));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_metadata_ignores_strict_mode() {
        let dir = scratch_dir("lenient");
        let file = dir.join("short.slc");
        // 1x2 image with a single dot, one pixel never covered
        fs::write(&file, [0_u8, 1, 0, 2, 9, 9, 9, 0]).unwrap();

        let mut options = CmdOptions::new();
        options.strict_mode = true;

        let metadata = probe_file(file.as_os_str(), &options).unwrap().unwrap();
        assert_eq!((metadata.width, metadata.height), (2, 1));
        assert_eq!(metadata.tiles(), 1);

        fs::remove_dir_all(dir).unwrap();
    }
}
