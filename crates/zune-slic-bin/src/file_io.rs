/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::info;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SlicBinErrors;

/// Check that `input` can be read and that writing `output`
/// would not clobber anything the user did not agree to
pub fn verify_file_paths(
    input: &Path, output: &Path, options: &CmdOptions
) -> Result<(), SlicBinErrors> {
    if input == output {
        return Err(SlicBinErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }

    if !input.exists() {
        return Err(SlicBinErrors::GenericString(format!(
            "Path {:?}, does not exist",
            input
        )));
    }

    if !input.is_file() {
        return Err(SlicBinErrors::GenericString(format!(
            "Path {:?} is not a file",
            input
        )));
    }

    if output.exists() {
        if !options.override_files {
            return Err(SlicBinErrors::GenericString(format!(
                "File {:?} exists, pass --yes to overwrite it",
                output
            )));
        }
        info!("Overwriting path {:?} ", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::file_io::verify_file_paths;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zune-slic-bin-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_refuses_to_overwrite_without_yes() {
        let dir = scratch_dir("overwrite");
        let input = dir.join("in.bmp");
        let output = dir.join("out.slc");
        fs::write(&input, [0_u8]).unwrap();
        fs::write(&output, [0_u8]).unwrap();

        let mut options = CmdOptions::new();
        assert!(verify_file_paths(&input, &output, &options).is_err());

        options.override_files = true;
        assert!(verify_file_paths(&input, &output, &options).is_ok());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_rejects_missing_and_identical_paths() {
        let dir = scratch_dir("paths");
        let input = dir.join("missing.bmp");
        let options = CmdOptions::new();

        assert!(verify_file_paths(&input, &dir.join("out.slc"), &options).is_err());

        fs::write(&input, [0_u8]).unwrap();
        assert!(verify_file_paths(&input, &input, &options).is_err());
        assert!(verify_file_paths(&dir, &dir.join("out.slc"), &options).is_err());
        assert!(verify_file_paths(&input, &dir.join("out.slc"), &options).is_ok());

        fs::remove_dir_all(dir).unwrap();
    }
}
