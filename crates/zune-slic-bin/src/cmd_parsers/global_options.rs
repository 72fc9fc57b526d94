/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_slic::constants::SLIC_MAX_DIMENSION;

/// Options shared by every subcommand
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      SLIC_MAX_DIMENSION,
            max_height:     SLIC_MAX_DIMENSION,
            strict_mode:    false,
            override_files: false
        }
    }
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if flag(options, "yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    if flag(options, "strict") {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }
    cmd_options
}

/// Pick the log level from the logging flags, warnings by default
pub fn log_level(options: &ArgMatches) -> Level {
    if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::get_decoder_options;
    use crate::cmd_parsers::global_options::{log_level, parse_options, CmdOptions};

    #[test]
    fn test_defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["slic", "encode", "-i", "a.bmp", "-o", "a.slc"])
            .unwrap();

        assert_eq!(parse_options(&matches), CmdOptions::new());
        assert_eq!(log_level(&matches), Level::Warn);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "slic",
                "decode",
                "-i",
                "a.slc",
                "-o",
                "a.png",
                "--strict",
                "--yes",
                "--max-width",
                "100",
                "--trace"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert!(options.strict_mode);
        assert!(options.override_files);
        assert_eq!(options.max_width, 100);
        assert_eq!(options.max_height, 65535);
        assert_eq!(log_level(&matches), Level::Trace);

        let decoder_options = get_decoder_options(&options);
        assert!(decoder_options.strict_mode());
        assert_eq!(decoder_options.max_width(), 100);
    }

    #[test]
    fn test_probe_takes_many_inputs() {
        let matches = create_cmd_args()
            .try_get_matches_from(["slic", "probe", "-i", "a.slc", "-i", "b.slc"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "probe");
        assert_eq!(sub.get_many::<String>("in").unwrap().count(), 2);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(create_cmd_args().try_get_matches_from(["slic"]).is_err());
        assert!(create_cmd_args()
            .try_get_matches_from(["slic", "encode", "-i", "a.bmp"])
            .is_err());
    }
}
