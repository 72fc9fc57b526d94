/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

pub static ENCODE_HELP: &str = "Compress a raster image into a SLIC file

The input may be a BMP, PNG or PPM image, it is converted
to 8 bit RGB before compression, any alpha channel is dropped.";

pub static DECODE_HELP: &str = "Decompress a SLIC file into a raster image

The output format is picked from the extension of the output path,
e.g out.png writes a PNG while out.bmp writes a bitmap.";

pub static PROBE_HELP: &str = "Print information about SLIC files as JSON

Reports dimensions, the number of tiles of each shape
and how the file size compares to raw 24 bit pixels.";

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .action(ArgAction::Set)
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
        .action(ArgAction::Set)
        .required(true)
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("slic")
        .about("Squares and Lines Image Compression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("encode")
            .about("Compress a raster image into a SLIC file")
            .long_about(ENCODE_HELP)
            .arg(input_arg())
            .arg(output_arg()))
        .subcommand(Command::new("decode")
            .about("Decompress a SLIC file into a raster image")
            .long_about(DECODE_HELP)
            .arg(input_arg())
            .arg(output_arg()))
        .subcommand(Command::new("probe")
            .about("Print information about SLIC files")
            .long_about(PROBE_HELP)
            .arg(input_arg()
                .action(ArgAction::Append)))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Overwrite output files that already exist"))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat malformed SLIC streams as errors")
            .long_help("Reject SLIC files with trailing bytes, surplus tiles, tiles past the image edge,\nzero sized tiles or pixels no tile covers instead of warning about them"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("65535"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("65535"))
}
