/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use zune_core::bytestream::ZCursor;
use zune_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default()
        .set_max_width(4096)
        .set_max_height(4096);

    let mut decoder = zune_slic::SlicDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();
});
