/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use zune_slic::TileShape;

/// What `slic probe` reports for one file
pub struct SlicMetadata {
    pub file:      OsString,
    pub file_size: u64,
    pub width:     usize,
    pub height:    usize,
    /// Tiles per shape, indexed by shape code
    pub shapes:    [usize; 4]
}

impl SlicMetadata {
    pub fn tiles(&self) -> usize {
        self.shapes.iter().sum()
    }

    /// File size over the size of the same pixels stored as raw 24 bit RGB
    pub fn compression_ratio(&self) -> f64 {
        let raw = self.width * self.height * 3;

        if raw == 0 {
            return 0.0;
        }
        self.file_size as f64 / raw as f64
    }
}

struct ShapeCounts<'a>(&'a [usize; 4]);

impl Serialize for ShapeCounts<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut map = serializer.serialize_map(Some(TileShape::ALL.len()))?;

        for shape in TileShape::ALL {
            map.serialize_entry(shape.name(), &self.0[usize::from(shape.code())])?;
        }
        map.end()
    }
}

impl Serialize for SlicMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("SlicMetadata", 7)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("tiles", &self.tiles())?;
        state.serialize_field("shapes", &ShapeCounts(&self.shapes))?;
        state.serialize_field("compression_ratio", &self.compression_ratio())?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::serde::SlicMetadata;

    #[test]
    fn test_json_layout() {
        let metadata = SlicMetadata {
            file:      "a.slc".into(),
            file_size: 12,
            width:     2,
            height:    2,
            shapes:    [0, 2, 0, 0]
        };
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "a.slc");
        assert_eq!(value["tiles"], 2);
        assert_eq!(value["shapes"]["row"], 2);
        assert_eq!(value["shapes"]["square"], 0);
        assert_eq!(value["compression_ratio"], 1.0);
    }
}
