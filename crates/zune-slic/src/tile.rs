/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tile shapes and the four byte tile record

use crate::constants::{SLIC_SHAPE_SHIFT, SLIC_SIZE_MASK};

/// The shape of a tile, as stored in the two high bits
/// of a record's last byte
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TileShape {
    /// A single pixel, the size is ignored
    Dot,
    /// `size` pixels across a row
    RowRun,
    /// `size` pixels down a column
    ColumnRun,
    /// `size` by `size` pixels
    Square
}

/// Order in which the encoder tries to grow shapes from the cursor.
///
/// Squares first, then horizontal runs, then vertical runs. The
/// first shape that grows past one pixel wins, otherwise a dot is
/// emitted.
pub const SEARCH_ORDER: [TileShape; 3] = [TileShape::Square, TileShape::RowRun, TileShape::ColumnRun];

impl TileShape {
    /// All shapes, indexed by their code
    pub const ALL: [TileShape; 4] = [
        TileShape::Dot,
        TileShape::RowRun,
        TileShape::ColumnRun,
        TileShape::Square
    ];

    /// Return the shape for a two bit code
    ///
    /// Only the lowest two bits are looked at
    pub const fn from_code(code: u8) -> TileShape {
        match code & 0x03 {
            0 => TileShape::Dot,
            1 => TileShape::RowRun,
            2 => TileShape::ColumnRun,
            _ => TileShape::Square
        }
    }

    /// The two bit code stored in a record
    pub const fn code(self) -> u8 {
        match self {
            TileShape::Dot => 0,
            TileShape::RowRun => 1,
            TileShape::ColumnRun => 2,
            TileShape::Square => 3
        }
    }

    /// Width and height covered by a tile of this shape
    /// and the given size
    ///
    /// # Returns
    /// `(width, height)`
    pub const fn dimensions(self, size: u8) -> (usize, usize) {
        let size = size as usize;

        match self {
            TileShape::Dot => (1, 1),
            TileShape::RowRun => (size, 1),
            TileShape::ColumnRun => (1, size),
            TileShape::Square => (size, size)
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileShape::Dot => "dot",
            TileShape::RowRun => "row",
            TileShape::ColumnRun => "column",
            TileShape::Square => "square"
        }
    }
}

/// A single tile record, color plus shape and size
///
/// This is exactly what is stored in the stream, the position
/// of the tile is implied by the tiles preceding it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TileRecord {
    pub color: [u8; 3],
    pub shape: TileShape,
    pub size:  u8
}

impl TileRecord {
    /// Create a new record
    ///
    /// Dots always carry a size of zero, and sizes are truncated
    /// to the six bits the format can hold
    pub const fn new(color: [u8; 3], shape: TileShape, size: u8) -> TileRecord {
        let size = match shape {
            TileShape::Dot => 0,
            _ => size & SLIC_SIZE_MASK
        };
        TileRecord { color, shape, size }
    }

    /// Parse a record from its four bytes
    pub const fn from_bytes(bytes: [u8; 4]) -> TileRecord {
        TileRecord {
            color: [bytes[0], bytes[1], bytes[2]],
            shape: TileShape::from_code(bytes[3] >> SLIC_SHAPE_SHIFT),
            size:  bytes[3] & SLIC_SIZE_MASK
        }
    }

    /// Serialize this record to its four bytes
    pub const fn to_bytes(self) -> [u8; 4] {
        let size = match self.shape {
            TileShape::Dot => 0,
            _ => self.size & SLIC_SIZE_MASK
        };
        [
            self.color[0],
            self.color[1],
            self.color[2],
            (self.shape.code() << SLIC_SHAPE_SHIFT) | size
        ]
    }

    /// Width and height this record paints
    pub const fn dimensions(&self) -> (usize, usize) {
        self.shape.dimensions(self.size)
    }

    /// Number of pixels this record paints, ignoring image bounds
    pub const fn area(&self) -> usize {
        let (width, height) = self.dimensions();
        width * height
    }
}

/// A record together with the position it was placed at
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tile {
    /// Row of the top left corner
    pub row:    usize,
    /// Column of the top left corner
    pub col:    usize,
    pub record: TileRecord
}

impl Tile {
    pub const fn width(&self) -> usize {
        self.record.dimensions().0
    }
    pub const fn height(&self) -> usize {
        self.record.dimensions().1
    }
}
