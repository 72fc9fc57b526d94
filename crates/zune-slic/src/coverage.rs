/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

/// Result of marking a tile as covered
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CoverOutcome {
    /// Pixels that were uncovered before this call
    pub newly_covered: usize,
    /// Pixels that an earlier tile had already covered
    pub overlapped:    usize,
    /// Whether part of the tile fell outside the image and was dropped
    pub clipped:       bool
}

/// Tracks which pixels of an image already belong to a tile
/// and where the next tile starts.
///
/// Tiles never store their position. The origin of the next tile
/// is always the first uncovered pixel in row-major order, and the
/// encoder and decoder both walk the image with this tracker so that
/// they agree on it.
///
/// Tiles only ever grow right and down from the cursor, so once
/// the cursor moves to a row every row above it is fully covered, as
/// are the pixels to the left of the cursor in its row. The scan
/// therefore resumes from the last cursor instead of the top of the image.
pub struct CoverageTracker {
    width:      usize,
    height:     usize,
    painted:    Vec<bool>,
    cursor_row: usize,
    cursor_col: usize,
    uncovered:  usize
}

impl CoverageTracker {
    /// Create a tracker for a `width` by `height` image with no pixel covered
    pub fn new(width: usize, height: usize) -> CoverageTracker {
        let size = width * height;

        CoverageTracker {
            width,
            height,
            painted: vec![false; size],
            cursor_row: 0,
            cursor_col: 0,
            uncovered: size
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels not yet covered by any tile
    pub const fn uncovered(&self) -> usize {
        self.uncovered
    }

    /// Whether every pixel is covered
    pub const fn is_complete(&self) -> bool {
        self.uncovered == 0
    }

    /// Find the first uncovered pixel in row-major order,
    /// starting from the last cursor
    ///
    /// # Returns
    /// - `Some((row, col))`: The origin of the next tile
    /// - `None`: Every pixel is covered
    pub fn next_uncovered(&mut self) -> Option<(usize, usize)> {
        if self.uncovered == 0 {
            return None;
        }
        let mut start_col = self.cursor_col;

        for row in self.cursor_row..self.height {
            let line = &self.painted[row * self.width..(row + 1) * self.width];

            if let Some(offset) = line[start_col..].iter().position(|covered| !covered) {
                self.cursor_row = row;
                self.cursor_col = start_col + offset;

                return Some((self.cursor_row, self.cursor_col));
            }
            start_col = 0;
        }
        // uncovered pixels exist but sit behind the cursor, this only
        // happens if someone covered pixels out of order
        None
    }

    /// Mark a `width` by `height` box whose top left corner
    /// is at `row`, `col` as covered.
    ///
    /// Parts of the box outside the image are ignored
    pub fn cover(&mut self, row: usize, col: usize, width: usize, height: usize) -> CoverOutcome {
        let mut outcome = CoverOutcome::default();

        let row_end = row.saturating_add(height);
        let col_end = col.saturating_add(width);

        if row_end > self.height || col_end > self.width {
            outcome.clipped = true;
        }

        for r in row..row_end.min(self.height) {
            let start = r * self.width;

            for covered in &mut self.painted[start + col.min(self.width)..start + col_end.min(self.width)]
            {
                if *covered {
                    outcome.overlapped += 1;
                } else {
                    *covered = true;
                    outcome.newly_covered += 1;
                }
            }
        }
        self.uncovered -= outcome.newly_covered;

        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::coverage::CoverageTracker;

    #[test]
    fn test_scan_order() {
        let mut tracker = CoverageTracker::new(3, 2);

        assert_eq!(tracker.next_uncovered(), Some((0, 0)));
        tracker.cover(0, 0, 1, 2);
        assert_eq!(tracker.next_uncovered(), Some((0, 1)));
        tracker.cover(0, 1, 2, 1);
        // (1,0) is covered by the first column run
        assert_eq!(tracker.next_uncovered(), Some((1, 1)));
        tracker.cover(1, 1, 2, 1);

        assert!(tracker.is_complete());
        assert_eq!(tracker.next_uncovered(), None);
    }

    #[test]
    fn test_cover_reports_overlap_and_clipping() {
        let mut tracker = CoverageTracker::new(4, 4);

        let first = tracker.cover(0, 0, 2, 2);
        assert_eq!(first.newly_covered, 4);
        assert_eq!(first.overlapped, 0);
        assert!(!first.clipped);

        let second = tracker.cover(1, 1, 5, 1);
        assert_eq!(second.newly_covered, 2);
        assert_eq!(second.overlapped, 1);
        assert!(second.clipped);

        assert_eq!(tracker.uncovered(), 10);
    }

    #[test]
    fn test_empty_image() {
        let mut tracker = CoverageTracker::new(0, 5);
        assert!(tracker.is_complete());
        assert_eq!(tracker.next_uncovered(), None);
    }
}
