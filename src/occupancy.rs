//! Row-indexed occupancy tracking for the placement scan.

use alloc::vec::Vec;

use crate::arrange::GridPosition;

/// Cells already claimed by placed items, one bit per cell.
///
/// Rows are stored as fixed-size runs of `u64` words in a flat vector
/// and allocated on demand; any row beyond the allocated range is
/// entirely free. Callers only query rectangles that fit the grid
/// width horizontally.
pub(crate) struct OccupancySet {
    columns_count: u32,
    words_per_row: usize,
    words: Vec<u64>,
}

impl OccupancySet {
    pub(crate) fn new(columns_count: u32) -> Self {
        Self {
            columns_count,
            words_per_row: (columns_count as usize).div_ceil(64),
            words: Vec::new(),
        }
    }

    fn locate(&self, row: u32, column: u32) -> (usize, u64) {
        let index = row as usize * self.words_per_row + column as usize / 64;
        (index, 1u64 << (column % 64))
    }

    fn is_occupied(&self, row: u32, column: u32) -> bool {
        let (index, mask) = self.locate(row, column);
        self.words.get(index).is_some_and(|word| word & mask != 0)
    }

    /// Whether the whole rectangle anchored at `anchor` is free.
    pub(crate) fn is_free(&self, anchor: GridPosition, row_span: u32, column_span: u32) -> bool {
        debug_assert!(anchor.column + column_span <= self.columns_count);
        for row in anchor.row..anchor.row + row_span {
            if row as usize * self.words_per_row >= self.words.len() {
                // This row and everything below it is unallocated.
                return true;
            }
            for column in anchor.column..anchor.column + column_span {
                if self.is_occupied(row, column) {
                    return false;
                }
            }
        }
        true
    }

    /// Claim every cell of the rectangle anchored at `anchor`.
    pub(crate) fn mark(&mut self, anchor: GridPosition, row_span: u32, column_span: u32) {
        debug_assert!(row_span > 0 && column_span > 0);
        debug_assert!(anchor.column + column_span <= self.columns_count);
        let needed = (anchor.row + row_span) as usize * self.words_per_row;
        if self.words.len() < needed {
            self.words.resize(needed, 0);
        }
        for row in anchor.row..anchor.row + row_span {
            for column in anchor.column..anchor.column + column_span {
                let (index, mask) = self.locate(row, column);
                self.words[index] |= mask;
            }
        }
    }
}
