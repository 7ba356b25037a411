//! Textual rendering of a computed arrangement.
//!
//! Produces a row-by-row dump with one marker per cell, intended for
//! logs and test assertions, not production rendering. The placement
//! algorithm never consumes it.
//!
//! # Example
//!
//! ```
//! use gridflow::{GridItem, arrange, render_text};
//!
//! let items = [
//!     GridItem::spanning(2, 2).tag("A"),
//!     GridItem::new().tag("B"),
//! ];
//! let arrangement = arrange(&items, 2);
//!
//! assert_eq!(render_text(&arrangement), "AA\nAA\nB.\n");
//! ```

use alloc::string::String;
use core::fmt;

use crate::arrange::{GridPosition, LayoutArrangement};

/// Marker for a cell no item occupies.
const EMPTY_CELL: char = '.';
/// Marker for a cell occupied by an untagged item.
const UNTAGGED_CELL: char = '-';

/// Render the arrangement as one marker per cell, rows top to bottom,
/// each row terminated by a newline.
///
/// Occupied cells show the owning item's tag (or `-` when untagged);
/// free cells show `.`. Rows run from 0 to the last occupied row, so
/// an empty arrangement renders as the empty string.
pub fn render_text(arrangement: &LayoutArrangement) -> String {
    let mut out = String::new();
    for row in 0..arrangement.row_count() {
        for column in 0..arrangement.columns_count {
            match arrangement.item_at(GridPosition::new(row, column)) {
                Some(placed) => match &placed.item.tag {
                    Some(tag) => out.push_str(tag),
                    None => out.push(UNTAGGED_CELL),
                },
                None => out.push(EMPTY_CELL),
            }
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for LayoutArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}
