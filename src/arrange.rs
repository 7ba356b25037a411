//! Item data model and greedy auto-placement.
//!
//! Packs an ordered sequence of row/column-spanning items into a grid
//! of fixed column width. Placement is a single forward scan in reading
//! order (left to right, top to bottom): each item is anchored at the
//! first cursor position where its full rectangle fits, and the cursor
//! never backtracks. Rows grow without bound, so every item whose
//! column span fits the grid width eventually lands.
//!
//! # Example
//!
//! ```
//! use gridflow::{GridItem, GridPosition, arrange};
//!
//! let items = [
//!     GridItem::spanning(2, 2).tag("A"),
//!     GridItem::new().tag("B"),
//! ];
//! let arrangement = arrange(&items, 2);
//!
//! // "A" fills rows 0-1 completely; "B" lands on the first free row.
//! assert_eq!(arrangement.items[0].start, GridPosition::new(0, 0));
//! assert_eq!(arrangement.items[0].end, GridPosition::new(1, 1));
//! assert_eq!(arrangement.items[1].start, GridPosition::new(2, 0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::occupancy::OccupancySet;

/// A placement request: how many cells the item wants on each axis.
///
/// The optional `tag` is a debug label with no effect on placement.
/// Items have no identity beyond structural equality — duplicates are
/// valid and are placed independently, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItem {
    /// Debug label. Rendered per cell by the textual dump.
    pub tag: Option<String>,
    /// Cells occupied vertically. Zero is invalid and the item is skipped.
    pub row_span: u32,
    /// Cells occupied horizontally. Zero is invalid and the item is skipped.
    pub column_span: u32,
}

impl Default for GridItem {
    /// A 1×1 untagged item; spans default to 1, not 0.
    fn default() -> Self {
        Self::new()
    }
}

impl GridItem {
    /// A 1×1 untagged item.
    pub fn new() -> Self {
        Self {
            tag: None,
            row_span: 1,
            column_span: 1,
        }
    }

    /// An untagged item spanning `row_span` × `column_span` cells.
    pub fn spanning(row_span: u32, column_span: u32) -> Self {
        Self {
            tag: None,
            row_span,
            column_span,
        }
    }

    /// Set the debug tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the vertical span.
    pub fn row_span(mut self, rows: u32) -> Self {
        self.row_span = rows;
        self
    }

    /// Set the horizontal span.
    pub fn column_span(mut self, columns: u32) -> Self {
        self.column_span = columns;
        self
    }
}

/// A single grid cell coordinate, zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
}

impl GridPosition {
    /// Create a position.
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// The next cell in reading order: one column right, wrapping to
    /// the start of the next row at the grid edge.
    pub(crate) fn next(self, columns_count: u32) -> Self {
        let mut column = self.column + 1;
        let mut row = self.row;
        if column >= columns_count {
            column = 0;
            row += 1;
        }
        Self { row, column }
    }
}

/// One placed item: the original request plus the inclusive corners of
/// its occupied rectangle.
///
/// `end.row = start.row + row_span - 1` and likewise for columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrangedItem {
    /// The request, unmodified.
    pub item: GridItem,
    /// Top-left cell of the occupied rectangle.
    pub start: GridPosition,
    /// Bottom-right cell of the occupied rectangle (inclusive).
    pub end: GridPosition,
}

impl ArrangedItem {
    /// Whether `position` lies within the occupied rectangle.
    /// Bounds are inclusive on both axes.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.column >= self.start.column
            && position.column <= self.end.column
            && position.row >= self.start.row
            && position.row <= self.end.row
    }

    /// Occupied cell count (rows × columns of the rectangle).
    pub fn area(&self) -> u32 {
        (self.end.row - self.start.row + 1) * (self.end.column - self.start.column + 1)
    }
}

/// The computed arrangement: the column count it was built for, and
/// the placed items in input order (skipped items simply absent).
///
/// No two rectangles share a cell, and every occupied column lies in
/// `[0, columns_count)`. Rows are unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutArrangement {
    /// Grid width the arrangement was computed against.
    pub columns_count: u32,
    /// Placed items, in input order.
    pub items: Vec<ArrangedItem>,
}

impl LayoutArrangement {
    /// The first placed item (in input order) whose rectangle contains
    /// `position`, if any. At most one item can contain a cell, so
    /// "first" only matters for the miss case.
    pub fn item_at(&self, position: GridPosition) -> Option<&ArrangedItem> {
        self.items.iter().find(|placed| placed.contains(position))
    }

    /// Number of rows the arrangement spans: max occupied row + 1,
    /// or 0 when nothing was placed.
    pub fn row_count(&self) -> u32 {
        self.items
            .iter()
            .map(|placed| placed.end.row + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of occupied cells.
    pub fn occupied_cells(&self) -> u32 {
        self.items.iter().map(ArrangedItem::area).sum()
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Why an input item was excluded from the arrangement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// `column_span` exceeds the grid width; no row can ever hold it.
    /// Span reduction is deliberately not attempted.
    SpanExceedsColumns,
    /// `row_span` or `column_span` is zero.
    ZeroSpan,
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpanExceedsColumns => f.write_str("column span exceeds grid width"),
            Self::ZeroSpan => f.write_str("zero row or column span"),
        }
    }
}

/// An input item excluded from the arrangement, with its input index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedItem {
    /// Index of the item in the input sequence.
    pub index: usize,
    /// The request, unmodified.
    pub item: GridItem,
    /// Why it was excluded.
    pub reason: SkipReason,
}

/// Arrangement plus an account of every excluded input item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrangeReport {
    /// The computed arrangement.
    pub arrangement: LayoutArrangement,
    /// Excluded items, in input order.
    pub skipped: Vec<SkippedItem>,
}

/// Place `items` into a grid `columns_count` cells wide.
///
/// Items are placed in input order by a forward-only cursor scan;
/// see the [module docs](self) for the full rules. Invalid requests
/// are excluded rather than reported as errors:
///
/// - `columns_count == 0` yields an empty arrangement (still carrying
///   the given column count).
/// - An item with `column_span > columns_count` is skipped — it can
///   never fit in any row.
/// - An item with a zero span is skipped (caller contract violation,
///   handled like the span overflow rather than clamped).
///
/// Use [`arrange_report`] to learn which items were excluded and why.
///
/// # Example
///
/// ```
/// use gridflow::{GridItem, GridPosition, arrange};
///
/// let items = [GridItem::new(), GridItem::new(), GridItem::new(), GridItem::new()];
/// let arrangement = arrange(&items, 3);
///
/// let anchors: Vec<_> = arrangement.items.iter().map(|p| p.start).collect();
/// assert_eq!(
///     anchors,
///     [
///         GridPosition::new(0, 0),
///         GridPosition::new(0, 1),
///         GridPosition::new(0, 2),
///         GridPosition::new(1, 0),
///     ]
/// );
/// ```
pub fn arrange(items: &[GridItem], columns_count: u32) -> LayoutArrangement {
    arrange_report(items, columns_count).arrangement
}

/// Like [`arrange`], but also reports every excluded item.
///
/// The arrangement is identical to what [`arrange`] produces for the
/// same inputs.
pub fn arrange_report(items: &[GridItem], columns_count: u32) -> ArrangeReport {
    let mut placed: Vec<ArrangedItem> = Vec::new();
    let mut skipped: Vec<SkippedItem> = Vec::new();
    let mut occupied = OccupancySet::new(columns_count);
    let mut cursor = GridPosition::new(0, 0);

    for (index, item) in items.iter().enumerate() {
        if item.row_span == 0 || item.column_span == 0 {
            debug!("skipping item {index}: zero span");
            skipped.push(SkippedItem {
                index,
                item: item.clone(),
                reason: SkipReason::ZeroSpan,
            });
            continue;
        }
        if item.column_span > columns_count {
            debug!(
                "skipping item {index}: column span {} exceeds {columns_count} columns",
                item.column_span
            );
            skipped.push(SkippedItem {
                index,
                item: item.clone(),
                reason: SkipReason::SpanExceedsColumns,
            });
            continue;
        }

        // Forward scan: walk the cursor cell by cell until the item's
        // rectangle neither overflows the row nor overlaps a claimed
        // cell. Rows are unbounded, so a fully empty row is always
        // reachable and the loop terminates.
        while cursor.column + item.column_span > columns_count
            || !occupied.is_free(cursor, item.row_span, item.column_span)
        {
            cursor = cursor.next(columns_count);
        }

        occupied.mark(cursor, item.row_span, item.column_span);
        let start = cursor;
        let end = GridPosition::new(
            start.row + item.row_span - 1,
            start.column + item.column_span - 1,
        );
        trace!(
            "placed item {index} at ({}, {})..=({}, {})",
            start.row, start.column, end.row, end.column
        );
        placed.push(ArrangedItem {
            item: item.clone(),
            start,
            end,
        });
        cursor = cursor.next(columns_count);
    }

    ArrangeReport {
        arrangement: LayoutArrangement {
            columns_count,
            items: placed,
        },
        skipped,
    }
}
