//! Greedy grid auto-placement computation.
//!
//! Packs an ordered sequence of row/column-spanning items into a grid
//! of fixed column width, in reading order, without overlap — the same
//! family of problem as CSS-grid auto-placement or terminal-window
//! tiling. Pure computation — no rendering, no view binding, no pixel
//! geometry; a consuming layer turns the resulting cell rectangles
//! into screen coordinates.
//!
//! # Modules
//!
//! - [`arrange`] — item/position data model and the placement algorithm
//! - [`render`] — textual grid dump for logs and test assertions
//!   (feature `render`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod arrange;
mod occupancy;
#[cfg(feature = "render")]
pub mod render;

// Re-exports: core types from the arrange module
pub use arrange::{
    ArrangeReport, ArrangedItem, GridItem, GridPosition, LayoutArrangement, SkipReason,
    SkippedItem, arrange, arrange_report,
};
#[cfg(feature = "render")]
pub use render::render_text;
