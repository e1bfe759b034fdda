//! arrowpane - Tabular preview engine for columnar data files
//!
//! Renders a human-readable preview of an Arrow IPC or Parquet file:
//! opens the file, reads its schema and batched row data, stringifies
//! every typed column value and feeds the result into a bounded
//! append-only grid, together with column/row summary counters.
//!
//! The crate is the materialization core of a document-preview
//! integration: the hosting contract (parent window, placement rect,
//! focus and accelerator forwarding) is modeled as thin boundary types
//! in [`host`], while the actual widget toolkit stays outside.
//!
//! # Quick Start
//!
//! ```no_run
//! use arrowpane::{PreviewSession, Rect, WindowHandle};
//!
//! let mut session = PreviewSession::new();
//! session.initialize("data/train.arrow").unwrap();
//! session.set_window(WindowHandle(1), Rect::new(0, 0, 800, 600));
//!
//! let summary = session.do_preview().unwrap();
//! println!("{} columns, {} rows", summary.columns, summary.rows);
//!
//! if let Some(view) = session.view() {
//!     print!("{}", view.grid().render_plain(32));
//! }
//! session.unload();
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::float_cmp,
        clippy::unreadable_literal
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod host;
pub mod materialize;
pub mod session;
pub mod source;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use cell::{format_cell, SENTINEL};
pub use error::{Error, Result};
pub use grid::{Align, ColumnHeader, TableSink, TextGrid};
pub use host::{AcceleratorMsg, Handled, HostFrame, Rect, WindowHandle};
pub use materialize::{materialize, TableSummary, COLUMN_WIDTH};
pub use session::{PreviewSession, PreviewView};
pub use source::RecordSource;
