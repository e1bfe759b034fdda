//! Batch materialization: drives an open source into a tabular sink.
//!
//! Reproduces the reference preview behavior exactly, including its
//! batch-overwrite quirk: every batch writes its rows starting at sink
//! row 0, so when a file holds several batches only the last one's
//! values remain visible, while the reported row count still covers
//! them all. Kept as-is pending product-owner clarification.

use crate::cell::{format_cell, SENTINEL};
use crate::error::Result;
use crate::grid::{Align, TableSink};
use crate::source::RecordSource;

/// Default fixed display width for every column.
pub const COLUMN_WIDTH: u16 = 100;

/// Summary counters returned by [`materialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of columns, from the schema.
    pub columns: usize,
    /// Number of rows across all batches.
    pub rows: usize,
}

/// Materialize every `(row, column)` value of `source` into `sink`.
///
/// Columns are added first, in schema order, each with the fixed
/// display width and right alignment; duplicate field names stay
/// distinct by position. Batches are then read strictly sequentially;
/// within a batch, fields form the outer loop and rows the inner loop,
/// with the column fetched from the batch by field name.
///
/// On success the summary counters are committed to the sink and
/// returned.
///
/// # Errors
///
/// Returns a decode error if any batch read fails; the sink may have
/// received partial content, so callers must not have shown it yet.
pub fn materialize<S: TableSink>(source: &mut RecordSource, sink: &mut S) -> Result<TableSummary> {
    let schema = source.schema();
    for field in schema.fields() {
        sink.add_column(field.name(), COLUMN_WIDTH, Align::Right);
    }

    let mut total_rows = 0;
    while let Some(batch) = source.next_batch() {
        let batch = batch?;
        for (col, field) in schema.fields().iter().enumerate() {
            // By-name fetch, as the reference reader does; duplicates
            // resolve to the first matching column.
            let column = batch.column_by_name(field.name());
            for row in 0..batch.num_rows() {
                let text = match column {
                    Some(array) => format_cell(array.as_ref(), row),
                    None => SENTINEL.to_string(),
                };
                sink.set_cell(row, col, text);
            }
        }
        total_rows += batch.num_rows();
    }

    let summary = TableSummary {
        columns: schema.fields().len(),
        rows: total_rows,
    };
    sink.render_summary(summary.columns, summary.rows);
    Ok(summary)
}
