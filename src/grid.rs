//! Tabular sink for incremental grid population.
//!
//! The sink is write-only from the materializer's perspective: columns
//! first, then cells, then a summary. It owns no knowledge of the data
//! source. [`TextGrid`] is the owning implementation; every display
//! string it holds is released together when the grid is dropped.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Left aligned.
    Left,
    /// Right aligned.
    Right,
}

/// One column header: name, fixed display width, alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Column name, as declared by the schema.
    pub name: String,
    /// Fixed display width.
    pub width: u16,
    /// Cell alignment.
    pub align: Align,
}

/// An incremental, append-only grid abstraction.
///
/// Columns must be added before any cell is set; the column order
/// defines the column index. None of the methods fail: out-of-range
/// writes are silently dropped.
pub trait TableSink {
    /// Append one column header. Ignored once any cell has been set.
    fn add_column(&mut self, name: &str, width: u16, align: Align);

    /// Upsert the text at `(row, col)`, creating row entries on demand.
    ///
    /// A no-op when `col` is not covered by a header.
    fn set_cell(&mut self, row: usize, col: usize, text: String);

    /// Record the two summary counters (column count, row count).
    fn render_summary(&mut self, columns: usize, rows: usize);
}

/// In-memory grid of display cells.
#[derive(Debug, Clone, Default)]
pub struct TextGrid {
    headers: Vec<ColumnHeader>,
    rows: Vec<Vec<String>>,
    summary: Option<(usize, usize)>,
}

impl TextGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of column headers.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows that have received at least one cell.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The column headers, in index order.
    #[must_use]
    pub fn headers(&self) -> &[ColumnHeader] {
        &self.headers
    }

    /// The cell text at `(row, col)`, if set.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// The recorded summary counters, if any.
    #[must_use]
    pub fn summary(&self) -> Option<(usize, usize)> {
        self.summary
    }

    /// Render the grid as plain text with one line per row.
    ///
    /// Each column is padded to the width of its widest value (name
    /// included), clamped to `max_col_width`; overlong values are
    /// truncated with a `..` marker. Alignment follows each header.
    #[must_use]
    pub fn render_plain(&self, max_col_width: usize) -> String {
        let widths = self.layout_widths(max_col_width);
        let mut out = String::new();

        let names: Vec<&str> = self.headers.iter().map(|h| h.name.as_str()).collect();
        render_line(&mut out, &names, &widths, &self.headers);
        for row in &self.rows {
            let cells: Vec<&str> = (0..self.headers.len())
                .map(|c| row.get(c).map_or("", String::as_str))
                .collect();
            render_line(&mut out, &cells, &widths, &self.headers);
        }
        out
    }

    /// Per-column render widths: widest content clamped to `max_col_width`.
    fn layout_widths(&self, max_col_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| h.name.as_str().width())
            .collect();
        for row in &self.rows {
            for (col, text) in row.iter().enumerate() {
                if col < widths.len() {
                    widths[col] = widths[col].max(text.as_str().width());
                }
            }
        }
        for w in &mut widths {
            *w = (*w).min(max_col_width).max(1);
        }
        widths
    }
}

impl TableSink for TextGrid {
    fn add_column(&mut self, name: &str, width: u16, align: Align) {
        // Headers are frozen once data starts flowing.
        if self.rows.is_empty() {
            self.headers.push(ColumnHeader {
                name: name.to_string(),
                width,
                align,
            });
        }
    }

    fn set_cell(&mut self, row: usize, col: usize, text: String) {
        if col >= self.headers.len() {
            return;
        }
        if row >= self.rows.len() {
            self.rows
                .resize_with(row + 1, || vec![String::new(); self.headers.len()]);
        }
        self.rows[row][col] = text;
    }

    fn render_summary(&mut self, columns: usize, rows: usize) {
        self.summary = Some((columns, rows));
    }
}

/// Truncate `s` to at most `max_width` display columns, marking
/// truncation with a trailing `..`.
#[must_use]
pub fn truncate_text(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return s.chars().take(max_width).collect();
    }
    let mut result = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.to_string().as_str().width();
        if used + w > max_width.saturating_sub(2) {
            break;
        }
        used += w;
        result.push(ch);
    }
    result.push_str("..");
    result
}

fn render_line(out: &mut String, cells: &[&str], widths: &[usize], headers: &[ColumnHeader]) {
    for (col, cell) in cells.iter().enumerate() {
        let width = widths.get(col).copied().unwrap_or(1);
        let text = truncate_text(cell, width);
        let pad = width.saturating_sub(text.as_str().width());
        if col > 0 {
            out.push_str("  ");
        }
        match headers.get(col).map(|h| h.align) {
            Some(Align::Left) => {
                out.push_str(&text);
                out.extend(std::iter::repeat(' ').take(pad));
            }
            _ => {
                out.extend(std::iter::repeat(' ').take(pad));
                out.push_str(&text);
            }
        }
    }
    out.push('\n');
}
