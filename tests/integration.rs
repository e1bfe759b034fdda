//! Integration tests for arrowpane.
//!
//! Exercise the full session lifecycle over real fixture files.

#![allow(clippy::uninlined_format_args)]

use std::{fs::File, path::Path, sync::Arc};

use arrow::{
    array::{Float64Array, Int32Array, RecordBatch, StringArray},
    datatypes::{DataType, Field, Schema, SchemaRef},
    ipc::writer::FileWriter,
};
use arrowpane::{
    AcceleratorMsg, Error, Handled, HostFrame, PreviewSession, Rect, WindowHandle,
};
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

fn fixture_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int32, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("score", DataType::Float64, false),
    ]))
}

fn fixture_batch(schema: &SchemaRef, start: i32, rows: usize) -> RecordBatch {
    let ids: Vec<i32> = (start..start + rows as i32).collect();
    let names: Vec<String> = ids.iter().map(|i| format!("item_{}", i)).collect();
    let scores: Vec<f64> = ids.iter().map(|i| f64::from(*i) * 1.5).collect();
    RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int32Array::from(ids)),
            Arc::new(StringArray::from(names)),
            Arc::new(Float64Array::from(scores)),
        ],
    )
    .unwrap()
}

fn write_ipc(path: &Path, schema: &SchemaRef, batches: &[RecordBatch]) {
    let file = File::create(path).unwrap();
    let mut writer = FileWriter::try_new(file, schema).unwrap();
    for batch in batches {
        writer.write(batch).unwrap();
    }
    writer.finish().unwrap();
}

fn write_parquet(path: &Path, schema: &SchemaRef, batches: &[RecordBatch]) {
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema.clone(), None).unwrap();
    for batch in batches {
        writer.write(batch).unwrap();
    }
    writer.close().unwrap();
}

#[test]
fn test_full_session_over_ipc_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.arrow");
    let schema = fixture_schema();
    write_ipc(&path, &schema, &[fixture_batch(&schema, 0, 5)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    session.set_window(WindowHandle(42), Rect::new(0, 0, 800, 600));

    let summary = session.do_preview().unwrap();
    assert_eq!(summary.columns, 3);
    assert_eq!(summary.rows, 5);

    let view = session.view().unwrap();
    assert!(view.is_visible());
    assert!(view.title().contains("data.arrow"));
    assert_eq!(view.rect(), Rect::new(0, 0, 800, 600));

    let grid = view.grid();
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.row_count(), 5);
    assert_eq!(grid.cell(0, 0), Some("0"));
    assert_eq!(grid.cell(4, 1), Some("item_4"));
    assert_eq!(grid.cell(2, 2), Some("3"));
    assert_eq!(grid.summary(), Some((3, 5)));

    assert!(session.set_focus());
    assert_eq!(session.query_focus(), Some(WindowHandle(42)));

    session.unload();
    assert!(session.view().is_none());
    assert!(!session.is_initialized());
}

#[test]
fn test_full_session_over_parquet_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.parquet");
    let schema = fixture_schema();
    write_parquet(&path, &schema, &[fixture_batch(&schema, 0, 4)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    let summary = session.do_preview().unwrap();
    assert_eq!(summary.columns, 3);
    assert_eq!(summary.rows, 4);
    assert_eq!(session.view().unwrap().grid().cell(3, 0), Some("3"));
}

#[test]
fn test_two_batches_only_last_visible() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two.arrow");
    let schema = fixture_schema();
    write_ipc(
        &path,
        &schema,
        &[fixture_batch(&schema, 0, 3), fixture_batch(&schema, 100, 3)],
    );

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    let summary = session.do_preview().unwrap();

    // Reported count covers both batches; visible rows only the last.
    assert_eq!(summary.rows, 6);
    let grid = session.view().unwrap().grid();
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.cell(0, 0), Some("100"));
    assert_eq!(grid.cell(2, 1), Some("item_102"));
}

#[test]
fn test_double_preview_is_invalid_state_and_keeps_first_view() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.arrow");
    let schema = fixture_schema();
    write_ipc(&path, &schema, &[fixture_batch(&schema, 0, 2)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    session.do_preview().unwrap();

    let second = session.do_preview();
    assert!(matches!(second, Err(Error::InvalidState { .. })));

    // First view untouched.
    let view = session.view().unwrap();
    assert!(view.is_visible());
    assert_eq!(view.grid().row_count(), 2);
}

#[test]
fn test_unload_then_preview_again() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.arrow");
    let schema = fixture_schema();
    write_ipc(&path, &schema, &[fixture_batch(&schema, 0, 2)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    session.do_preview().unwrap();
    session.unload();

    // Unload cleared the path; another preview needs re-initialization.
    assert!(matches!(
        session.do_preview(),
        Err(Error::InvalidState { .. })
    ));
    session.initialize(&path).unwrap();
    assert!(session.do_preview().is_ok());
}

#[test]
fn test_missing_file_surfaces_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.arrow");

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    let result = session.do_preview();
    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
    assert!(session.view().is_none());
}

#[test]
fn test_set_rect_relayouts_live_view() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.arrow");
    let schema = fixture_schema();
    write_ipc(&path, &schema, &[fixture_batch(&schema, 0, 1)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    session.set_rect(Rect::new(0, 0, 100, 100));
    session.do_preview().unwrap();
    assert_eq!(session.view().unwrap().rect(), Rect::new(0, 0, 100, 100));

    session.set_rect(Rect::new(10, 10, 500, 300));
    assert_eq!(session.view().unwrap().rect(), Rect::new(10, 10, 500, 300));
}

#[test]
fn test_rendered_grid_contains_headers_and_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.arrow");
    let schema = fixture_schema();
    write_ipc(&path, &schema, &[fixture_batch(&schema, 0, 2)]);

    let mut session = PreviewSession::new();
    session.initialize(&path).unwrap();
    session.do_preview().unwrap();

    let text = session.view().unwrap().grid().render_plain(32);
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("id"));
    assert!(header.contains("name"));
    assert!(header.contains("score"));
    assert!(text.contains("item_1"));
    // Header plus one line per row.
    assert_eq!(text.lines().count(), 3);
}

struct CountingFrame {
    handled: usize,
}

impl HostFrame for CountingFrame {
    fn translate_accelerator(&mut self, _msg: &AcceleratorMsg) -> Handled {
        self.handled += 1;
        Handled::Yes
    }
}

#[test]
fn test_accelerator_forwarding_lifecycle() {
    let mut session = PreviewSession::new();
    let msg = AcceleratorMsg { code: 27 };

    // No frame attached: not handled, not an error.
    assert_eq!(session.translate_accelerator(&msg), Handled::No);

    session.set_frame(Some(Box::new(CountingFrame { handled: 0 })));
    assert_eq!(session.translate_accelerator(&msg), Handled::Yes);

    session.set_frame(None);
    assert_eq!(session.translate_accelerator(&msg), Handled::No);
}
