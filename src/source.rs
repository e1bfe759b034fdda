//! Columnar file source.
//!
//! Resolves a path to a sequential record-batch reader. The container
//! formats themselves are external: Arrow IPC files are decoded by
//! `arrow::ipc` and Parquet files by the `parquet` crate, both driven
//! through the common [`RecordBatchReader`] interface.

use std::{fs::File, io::BufReader, path::Path};

use arrow::datatypes::SchemaRef;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use arrow::ipc::reader::FileReader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{Error, Result};

/// An open columnar file, ready for sequential batch reads.
pub struct RecordSource {
    reader: Box<dyn RecordBatchReader>,
}

impl RecordSource {
    /// Open the file at `path`, dispatching on its extension.
    ///
    /// `arrow`, `feather` and `ipc` open as Arrow IPC files; `parquet`
    /// opens as Parquet. Any other extension is rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceUnavailable`] if the file cannot be opened
    /// - [`Error::UnsupportedFormat`] for an unrecognized extension
    /// - a decode error if reader construction fails
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "arrow" | "feather" | "ipc" => Self::open_ipc(path),
            "parquet" => Self::open_parquet(path),
            other => Err(Error::unsupported_format(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }

    fn open_ipc(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::source_unavailable(e, path))?;
        let reader = FileReader::try_new(BufReader::new(file), None)?;
        Ok(Self {
            reader: Box::new(reader),
        })
    }

    fn open_parquet(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::source_unavailable(e, path))?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        Ok(Self {
            reader: Box::new(reader),
        })
    }

    /// The schema declared by the file header.
    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.reader.schema()
    }

    /// Read the next row-batch, in file order.
    ///
    /// Returns `None` once all batches have been read.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the batch cannot be read.
    pub fn next_batch(&mut self) -> Option<Result<RecordBatch>> {
        self.reader.next().map(|r| r.map_err(Error::from))
    }
}

impl std::fmt::Debug for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSource")
            .field("schema", &self.reader.schema())
            .finish_non_exhaustive()
    }
}
