use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::{BatchError, core::item::ExporterResult};

/// This module provides the JSON loader and exporter.
pub mod json;

#[cfg(feature = "xml")]
/// This module provides the XML exporter.
pub mod xml;

#[cfg(feature = "logger")]
/// This module provides an exporter that logs merged rooms, useful for debugging purposes.
pub mod logger;

/// Output format selection.
pub mod format;

/// Destination of an exporter.
///
/// A path is only opened (and truncated) when the export runs, and the file is closed
/// before the export returns.
pub(crate) enum OutputSink<W> {
    Path(PathBuf),
    Stream(RefCell<W>),
}

impl<W: Write> OutputSink<W> {
    pub(crate) fn write_with<F>(&self, write: F) -> ExporterResult
    where
        F: FnOnce(&mut dyn Write) -> ExporterResult,
    {
        match self {
            OutputSink::Path(path) => {
                let file = File::create(path).map_err(|e| {
                    BatchError::WriteError(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut out = BufWriter::new(file);
                write(&mut out)?;
                flush(&mut out)
            }
            OutputSink::Stream(stream) => {
                let mut stream = stream.borrow_mut();
                let mut out = BufWriter::new(&mut *stream);
                write(&mut out)?;
                flush(&mut out)
            }
        }
    }
}

fn flush<W: Write>(out: &mut BufWriter<W>) -> ExporterResult {
    out.flush()
        .map_err(|e| BatchError::WriteError(format!("Failed to flush output: {}", e)))
}
