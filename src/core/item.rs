use serde_json::Value;

use crate::{error::BatchError, model::MergedRoom};

/// Result of a [`Loader::load`] call: the whole parsed document.
pub type LoaderResult = Result<Value, BatchError>;

/// Result of an [`Exporter::export`] call.
pub type ExporterResult = Result<(), BatchError>;

/// Reads a structured source into memory.
///
/// The document is expected to be a JSON array of objects, but the loader only checks that
/// it is well-formed. Shape checks belong to the merger.
pub trait Loader {
    fn load(&self) -> LoaderResult;
}

/// Serializes merged rooms to the sink the exporter was built with.
pub trait Exporter {
    fn export(&self, rooms: &[MergedRoom]) -> ExporterResult;
}
