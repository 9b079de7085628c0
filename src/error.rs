use thiserror::Error;

#[derive(Error, Debug)]
/// Batch error
pub enum BatchError {
    /// The input source does not exist.
    #[error("File not found: {source_id}")]
    NotFound { source_id: String },

    /// The input source exists but is not well-formed JSON.
    #[error("Invalid JSON file {source_id}: {message}")]
    InvalidFormat { source_id: String, message: String },

    /// The input source could not be read for a reason other than absence.
    #[error("Unable to read {source_id}: {message}")]
    ReadError { source_id: String, message: String },

    /// Well-formed data with the wrong shape (not a list, missing fields, reserved ids).
    #[error("Wrong format of data: {0}")]
    InvalidInput(String),

    /// Serialization or I/O failure while exporting.
    #[error("Write error: {0}")]
    WriteError(String),

    /// A job was built without one of its components.
    #[error("Job configuration: {0}")]
    Configuration(String),
}
