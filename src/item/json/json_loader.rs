use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    BatchError,
    core::item::{Loader, LoaderResult},
};

enum Source<R> {
    Path(PathBuf),
    Reader(RefCell<R>),
}

/// Loads a whole JSON document from a file or any reader.
///
/// A path is only opened when `load` is called, and the file is closed before it returns.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use student_rooms::core::item::Loader;
/// use student_rooms::item::json::JsonLoaderBuilder;
///
/// let loader = JsonLoaderBuilder::new()
///     .source_name("rooms")
///     .from_reader(Cursor::new(r#"[{"id": 1, "name": "Room #1"}]"#));
///
/// let document = loader.load().unwrap();
/// assert_eq!(document[0]["name"], "Room #1");
/// ```
pub struct JsonLoader<R = File> {
    source_id: String,
    source: Source<R>,
}

impl<R: Read> JsonLoader<R> {
    fn load_path(&self, path: &Path) -> LoaderResult {
        if !path.exists() {
            return Err(BatchError::NotFound {
                source_id: self.source_id.clone(),
            });
        }

        let file = File::open(path).map_err(|error| self.io_error(error))?;
        self.parse(BufReader::new(file))
    }

    fn parse<T: Read>(&self, rdr: T) -> LoaderResult {
        let document = serde_json::from_reader(rdr).map_err(|error| {
            if error.is_io() {
                BatchError::ReadError {
                    source_id: self.source_id.clone(),
                    message: error.to_string(),
                }
            } else {
                BatchError::InvalidFormat {
                    source_id: self.source_id.clone(),
                    message: error.to_string(),
                }
            }
        })?;

        debug!("Loaded {}", self.source_id);
        Ok(document)
    }

    fn io_error(&self, error: io::Error) -> BatchError {
        if error.kind() == io::ErrorKind::NotFound {
            BatchError::NotFound {
                source_id: self.source_id.clone(),
            }
        } else {
            BatchError::ReadError {
                source_id: self.source_id.clone(),
                message: error.to_string(),
            }
        }
    }
}

impl<R: Read> Loader for JsonLoader<R> {
    fn load(&self) -> LoaderResult {
        match &self.source {
            Source::Path(path) => self.load_path(path),
            Source::Reader(rdr) => {
                let mut rdr = rdr.borrow_mut();
                self.parse(&mut *rdr)
            }
        }
    }
}

/// Builder for [`JsonLoader`].
#[derive(Default)]
pub struct JsonLoaderBuilder {
    source_name: Option<String>,
}

impl JsonLoaderBuilder {
    pub fn new() -> Self {
        Self { source_name: None }
    }

    /// Name used in error messages. Defaults to the path, or `"reader"` for readers.
    pub fn source_name(mut self, name: &str) -> Self {
        self.source_name = Some(name.to_string());
        self
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> JsonLoader {
        let path = path.as_ref().to_path_buf();
        JsonLoader {
            source_id: self
                .source_name
                .unwrap_or_else(|| path.display().to_string()),
            source: Source::Path(path),
        }
    }

    pub fn from_reader<R: Read>(self, rdr: R) -> JsonLoader<R> {
        JsonLoader {
            source_id: self.source_name.unwrap_or_else(|| "reader".to_string()),
            source: Source::Reader(RefCell::new(rdr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fs, io::Cursor};

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::JsonLoaderBuilder;
    use crate::{BatchError, core::item::Loader};

    #[test]
    fn content_from_file_should_be_loaded() -> Result<(), Box<dyn Error>> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), r#"[{"id": 1, "name": "Salle Été"}]"#)?;

        let loader = JsonLoaderBuilder::new().from_path(file.path());
        let document = loader.load()?;

        assert_eq!(document, json!([{"id": 1, "name": "Salle Été"}]));

        Ok(())
    }

    #[test]
    fn missing_file_should_fail_with_not_found() {
        let loader = JsonLoaderBuilder::new().from_path("/nonexistent/directory/rooms.json");

        match loader.load() {
            Err(BatchError::NotFound { source_id }) => {
                assert_eq!(source_id, "/nonexistent/directory/rooms.json")
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn malformed_content_should_fail_with_invalid_format() {
        let loader = JsonLoaderBuilder::new()
            .source_name("students")
            .from_reader(Cursor::new("foo\nbar\nbaz\n"));

        match loader.load() {
            Err(BatchError::InvalidFormat { source_id, message }) => {
                assert_eq!(source_id, "students");
                assert!(message.contains("line 1"));
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_non_list_should_load() {
        let loader = JsonLoaderBuilder::new().from_reader(Cursor::new(r#"{"id": 1}"#));

        assert_eq!(loader.load().unwrap(), json!({"id": 1}));
    }
}
