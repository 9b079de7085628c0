use std::{
    cell::RefCell,
    fs::File,
    io::Write,
    path::Path,
};

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

use crate::{
    BatchError,
    core::item::{Exporter, ExporterResult},
    item::OutputSink,
    model::MergedRoom,
};

/// Writes merged rooms as a JSON array.
///
/// Each room keeps its original fields followed by a `students` array of `{id, name}`
/// objects. Output is UTF-8 and non-ASCII characters are written unescaped.
pub struct JsonExporter<W: Write = File> {
    sink: OutputSink<W>,
    indent: Vec<u8>,
    use_pretty_formatter: bool,
}

impl<W: Write> JsonExporter<W> {
    fn write_rooms(&self, out: &mut dyn Write, rooms: &[MergedRoom]) -> ExporterResult {
        let result = if self.use_pretty_formatter {
            let formatter = PrettyFormatter::with_indent(&self.indent);
            let mut serializer = Serializer::with_formatter(out, formatter);
            rooms.serialize(&mut serializer)
        } else {
            serde_json::to_writer(out, rooms)
        };

        result.map_err(|error| BatchError::WriteError(format!("Failed to write JSON: {}", error)))
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export(&self, rooms: &[MergedRoom]) -> ExporterResult {
        self.sink.write_with(|out| self.write_rooms(out, rooms))
    }
}

/// Builder for [`JsonExporter`].
///
/// Pretty printing with a four-space indent is on by default.
///
/// # Examples
///
/// ```
/// use student_rooms::core::item::Exporter;
/// use student_rooms::item::json::JsonExporterBuilder;
/// use student_rooms::model::{MergedRoom, Room, Student};
///
/// let rooms = vec![MergedRoom {
///     room: Room::new(1, "Room #1"),
///     students: vec![Student::new(101, "Alice", Some(1))],
/// }];
///
/// let mut buffer = Vec::new();
/// {
///     let exporter = JsonExporterBuilder::new()
///         .pretty_formatter(false)
///         .from_writer(&mut buffer);
///     exporter.export(&rooms).unwrap();
/// }
///
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     r#"[{"id":1,"name":"Room #1","students":[{"id":101,"name":"Alice"}]}]"#
/// );
/// ```
pub struct JsonExporterBuilder {
    indent: Vec<u8>,
    pretty_formatter: bool,
}

impl Default for JsonExporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonExporterBuilder {
    pub fn new() -> Self {
        Self {
            indent: b"    ".to_vec(),
            pretty_formatter: true,
        }
    }

    pub fn indent(mut self, indent: &[u8]) -> Self {
        self.indent = indent.to_vec();
        self
    }

    pub fn pretty_formatter(mut self, yes: bool) -> Self {
        self.pretty_formatter = yes;
        self
    }

    /// The file is created, or truncated, when the export runs.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> JsonExporter {
        JsonExporter {
            sink: OutputSink::Path(path.as_ref().to_path_buf()),
            indent: self.indent,
            use_pretty_formatter: self.pretty_formatter,
        }
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> JsonExporter<W> {
        JsonExporter {
            sink: OutputSink::Stream(RefCell::new(wtr)),
            indent: self.indent,
            use_pretty_formatter: self.pretty_formatter,
        }
    }
}
