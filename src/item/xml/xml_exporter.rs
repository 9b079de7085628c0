use crate::core::item::{Exporter, ExporterResult};
use crate::error::BatchError;
use crate::item::OutputSink;
use crate::model::MergedRoom;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::cell::RefCell;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const ROOM_TAG: &str = "room";
const STUDENTS_TAG: &str = "students";
const STUDENT_TAG: &str = "student";

/// An exporter that writes merged rooms to an XML document.
///
/// The document starts with an XML declaration, then one `room` element per merged room
/// with `id` and `name` attributes, holding a `students` element with one `student`
/// element per student. A student carries its id as attribute and its name as text.
///
/// # Examples
///
/// ```
/// use student_rooms::core::item::Exporter;
/// use student_rooms::item::xml::XmlExporterBuilder;
/// use student_rooms::model::{MergedRoom, Room, Student};
///
/// let rooms = vec![MergedRoom {
///     room: Room::new(1, "Room #1"),
///     students: vec![Student::new(101, "Alice", Some(1))],
/// }];
///
/// let mut buffer = Vec::new();
/// {
///     let exporter = XmlExporterBuilder::new().from_writer(&mut buffer);
///     exporter.export(&rooms).unwrap();
/// }
///
/// // <?xml version="1.0" encoding="UTF-8"?>
/// // <rooms>
/// //   <room id="1" name="Room #1">
/// //     <students>
/// //       <student id="101">Alice</student>
/// //     </students>
/// //   </room>
/// // </rooms>
/// let content = String::from_utf8(buffer).unwrap();
/// assert!(content.contains(r#"<student id="101">Alice</student>"#));
/// ```
pub struct XmlExporter<W: Write = File> {
    sink: OutputSink<W>,
    root_tag: String,
    indent_char: u8,
    indent_size: usize,
}

impl<W: Write> XmlExporter<W> {
    fn write_document(&self, out: &mut dyn Write, rooms: &[MergedRoom]) -> ExporterResult {
        for room in rooms {
            check_text("room", &room.id().to_string())?;
            check_text("room", room.name())?;
            for student in &room.students {
                check_text("student", &student.name)?;
            }
        }

        let mut writer = Writer::new_with_indent(out, self.indent_char, self.indent_size);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| write_error("declaration", e))?;
        writer
            .write_event(Event::Start(BytesStart::new(self.root_tag.as_str())))
            .map_err(|e| write_error("root", e))?;

        for room in rooms {
            write_room(&mut writer, room)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.root_tag.as_str())))
            .map_err(|e| write_error("end", e))?;
        Ok(())
    }
}

fn write_room<O: Write>(writer: &mut Writer<O>, room: &MergedRoom) -> ExporterResult {
    let id = room.id().to_string();
    let start =
        BytesStart::new(ROOM_TAG).with_attributes([("id", id.as_str()), ("name", room.name())]);
    writer
        .write_event(Event::Start(start))
        .map_err(|e| write_error("room", e))?;

    if room.students.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(STUDENTS_TAG)))
            .map_err(|e| write_error("students", e))?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new(STUDENTS_TAG)))
            .map_err(|e| write_error("students", e))?;

        for student in &room.students {
            let id = student.id.to_string();
            let start = BytesStart::new(STUDENT_TAG).with_attributes([("id", id.as_str())]);
            writer
                .write_event(Event::Start(start))
                .map_err(|e| write_error("student", e))?;
            writer
                .write_event(Event::Text(BytesText::new(&student.name)))
                .map_err(|e| write_error("student", e))?;
            writer
                .write_event(Event::End(BytesEnd::new(STUDENT_TAG)))
                .map_err(|e| write_error("student", e))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(STUDENTS_TAG)))
            .map_err(|e| write_error("students", e))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOM_TAG)))
        .map_err(|e| write_error("room", e))?;
    Ok(())
}

/// Rejects text holding characters outside the XML 1.0 `Char` production, which no
/// escaping can represent.
fn check_text(part: &str, text: &str) -> ExporterResult {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(write_error(
            part,
            format!("character U+{:04X} is not allowed in XML: {:?}", c as u32, text),
        )),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

fn write_error<E: Display>(part: &str, error: E) -> BatchError {
    BatchError::WriteError(format!("Failed to write XML {}: {}", part, error))
}

impl<W: Write> Exporter for XmlExporter<W> {
    fn export(&self, rooms: &[MergedRoom]) -> ExporterResult {
        self.sink.write_with(|out| self.write_document(out, rooms))
    }
}

/// Builder for creating XML exporters.
///
/// The root tag defaults to `rooms` and the document is indented with two spaces.
#[derive(Default)]
pub struct XmlExporterBuilder {
    root_tag: Option<String>,
    indent_size: Option<usize>,
}

impl XmlExporterBuilder {
    /// Creates a new `XmlExporterBuilder` with default values.
    pub fn new() -> Self {
        Self {
            root_tag: None,
            indent_size: None,
        }
    }

    /// Sets the root tag for the XML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use student_rooms::item::xml::XmlExporterBuilder;
    ///
    /// let builder = XmlExporterBuilder::new().root_tag("roster");
    /// ```
    pub fn root_tag(mut self, root_tag: &str) -> Self {
        self.root_tag = Some(root_tag.to_string());
        self
    }

    /// Sets the number of spaces per nesting level.
    pub fn indent(mut self, indent_size: usize) -> Self {
        self.indent_size = Some(indent_size);
        self
    }

    /// Creates an `XmlExporter` writing to a file path.
    ///
    /// The file is created, or truncated, when the export runs.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> XmlExporter {
        self.build(OutputSink::Path(path.as_ref().to_path_buf()))
    }

    /// Creates an `XmlExporter` from a writer.
    ///
    /// This is useful for writing to in-memory buffers or other custom writers.
    pub fn from_writer<W: Write>(self, wtr: W) -> XmlExporter<W> {
        self.build(OutputSink::Stream(RefCell::new(wtr)))
    }

    fn build<W: Write>(self, sink: OutputSink<W>) -> XmlExporter<W> {
        XmlExporter {
            sink,
            root_tag: self.root_tag.unwrap_or_else(|| "rooms".to_string()),
            indent_char: b' ',
            indent_size: self.indent_size.unwrap_or(2),
        }
    }
}
