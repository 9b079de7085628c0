/// XML export of merged rooms.
///
/// The implementation uses the `quick-xml` event writer, so the document layout is
/// spelled out element by element instead of being derived from serde attributes.
///
/// # Example
///
/// ```
/// use student_rooms::core::item::Exporter;
/// use student_rooms::item::xml::XmlExporterBuilder;
/// use student_rooms::model::MergedRoom;
///
/// let mut buffer = Vec::new();
/// {
///     let exporter = XmlExporterBuilder::new().from_writer(&mut buffer);
///     exporter.export(&[MergedRoom::unassigned()]).unwrap();
/// }
///
/// // <?xml version="1.0" encoding="UTF-8"?>
/// // <rooms>
/// //   <room id="unassigned" name="Unassigned">
/// //     <students/>
/// //   </room>
/// // </rooms>
/// let content = String::from_utf8(buffer).unwrap();
/// assert!(content.contains(r#"<room id="unassigned" name="Unassigned">"#));
/// ```
pub mod xml_exporter;

pub use xml_exporter::XmlExporter;
pub use xml_exporter::XmlExporterBuilder;
