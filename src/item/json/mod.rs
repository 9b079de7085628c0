/// JSON support for loading input records and exporting merged rooms.
///
/// The implementation uses `serde_json` for both directions.
///
/// 1. **JsonLoader**: reads a whole JSON document into a `serde_json::Value`. It only
///    checks that the content is well-formed; the merger checks that it is a list of
///    records.
///
/// 2. **JsonExporter**: serializes merged rooms as a JSON array, pretty-printed with a
///    four-space indent by default.
///
/// Each component follows the builder pattern for easy configuration.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use student_rooms::core::item::{Exporter, Loader};
/// use student_rooms::core::merger::merge;
/// use student_rooms::item::json::{JsonExporterBuilder, JsonLoaderBuilder};
///
/// let rooms = JsonLoaderBuilder::new()
///     .from_reader(Cursor::new(r#"[{"id": 1, "name": "Room #1"}]"#))
///     .load()
///     .unwrap();
/// let students = JsonLoaderBuilder::new()
///     .from_reader(Cursor::new(r#"[{"id": 101, "name": "Alice", "room": 1}]"#))
///     .load()
///     .unwrap();
///
/// let merged = merge(rooms, students).unwrap();
///
/// let mut buffer = Vec::new();
/// {
///     let exporter = JsonExporterBuilder::new().from_writer(&mut buffer);
///     exporter.export(&merged).unwrap();
/// }
///
/// // [
/// //     {
/// //         "id": 1,
/// //         "name": "Room #1",
/// //         "students": [
/// //             {
/// //                 "id": 101,
/// //                 "name": "Alice"
/// //             }
/// //         ]
/// //     },
/// //     {
/// //         "id": "unassigned",
/// //         "name": "Unassigned",
/// //         "students": []
/// //     }
/// // ]
/// assert!(String::from_utf8(buffer).unwrap().contains(r#""id": "unassigned""#));
/// ```
pub mod json_loader;

pub mod json_exporter;

pub use json_exporter::{JsonExporter, JsonExporterBuilder};
pub use json_loader::{JsonLoader, JsonLoaderBuilder};
