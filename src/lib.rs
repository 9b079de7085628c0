#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Student Rooms

 Joins two record sets, rooms and students, into a nested roster where each room lists
 the students assigned to it, then writes the roster as JSON or XML.

 ## Core Concepts

- **Loader:** reads a structured source (a JSON array of objects) into memory.
- **Merger:** groups students under the room their `room` field points at. Students with
  no room, or with a room that does not exist, go to a synthetic `Unassigned` room which
  is always present and always last.
- **Exporter:** serializes the merged rooms to a sink. JSON and XML variants are provided.
- **Job:** runs load rooms, load students, merge and export, in that order.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| xml           | Enables the XML `Exporter` (default)                          |
| logger        | Enables a logger `Exporter`, useful for debugging purposes    |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use std::io::Cursor;
# use student_rooms::{
#     core::job::{Job, JobBuilder},
#     error::BatchError,
#     item::json::{JsonExporterBuilder, JsonLoaderBuilder},
# };
fn main() -> Result<(), BatchError> {
    let rooms = JsonLoaderBuilder::new().source_name("rooms").from_reader(Cursor::new(
        r#"[{"id": 1, "name": "Room #1"}, {"id": 2, "name": "Room #2"}]"#,
    ));
    let students = JsonLoaderBuilder::new().source_name("students").from_reader(Cursor::new(
        r#"[
            {"id": 101, "name": "Alice", "room": 1},
            {"id": 102, "name": "Bob", "room": 2},
            {"id": 103, "name": "Charlie", "room": 3},
            {"id": 104, "name": "Diana"}
        ]"#,
    ));

    let mut output: Vec<u8> = Vec::new();
    let exporter = JsonExporterBuilder::new().from_writer(&mut output);

    let job = JobBuilder::new()
        .rooms(&rooms)
        .students(&students)
        .exporter(&exporter)
        .build()?;
    let execution = job.run()?;

    assert_eq!(execution.room_count, 3);
    assert_eq!(execution.unassigned_count, 2);

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: capability traits, merger and job
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Rooms, students and merged rooms
pub mod model;

/// Loaders and exporters (for exemple: json loader and xml exporter)
pub mod item;

/// Command line configuration
pub mod config;
