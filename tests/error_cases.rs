mod common;

use common::mocks::{failing_file, failing_reader};

use rand::distr::{Alphanumeric, SampleString};
use serde_json::json;
use std::{
    env::temp_dir,
    fs::{self},
    io::Cursor,
};

use student_rooms::{
    BatchError,
    core::{
        item::{Exporter, Loader},
        job::{Job, JobBuilder},
        merger::{RoomStudentMerger, merge},
    },
    item::{
        json::{JsonExporterBuilder, JsonLoaderBuilder},
        xml::XmlExporterBuilder,
    },
    model::MergedRoom,
};

#[test]
fn loading_missing_file_should_fail_with_not_found() {
    let file_name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    let path = temp_dir().join(format!("{}.json", file_name));

    let result = JsonLoaderBuilder::new().from_path(&path).load();

    assert!(matches!(result, Err(BatchError::NotFound { .. })));
}

#[test]
fn loading_invalid_json_file_should_fail_with_invalid_format() {
    let file_name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    let path = temp_dir().join(format!("{}.json", file_name));
    fs::write(&path, r#"[{"id": 1, "name": "Room #1"},"#).expect("Failed to write file");

    let result = JsonLoaderBuilder::new().from_path(&path).load();

    match result {
        Err(error @ BatchError::InvalidFormat { .. }) => {
            assert!(error.to_string().contains(&path.display().to_string()));
        }
        other => panic!("Expected InvalidFormat, got {:?}", other),
    }

    fs::remove_file(&path).ok();
}

#[test]
fn failing_reader_should_fail_with_read_error() {
    let loader = JsonLoaderBuilder::new()
        .source_name("rooms")
        .from_reader(failing_reader());

    match loader.load() {
        Err(BatchError::ReadError { source_id, message }) => {
            assert_eq!(source_id, "rooms");
            assert!(message.contains("access denied"));
        }
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn loading_directory_should_fail_with_read_error() {
    let directory = tempfile::tempdir().expect("Failed to create directory");

    let result = JsonLoaderBuilder::new().from_path(directory.path()).load();

    match result {
        Err(BatchError::ReadError { source_id, .. }) => {
            assert_eq!(source_id, directory.path().display().to_string());
        }
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn merging_non_list_inputs_should_fail_with_invalid_input() {
    let rooms = json!([{"id": 1, "name": "Room #1"}]);
    let students = json!([{"id": 101, "name": "Alice", "room": 1}]);

    let result = merge(json!({}), students);
    assert!(matches!(result, Err(BatchError::InvalidInput(_))));

    let result = merge(rooms, json!({"id": 101}));
    assert!(matches!(result, Err(BatchError::InvalidInput(_))));
}

#[test]
fn merging_room_with_reserved_id_should_fail() {
    let result = RoomStudentMerger::from_values(
        json!([{"id": "unassigned", "name": "Overflow"}]),
        json!([]),
    )
    .and_then(|merger| merger.merge());

    match result {
        Err(BatchError::InvalidInput(message)) => assert!(message.contains("reserved")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn json_export_to_failing_sink_should_fail_with_write_error() {
    let exporter = JsonExporterBuilder::new().from_writer(failing_file());

    let result = exporter.export(&[MergedRoom::unassigned()]);

    assert!(matches!(result, Err(BatchError::WriteError(_))));
}

#[test]
fn xml_export_to_failing_sink_should_fail_with_write_error() {
    let exporter = XmlExporterBuilder::new().from_writer(failing_file());

    let result = exporter.export(&[MergedRoom::unassigned()]);

    assert!(matches!(result, Err(BatchError::WriteError(_))));
}

#[test]
fn job_should_not_touch_output_when_loading_fails() {
    let file_name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    let output_path = temp_dir().join(format!("{}.json", file_name));
    fs::write(&output_path, "keep me").expect("Failed to write file");

    let rooms = JsonLoaderBuilder::new()
        .source_name("rooms")
        .from_reader(Cursor::new("not json"));
    let students = JsonLoaderBuilder::new().from_reader(Cursor::new("[]"));
    let exporter = JsonExporterBuilder::new().from_path(&output_path);

    let job = JobBuilder::new()
        .rooms(&rooms)
        .students(&students)
        .exporter(&exporter)
        .build()
        .unwrap();
    let result = job.run();

    assert!(matches!(result, Err(BatchError::InvalidFormat { .. })));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "keep me");

    fs::remove_file(&output_path).ok();
}

#[test]
fn job_with_object_students_should_fail_with_invalid_input() {
    let rooms = JsonLoaderBuilder::new().from_reader(Cursor::new("[]"));
    let students = JsonLoaderBuilder::new().from_reader(Cursor::new(r#"{"id": 1}"#));
    let exporter = JsonExporterBuilder::new().from_writer(Vec::<u8>::new());

    let job = JobBuilder::new()
        .rooms(&rooms)
        .students(&students)
        .exporter(&exporter)
        .build()
        .unwrap();

    assert!(matches!(job.run(), Err(BatchError::InvalidInput(_))));
}
