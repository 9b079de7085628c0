use std::collections::HashMap;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::BatchError,
    model::{MergedRoom, Room, RoomId, Student},
};

type MergerResult<T> = Result<T, BatchError>;

/// Groups students under the room they reference.
///
/// Output rooms follow the input room order, with the unassigned bucket appended last.
/// Students keep their input order inside each room. A student without a `room` field,
/// or whose `room` matches no room id, lands in the unassigned bucket.
///
/// When two input rooms share an id the later one replaces the earlier one, keeping the
/// position of the first occurrence.
///
/// # Examples
///
/// ```
/// use student_rooms::core::merger::RoomStudentMerger;
/// use student_rooms::model::{Room, RoomId, Student};
///
/// let rooms = vec![Room::new(1, "Room #1")];
/// let students = vec![
///     Student::new(101, "Alice", Some(1)),
///     Student::new(102, "Bob", None),
/// ];
///
/// let merged = RoomStudentMerger::new(rooms, students).merge().unwrap();
///
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].students[0].name, "Alice");
/// assert_eq!(merged[1].id(), &RoomId::Unassigned);
/// assert_eq!(merged[1].students[0].name, "Bob");
/// ```
#[derive(Debug, Clone)]
pub struct RoomStudentMerger {
    rooms: Vec<Room>,
    students: Vec<Student>,
}

impl RoomStudentMerger {
    pub fn new(rooms: Vec<Room>, students: Vec<Student>) -> Self {
        Self { rooms, students }
    }

    /// Builds a merger from loaded documents.
    ///
    /// Fails with [`BatchError::InvalidInput`] when either document is not a list, or when
    /// one of its records lacks the fields a room or a student needs.
    pub fn from_values(rooms: Value, students: Value) -> MergerResult<Self> {
        Ok(Self {
            rooms: decode_records(rooms, "rooms")?,
            students: decode_records(students, "students")?,
        })
    }

    pub fn merge(self) -> MergerResult<Vec<MergedRoom>> {
        let mut merged: Vec<MergedRoom> = Vec::with_capacity(self.rooms.len() + 1);
        let mut positions: HashMap<RoomId, usize> = HashMap::with_capacity(self.rooms.len());

        for room in self.rooms {
            if room.id.is_unassigned() {
                return Err(BatchError::InvalidInput(format!(
                    "room '{}' uses the reserved id '{}'",
                    room.name, room.id
                )));
            }

            match positions.get(&room.id) {
                Some(&position) => {
                    warn!("Duplicate room id {}, keeping the last record", room.id);
                    merged[position] = MergedRoom::from(room);
                }
                None => {
                    positions.insert(room.id.clone(), merged.len());
                    merged.push(MergedRoom::from(room));
                }
            }
        }

        let unassigned = merged.len();
        merged.push(MergedRoom::unassigned());

        for student in self.students {
            let position = student
                .room_key()
                .and_then(|key| positions.get(&key).copied())
                .unwrap_or(unassigned);
            merged[position].students.push(student);
        }

        debug!(
            "Merged {} rooms, {} unassigned students",
            merged.len(),
            merged[unassigned].students.len()
        );

        Ok(merged)
    }
}

/// Merges two loaded documents in one call.
pub fn merge(rooms: Value, students: Value) -> MergerResult<Vec<MergedRoom>> {
    RoomStudentMerger::from_values(rooms, students)?.merge()
}

fn decode_records<T: DeserializeOwned>(value: Value, kind: &str) -> MergerResult<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(BatchError::InvalidInput(format!(
                "expected a list of {}, found {}",
                kind,
                type_name(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|error| {
                BatchError::InvalidInput(format!("{} record #{}: {}", kind, index, error))
            })
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
