use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use serde_json::{Map, Value};

/// Reserved id of the synthetic room collecting students without a valid room.
pub const UNASSIGNED_ID: &str = "unassigned";

/// Display name of the synthetic unassigned room.
pub const UNASSIGNED_NAME: &str = "Unassigned";

/// Identifier of a room.
///
/// Input rooms are numbered in practice, but textual ids are accepted too. The
/// `Unassigned` variant is reserved for the bucket synthesized by the merger, so it can
/// never collide with a numeric id coming from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomId {
    Number(i64),
    Text(String),
    Unassigned,
}

impl RoomId {
    /// Converts the `room` reference carried by a student into a lookup key.
    ///
    /// Integers, floats without a fractional part (`1.0`) and strings are usable
    /// references. Anything else is not.
    pub fn from_reference(value: &Value) -> Option<RoomId> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(whole_number))
                .map(RoomId::Number),
            Value::String(text) => Some(RoomId::from(text.as_str())),
            _ => None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, RoomId::Unassigned)
    }
}

fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl From<i64> for RoomId {
    fn from(id: i64) -> Self {
        RoomId::Number(id)
    }
}

impl From<i32> for RoomId {
    fn from(id: i32) -> Self {
        RoomId::Number(i64::from(id))
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        if id == UNASSIGNED_ID {
            RoomId::Unassigned
        } else {
            RoomId::Text(id.to_string())
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomId::Number(id) => write!(f, "{}", id),
            RoomId::Text(id) => write!(f, "{}", id),
            RoomId::Unassigned => write!(f, "{}", UNASSIGNED_ID),
        }
    }
}

impl Serialize for RoomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoomId::Number(id) => serializer.serialize_i64(*id),
            RoomId::Text(id) => serializer.serialize_str(id),
            RoomId::Unassigned => serializer.serialize_str(UNASSIGNED_ID),
        }
    }
}

struct RoomIdVisitor;

impl Visitor<'_> for RoomIdVisitor {
    type Value = RoomId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string room id")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RoomId, E> {
        Ok(RoomId::Number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RoomId, E> {
        i64::try_from(value)
            .map(RoomId::Number)
            .map_err(|_| E::custom(format!("room id {} is out of range", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RoomId, E> {
        Ok(RoomId::from(value))
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RoomId, D::Error> {
        deserializer.deserialize_any(RoomIdVisitor)
    }
}

/// A room record as read from the input.
///
/// Fields other than `id` and `name` are kept untouched in `extra` and written back by
/// the JSON exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}

/// A student record as read from the input.
///
/// `room` is a weak reference to a room id: it is only used as a lookup key and is not
/// part of the exported student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing)]
    pub room: Option<Value>,
}

impl Student {
    pub fn new(id: i64, name: &str, room: Option<i64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            room: room.map(Value::from),
        }
    }

    /// Lookup key of the room this student points at, if the reference is usable.
    pub fn room_key(&self) -> Option<RoomId> {
        self.room.as_ref().and_then(RoomId::from_reference)
    }
}

/// A room together with the students resolved into it, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRoom {
    #[serde(flatten)]
    pub room: Room,
    pub students: Vec<Student>,
}

impl MergedRoom {
    /// The synthetic bucket for students without a valid room.
    pub fn unassigned() -> Self {
        Self {
            room: Room::new(RoomId::Unassigned, UNASSIGNED_NAME),
            students: Vec::new(),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.room.id
    }

    pub fn name(&self) -> &str {
        &self.room.name
    }
}

impl From<Room> for MergedRoom {
    fn from(mut room: Room) -> Self {
        room.extra.remove("students");
        Self {
            room,
            students: Vec::new(),
        }
    }
}
