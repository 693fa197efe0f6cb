//! Frontend Models
//!
//! Data structures matching the REST API wire format.

use serde::{Deserialize, Serialize};
use web_sys::DragEvent;

/// Board column, serialized as its integer index on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Column {
    Todo = 0,
    Doing = 1,
    Done = 2,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::Doing, Column::Done];

    /// Display title for the column header
    pub fn title(self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::Doing => "Doing",
            Column::Done => "Done",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Column> for u8 {
    fn from(column: Column) -> u8 {
        column as u8
    }
}

impl TryFrom<u8> for Column {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Column::Todo),
            1 => Ok(Column::Doing),
            2 => Ok(Column::Done),
            other => Err(format!("invalid column index {}", other)),
        }
    }
}

/// Todo/task record (matches the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub done: bool,
    pub column: Column,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Profile returned by `GET /me`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub username: String,
}

/// Transient feedback line shown under the auth forms
#[derive(Debug, Clone, PartialEq)]
pub struct AuthMessage {
    pub content: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Drag payload format name used with the `DataTransfer`
pub const DRAG_FORMAT: &str = "application/json";

/// Structured drag-and-drop payload carried by a task card.
///
/// JSON-encoded into the `DataTransfer` on dragstart and validated on drop;
/// drops whose payload does not decode are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub task_id: i64,
}

impl DragPayload {
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Read and validate the payload from a drop event
    pub fn from_event(ev: &DragEvent) -> Option<Self> {
        let raw = ev.data_transfer()?.get_data(DRAG_FORMAT).ok()?;
        Self::decode(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_try_from_rejects_out_of_range() {
        assert_eq!(Column::try_from(0), Ok(Column::Todo));
        assert_eq!(Column::try_from(2), Ok(Column::Done));
        assert!(Column::try_from(3).is_err());
    }

    #[test]
    fn test_todo_decodes_wire_format() {
        let json = r#"{"id":7,"content":"Buy milk","done":false,"column":1,"createdAt":"2026-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).expect("decode failed");
        assert_eq!(todo.id, 7);
        assert_eq!(todo.column, Column::Doing);
        assert_eq!(todo.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));
        assert!(todo.updated_at.is_none());
    }

    #[test]
    fn test_todo_rejects_invalid_column() {
        let json = r#"{"id":7,"content":"x","done":false,"column":9}"#;
        assert!(serde_json::from_str::<Todo>(json).is_err());
    }

    #[test]
    fn test_drag_payload_round_trip() {
        let payload = DragPayload { task_id: 42 };
        assert_eq!(DragPayload::decode(&payload.encode()), Some(payload));
    }

    #[test]
    fn test_drag_payload_rejects_junk() {
        assert_eq!(DragPayload::decode("42"), None);
        assert_eq!(DragPayload::decode(""), None);
        assert_eq!(DragPayload::decode("{\"other\":1}"), None);
    }
}
