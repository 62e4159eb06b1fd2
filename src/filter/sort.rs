// src/filter/sort.rs
//! Sort criteria for database queries and search.

use super::derived::TimestampKind;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// One sort criterion: a property or a page timestamp plus a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sort {
    Property { name: String, direction: Direction },
    Timestamp { kind: TimestampKind, direction: Direction },
}

impl Sort {
    pub fn property(name: impl Into<String>, direction: Direction) -> Self {
        Self::Property {
            name: name.into(),
            direction,
        }
    }

    pub fn timestamp(kind: TimestampKind, direction: Direction) -> Self {
        Self::Timestamp { kind, direction }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Property { name, direction } => json!({
                "property": name,
                "direction": direction,
            }),
            Self::Timestamp { kind, direction } => json!({
                "timestamp": kind.as_str(),
                "direction": direction,
            }),
        }
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
