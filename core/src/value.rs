//! Values held by attributes.

use chrono::{DateTime, Utc};
use serde_json::{Map, Number};

use crate::config::KeyStyle;
use crate::error::Result;
use crate::object::TypedObject;
use crate::timestamp;

/// A value as stored on an attribute.
///
/// Raw JSON converts into this with `From<serde_json::Value>`: arrays become
/// sequences and objects become untyped maps. Maps are turned into typed
/// objects only when assigned to an attribute whose kind asks for one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(Number),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Map(Map<String, serde_json::Value>),
    Sequence(Vec<Value>),
    Object(Box<TypedObject>),
}

impl Value {
    /// Null, `""`, `[]` and `{}` are empty. Numbers, booleans, timestamps and
    /// typed objects never are.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::Number(_) | Value::Boolean(_) | Value::Timestamp(_) | Value::Object(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map<String, serde_json::Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&TypedObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut TypedObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Short name of the value's shape for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Map(_) => "map",
            Value::Sequence(_) => "sequence",
            Value::Object(_) => "object",
        }
    }

    /// JSON form. Nested typed objects serialize through their own
    /// validation; timestamps use the fixed wire format.
    pub fn to_json(&self, keys: KeyStyle) -> Result<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Timestamp(ts) => serde_json::Value::String(timestamp::format(ts)),
            Value::Map(map) => serde_json::Value::Object(map.clone()),
            Value::Sequence(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json(keys))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(object) => serde_json::Value::Object(object.to_map(keys)?),
        })
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(map),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<TypedObject> for Value {
    fn from(value: TypedObject) -> Self {
        Value::Object(Box::new(value))
    }
}

impl From<Map<String, serde_json::Value>> for Value {
    fn from(value: Map<String, serde_json::Value>) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
