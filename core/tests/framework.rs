//! Integration test: declaring schemas against the public API.
//!
//! Builds a small two-level schema with a scalar wrapper, then checks load,
//! validation and serialization from outside the crate.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p ocispec-core --test framework
//! ```

use ocispec_core::{
    Field, FieldKind, KeyStyle, Result, ScalarKind, ScalarType, Schema, SpecError, TypedObject,
    Value,
};
use serde_json::json;

/// TCP port, 1 through 65535.
#[derive(Debug)]
struct Port(u64);

impl ScalarType for Port {
    const NAME: &'static str = "Port";
    const BASE: ScalarKind = ScalarKind::Integer;

    fn load(value: &Value) -> Result<Self> {
        value.as_u64().map(Port).ok_or_else(|| SpecError::TypeMismatch {
            field: Self::NAME.to_string(),
            expected: "unsigned integer".to_string(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.0 == 0 || self.0 > 65535 {
            return Err(SpecError::InvalidValue {
                field: Self::NAME.to_string(),
                reason: format!("{} is out of range", self.0),
            });
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::from(self.0)
    }
}

struct Listener;

impl Schema for Listener {
    const NAME: &'static str = "Listener";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Address", FieldKind::STRING)
                    .json("address")
                    .pattern(r"^[0-9.]+$")
                    .required(),
            )?
            .declare(
                Field::new("Ports", FieldKind::sequence_of(FieldKind::wrapped::<Port>()))
                    .json("ports")
                    .required(),
            )?;
        Ok(())
    }
}

struct Server;

impl Schema for Server {
    const NAME: &'static str = "Server";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Name", FieldKind::STRING).json("name").required())?
            .declare(
                Field::new("Listeners", FieldKind::objects::<Listener>())
                    .json("listeners")
                    .omit_empty(),
            )?
            .declare(Field::new("Started", FieldKind::Timestamp).json("started").omit_empty())?
            .declare(Field::new("Token", FieldKind::STRING).json("token").hidden())?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        let count = object
            .value("Listeners")
            .and_then(Value::as_sequence)
            .map_or(0, <[Value]>::len);
        if count > 2 {
            return Err(SpecError::CrossFieldValidation {
                schema: Self::NAME.to_string(),
                message: format!("at most 2 listeners, got {}", count),
            });
        }
        Ok(())
    }
}

#[test]
fn test_wrapped_sequence_loads_and_serializes() {
    let server = Server::from_json(json!({
        "name": "edge",
        "listeners": [{"address": "10.0.0.1", "ports": [80, 443]}],
        "started": "2024-02-29T12:00:00Z"
    }))
    .unwrap();

    assert_eq!(
        server.to_json_value(KeyStyle::Wire).unwrap(),
        json!({
            "name": "edge",
            "listeners": [{"address": "10.0.0.1", "ports": [80, 443]}],
            "started": "2024-02-29T12:00:00.000000000Z"
        })
    );
}

#[test]
fn test_wrapper_rejects_out_of_range() {
    let err = Server::from_json(json!({
        "name": "edge",
        "listeners": [{"address": "10.0.0.1", "ports": [80, 70000]}]
    }))
    .unwrap_err();
    assert!(matches!(err, SpecError::InvalidValue { ref field, .. } if field == "Port"));
}

#[test]
fn test_pattern_on_nested_object() {
    let err = Server::from_json(json!({
        "name": "edge",
        "listeners": [{"address": "localhost", "ports": [80]}]
    }))
    .unwrap_err();
    assert!(matches!(err, SpecError::PatternMismatch { ref field, .. } if field == "Address"));
}

#[test]
fn test_cross_field_check() {
    let listener = json!({"address": "10.0.0.1", "ports": [80]});
    let err = Server::from_json(json!({
        "name": "edge",
        "listeners": [listener.clone(), listener.clone(), listener]
    }))
    .unwrap_err();
    assert!(matches!(err, SpecError::CrossFieldValidation { .. }));
}

#[test]
fn test_hidden_token_survives_in_memory_only() {
    let mut server = Server::from_json(json!({"name": "edge"})).unwrap();
    server.set("Token", "s3cret").unwrap();

    assert_eq!(server.get("Token").unwrap(), None);
    assert_eq!(server.value("Token"), Some(&Value::from("s3cret")));
    assert_eq!(
        server.to_json_value(KeyStyle::Wire).unwrap(),
        json!({"name": "edge"})
    );

    // A hidden wire key is still declared, so loading it is allowed.
    let loaded = Server::from_json(json!({"name": "edge", "token": "t"})).unwrap();
    assert_eq!(loaded.value("Token"), Some(&Value::from("t")));
}

#[test]
fn test_loads_replace_not_merge() {
    let mut server = Server::from_json(json!({
        "name": "edge",
        "started": "2024-02-29T12:00:00Z"
    }))
    .unwrap();
    server.load(json!({"name": "core"})).unwrap();
    assert!(server.value("Started").is_none());
    assert_eq!(server.get("Name").unwrap(), Some(&Value::from("core")));
}

#[test]
fn test_declaration_errors() {
    let mut object = TypedObject::new("Broken");
    assert!(matches!(
        object.declare(Field::new("Bad", FieldKind::STRING).pattern("[unclosed")),
        Err(SpecError::InvalidSchema(_))
    ));
    object.declare(Field::new("A", FieldKind::STRING).json("a")).unwrap();
    assert!(matches!(
        object.declare(Field::new("B", FieldKind::STRING).json("a")),
        Err(SpecError::InvalidSchema(_))
    ));
}
