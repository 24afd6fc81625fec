//! Field kinds: the closed set of shapes an attribute value can take.

use crate::error::Result;
use crate::object::TypedObject;
use crate::scalar::ScalarType;
use crate::schema::Schema;
use crate::timestamp;
use crate::value::Value;

/// Primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
}

impl ScalarKind {
    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (ScalarKind::String, Value::String(_)) => true,
            (ScalarKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (ScalarKind::Boolean, Value::Boolean(_)) => true,
            _ => false,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// Reference to a nested schema, resolved once at declaration time.
#[derive(Clone, Copy)]
pub struct SchemaRef {
    name: &'static str,
    build: fn() -> Result<TypedObject>,
}

impl SchemaRef {
    pub fn of<S: Schema>() -> Self {
        Self {
            name: S::NAME,
            build: S::new_object,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construct an empty instance of the referenced schema.
    pub fn instantiate(&self) -> Result<TypedObject> {
        (self.build)()
    }
}

impl PartialEq for SchemaRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchemaRef({})", self.name)
    }
}

/// Reference to a scalar wrapper type such as a digest.
#[derive(Clone, Copy)]
pub struct WrapperRef {
    name: &'static str,
    base: ScalarKind,
    coerce: fn(&Value) -> Result<Value>,
}

impl WrapperRef {
    pub fn of<W: ScalarType>() -> Self {
        Self {
            name: W::NAME,
            base: W::BASE,
            coerce: coerce_wrapped::<W>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base(&self) -> ScalarKind {
        self.base
    }

    /// Load, validate and re-emit a scalar through the wrapper.
    pub fn coerce(&self, value: &Value) -> Result<Value> {
        (self.coerce)(value)
    }
}

fn coerce_wrapped<W: ScalarType>(value: &Value) -> Result<Value> {
    let wrapped = W::load(value)?;
    wrapped.validate()?;
    Ok(wrapped.to_value())
}

impl PartialEq for WrapperRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for WrapperRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WrapperRef({})", self.name)
    }
}

/// Declared kind of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// A nested typed object.
    Object(SchemaRef),
    /// A scalar carried through a wrapper type's load/validate contract.
    Wrapped(WrapperRef),
    /// Homogeneous ordered sequence.
    SequenceOf(Box<FieldKind>),
    /// Open key-value map; entries are not checked.
    Map,
    Timestamp,
}

impl FieldKind {
    pub const STRING: FieldKind = FieldKind::Scalar(ScalarKind::String);
    pub const INTEGER: FieldKind = FieldKind::Scalar(ScalarKind::Integer);
    pub const BOOLEAN: FieldKind = FieldKind::Scalar(ScalarKind::Boolean);

    pub fn object<S: Schema>() -> Self {
        FieldKind::Object(SchemaRef::of::<S>())
    }

    pub fn wrapped<W: ScalarType>() -> Self {
        FieldKind::Wrapped(WrapperRef::of::<W>())
    }

    pub fn sequence_of(element: FieldKind) -> Self {
        FieldKind::SequenceOf(Box::new(element))
    }

    pub fn strings() -> Self {
        Self::sequence_of(Self::STRING)
    }

    pub fn integers() -> Self {
        Self::sequence_of(Self::INTEGER)
    }

    pub fn objects<S: Schema>() -> Self {
        Self::sequence_of(Self::object::<S>())
    }

    /// Human readable kind, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            FieldKind::Scalar(kind) => kind.name().to_string(),
            FieldKind::Object(schema) => schema.name().to_string(),
            FieldKind::Wrapped(wrapper) => wrapper.name().to_string(),
            FieldKind::SequenceOf(element) => format!("[{}]", element.describe()),
            FieldKind::Map => "map".to_string(),
            FieldKind::Timestamp => "timestamp".to_string(),
        }
    }

    /// Placeholder emitted for an unset attribute that is not omit-empty.
    pub fn empty_value(&self) -> serde_json::Value {
        match self {
            FieldKind::Scalar(ScalarKind::String) => serde_json::Value::String(String::new()),
            FieldKind::Wrapped(wrapper) if wrapper.base() == ScalarKind::String => {
                serde_json::Value::String(String::new())
            }
            FieldKind::SequenceOf(_) => serde_json::Value::Array(Vec::new()),
            FieldKind::Map => serde_json::Value::Object(serde_json::Map::new()),
            _ => serde_json::Value::Null,
        }
    }

    /// Structural check of an already coerced value.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            FieldKind::Scalar(kind) => kind.matches(value),
            FieldKind::Object(schema) => {
                matches!(value, Value::Object(object) if object.schema_name() == schema.name())
            }
            FieldKind::Wrapped(wrapper) => {
                wrapper.base().matches(value) && wrapper.coerce(value).is_ok()
            }
            FieldKind::SequenceOf(element) => match value {
                Value::Sequence(items) => items.iter().all(|item| element.check(item)),
                _ => false,
            },
            FieldKind::Map => matches!(value, Value::Map(_)),
            FieldKind::Timestamp => match value {
                Value::Timestamp(_) => true,
                Value::String(text) => timestamp::has_valid_date(text),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_checks() {
        assert!(FieldKind::STRING.check(&Value::from("a")));
        assert!(!FieldKind::STRING.check(&Value::from(1i64)));
        assert!(FieldKind::INTEGER.check(&Value::from(json!(7))));
        assert!(FieldKind::INTEGER.check(&Value::from(json!(u64::MAX))));
        assert!(!FieldKind::INTEGER.check(&Value::from(json!(1.5))));
        assert!(!FieldKind::INTEGER.check(&Value::from(true)));
        assert!(FieldKind::BOOLEAN.check(&Value::from(false)));
        assert!(!FieldKind::BOOLEAN.check(&Value::from(0i64)));
    }

    #[test]
    fn test_sequence_checks_every_element() {
        let kind = FieldKind::strings();
        assert!(kind.check(&Value::from(json!(["a", "b"]))));
        assert!(kind.check(&Value::from(json!([]))));
        assert!(!kind.check(&Value::from(json!(["a", 1]))));
        assert!(!kind.check(&Value::from("a")));
    }

    #[test]
    fn test_map_accepts_any_mapping() {
        assert!(FieldKind::Map.check(&Value::from(json!({"a": [1, {"b": null}]}))));
        assert!(!FieldKind::Map.check(&Value::from(json!(["a"]))));
    }

    #[test]
    fn test_timestamp_check_is_lenient_for_strings() {
        assert!(FieldKind::Timestamp.check(&Value::from("2015-10-31T25:61:00")));
        assert!(!FieldKind::Timestamp.check(&Value::from("31/10/2015")));
        assert!(!FieldKind::Timestamp.check(&Value::from(5i64)));
    }

    #[test]
    fn test_describe() {
        assert_eq!(FieldKind::STRING.describe(), "string");
        assert_eq!(FieldKind::integers().describe(), "[integer]");
        assert_eq!(FieldKind::Map.describe(), "map");
        assert_eq!(
            FieldKind::sequence_of(FieldKind::strings()).describe(),
            "[[string]]"
        );
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(FieldKind::STRING.empty_value(), json!(""));
        assert_eq!(FieldKind::INTEGER.empty_value(), json!(null));
        assert_eq!(FieldKind::BOOLEAN.empty_value(), json!(null));
        assert_eq!(FieldKind::strings().empty_value(), json!([]));
        assert_eq!(FieldKind::Map.empty_value(), json!({}));
        assert_eq!(FieldKind::Timestamp.empty_value(), json!(null));
    }
}
