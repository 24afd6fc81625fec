//! Attributes: one named, typed field of a typed object.

use regex::Regex;

use crate::config::KeyStyle;
use crate::error::{Result, SpecError};
use crate::kind::{FieldKind, SchemaRef};
use crate::timestamp;
use crate::value::Value;

/// Declaration of a field, consumed by [`TypedObject::declare`](crate::TypedObject::declare).
///
/// Defaults: optional, not omit-empty, no pattern, visible, applies to every
/// platform, wire name equal to the field name.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    wire_name: Option<String>,
    required: bool,
    omit_empty: bool,
    pattern: Option<String>,
    hidden: bool,
    platforms: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            wire_name: None,
            required: false,
            omit_empty: false,
            pattern: None,
            hidden: false,
            platforms: Vec::new(),
        }
    }

    /// JSON key used on the wire.
    pub fn json(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Drop the field from output when empty. Also exempts a required field
    /// from the required check.
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Regular expression every string leaf must match (search semantics,
    /// anchor it explicitly).
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn platforms(mut self, platforms: &[&str]) -> Self {
        self.platforms = platforms.iter().map(|p| p.to_string()).collect();
        self
    }
}

/// A registered field together with its current value.
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    wire_name: String,
    kind: FieldKind,
    required: bool,
    omit_empty: bool,
    pattern: Option<Regex>,
    hidden: bool,
    platforms: Vec<String>,
    value: Option<Value>,
}

impl Attribute {
    /// Register a field. The value starts unset.
    pub fn register(field: Field) -> Result<Self> {
        if field.name.is_empty() {
            return Err(SpecError::InvalidSchema(
                "attribute name must not be empty".to_string(),
            ));
        }

        let pattern = match field.pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => Some(Regex::new(pattern).map_err(|e| {
                SpecError::InvalidSchema(format!(
                    "invalid pattern for {}: {}",
                    field.name, e
                ))
            })?),
            _ => None,
        };

        let wire_name = field
            .wire_name
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| field.name.clone());

        Ok(Self {
            name: field.name,
            wire_name,
            kind: field.kind,
            required: field.required,
            omit_empty: field.omit_empty,
            pattern,
            hidden: field.hidden,
            platforms: field.platforms,
            value: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn omits_empty(&self) -> bool {
        self.omit_empty
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|re| re.as_str())
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    /// Whether the field is meaningful on `platform`. Untagged fields apply
    /// everywhere.
    pub fn applies_to(&self, platform: &str) -> bool {
        self.platforms.is_empty() || self.platforms.iter().any(|p| p == platform)
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Unset, or set to an empty value.
    pub fn is_empty(&self) -> bool {
        self.value.as_ref().map_or(true, Value::is_empty)
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Coerce `candidate` to this attribute's kind and store it.
    ///
    /// Nested objects are built and loaded from maps, pattern and type checks
    /// run on the result, and timestamp strings are parsed. On failure the
    /// previous value is left in place.
    pub fn assign(&mut self, candidate: impl Into<Value>) -> Result<()> {
        let value = self.coerce(candidate.into())?;
        self.value = Some(value);
        Ok(())
    }

    fn coerce(&self, candidate: Value) -> Result<Value> {
        let value = match &self.kind {
            FieldKind::Object(schema) => self.resolve_object(schema, candidate)?,
            FieldKind::Wrapped(wrapper) => wrapper.coerce(&candidate)?,
            FieldKind::SequenceOf(element) => match (element.as_ref(), candidate) {
                (FieldKind::Object(schema), Value::Sequence(items)) => Value::Sequence(
                    items
                        .into_iter()
                        .map(|item| self.resolve_object(schema, item))
                        .collect::<Result<Vec<_>>>()?,
                ),
                (FieldKind::Wrapped(wrapper), Value::Sequence(items)) => Value::Sequence(
                    items
                        .iter()
                        .map(|item| wrapper.coerce(item))
                        .collect::<Result<Vec<_>>>()?,
                ),
                (FieldKind::Object(_), other) => {
                    // A lone object is not promoted to a one-element sequence.
                    return Err(self.mismatch(&other));
                }
                (_, other) => other,
            },
            _ => candidate,
        };

        self.check_pattern(&value)?;

        let value = match (&self.kind, value) {
            (FieldKind::Timestamp, Value::String(text)) => match timestamp::parse(&text) {
                Some(ts) => Value::Timestamp(ts),
                None => {
                    tracing::debug!(field = %self.name, value = %text, "Timestamp parse failed");
                    return Err(SpecError::TimestampParse {
                        field: self.name.clone(),
                        value: text,
                    });
                }
            },
            (_, value) => value,
        };

        if !self.kind.check(&value) {
            return Err(self.mismatch(&value));
        }
        Ok(value)
    }

    fn resolve_object(&self, schema: &SchemaRef, candidate: Value) -> Result<Value> {
        match candidate {
            Value::Object(object) if object.schema_name() == schema.name() => {
                Ok(Value::Object(object))
            }
            Value::Map(map) => {
                let mut object = schema.instantiate()?;
                object.load_map(map, Default::default())?;
                Ok(Value::Object(Box::new(object)))
            }
            other => Err(SpecError::TypeMismatch {
                field: self.name.clone(),
                expected: format!("{} (got {})", schema.name(), other.shape()),
            }),
        }
    }

    /// Match the pattern against a string, or every string in a sequence.
    pub fn check_pattern(&self, value: &Value) -> Result<()> {
        let Some(pattern) = &self.pattern else {
            return Ok(());
        };

        let entries = match value {
            Value::Sequence(items) => items.iter().collect::<Vec<_>>(),
            other => vec![other],
        };

        for entry in entries {
            if let Value::String(text) = entry {
                if !pattern.is_match(text) {
                    tracing::debug!(
                        field = %self.name,
                        value = %text,
                        pattern = %pattern.as_str(),
                        "Pattern validation failed"
                    );
                    return Err(SpecError::PatternMismatch {
                        field: self.name.clone(),
                        value: text.clone(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn mismatch(&self, value: &Value) -> SpecError {
        tracing::debug!(
            field = %self.name,
            expected = %self.kind.describe(),
            got = value.shape(),
            "Type validation failed"
        );
        SpecError::TypeMismatch {
            field: self.name.clone(),
            expected: self.kind.describe(),
        }
    }

    /// JSON form of the current value, or the kind's empty placeholder when
    /// unset.
    pub fn serialize(&self, keys: KeyStyle) -> Result<serde_json::Value> {
        match &self.value {
            Some(value) => value.to_json(keys),
            None => Ok(self.kind.empty_value()),
        }
    }
}
