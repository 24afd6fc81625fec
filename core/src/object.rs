//! Typed objects: an ordered set of attributes with load, validate and
//! serialize operations.
//!
//! # Lifecycle
//!
//! ```text
//! new ──► declare(field)* ──► load(json) ──► get / set ──► to_map / to_json
//!                                 ▲                             │
//!                                 └──── (each load replaces) ───┘
//! ```
//!
//! A load never merges with an earlier one: every key is resolved against
//! the declared wire names first, then all values are cleared and the new
//! ones assigned.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use serde_json::Map;

use crate::attribute::{Attribute, Field};
use crate::config::{JsonStyle, KeyStyle, LoadOptions, SerializeOptions};
use crate::error::{Result, SpecError};
use crate::schema::Schema;
use crate::value::Value;

/// Cross-field validation hook.
pub type Check = fn(&TypedObject) -> Result<()>;

/// Post-load diagnostics hook.
pub type Advise = fn(&TypedObject);

/// An instance of a schema.
#[derive(Clone)]
pub struct TypedObject {
    schema: &'static str,
    attributes: Vec<Attribute>,
    check: Option<Check>,
    advise: Option<Advise>,
}

impl TypedObject {
    /// Empty object with no attributes declared.
    pub fn new(schema: &'static str) -> Self {
        Self {
            schema,
            attributes: Vec::new(),
            check: None,
            advise: None,
        }
    }

    /// Instance of `S` with all of its fields declared.
    pub fn of<S: Schema>() -> Result<Self> {
        let mut object = Self::new(S::NAME);
        S::declare(&mut object)?;
        object.check = Some(S::check);
        object.advise = Some(S::advise);
        Ok(object)
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema
    }

    /// Install a cross-field validation hook, replacing any previous one.
    pub fn set_check(&mut self, check: Check) -> &mut Self {
        self.check = Some(check);
        self
    }

    /// Install a hook run after each successful strict load.
    pub fn set_advise(&mut self, advise: Advise) -> &mut Self {
        self.advise = Some(advise);
        self
    }

    /// Register a field, or redeclare one with the same name in place.
    ///
    /// A wire name may belong to one field only.
    pub fn declare(&mut self, field: Field) -> Result<&mut Self> {
        let attribute = Attribute::register(field)?;

        if let Some(other) = self
            .attributes
            .iter()
            .find(|a| a.wire_name() == attribute.wire_name() && a.name() != attribute.name())
        {
            return Err(SpecError::InvalidSchema(format!(
                "{}: wire name '{}' already used by {}",
                self.schema,
                attribute.wire_name(),
                other.name()
            )));
        }

        match self.position(attribute.name()) {
            Some(index) => self.attributes[index] = attribute,
            None => self.attributes.push(attribute),
        }
        Ok(self)
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.position(name)
            .map(|index| &self.attributes[index])
            .ok_or_else(|| self.unknown(name))
    }

    pub fn attribute_mut(&mut self, name: &str) -> Result<&mut Attribute> {
        match self.position(name) {
            Some(index) => Ok(&mut self.attributes[index]),
            None => Err(self.unknown(name)),
        }
    }

    /// Attributes meaningful on `platform`. Platform tags are informational;
    /// validation never consults them.
    pub fn fields_for_platform<'a>(&'a self, platform: &'a str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes.iter().filter(move |a| a.applies_to(platform))
    }

    /// Raw value of a declared attribute, hidden or not. Cross-field checks
    /// read through this.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.position(name)
            .and_then(|index| self.attributes[index].value())
    }

    /// Client read access. Hidden attributes and empty omit-empty attributes
    /// read as `None`; an undeclared name is an error.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        let attribute = self.attribute(name)?;
        if attribute.is_hidden() || (attribute.is_empty() && attribute.omits_empty()) {
            return Ok(None);
        }
        Ok(attribute.value())
    }

    /// Assign a value to a declared attribute.
    ///
    /// Empty values (null, `""`, `[]`, `{}`) are ignored so partially filled
    /// constructors can pass every argument through.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        let index = self.position(name).ok_or_else(|| self.unknown(name))?;
        if value.is_empty() {
            return Ok(self);
        }
        if let Err(e) = self.attributes[index].assign(value) {
            tracing::debug!(schema = self.schema, field = name, error = %e, "Rejected value");
            return Err(e);
        }
        Ok(self)
    }

    /// Unset every attribute.
    pub fn clear(&mut self) {
        for attribute in &mut self.attributes {
            attribute.clear();
        }
    }

    /// Strict load from a JSON object.
    pub fn load(&mut self, content: serde_json::Value) -> Result<&mut Self> {
        self.load_with(content, LoadOptions::default())
    }

    pub fn load_with(
        &mut self,
        content: serde_json::Value,
        options: LoadOptions,
    ) -> Result<&mut Self> {
        match content {
            serde_json::Value::Object(map) => self.load_map(map, options),
            other => Err(SpecError::TypeMismatch {
                field: self.schema.to_string(),
                expected: format!("object (got {})", Value::from(other).shape()),
            }),
        }
    }

    pub(crate) fn load_map(
        &mut self,
        content: Map<String, serde_json::Value>,
        options: LoadOptions,
    ) -> Result<&mut Self> {
        let lookup = self.json_lookup();

        let mut targets = Vec::with_capacity(content.len());
        for key in content.keys() {
            match lookup.get(key.as_str()) {
                Some(&index) => targets.push(index),
                None => {
                    tracing::debug!(schema = self.schema, key = %key, "Unknown JSON key");
                    return Err(SpecError::UnknownField {
                        schema: self.schema.to_string(),
                        field: key.clone(),
                    });
                }
            }
        }

        // Staged on a copy so a failed load keeps the previous contents.
        let mut staged = self.clone();
        staged.clear();

        for ((key, raw), index) in content.into_iter().zip(targets) {
            // JSON null decodes to "unset".
            if raw.is_null() {
                continue;
            }
            let attribute = &mut staged.attributes[index];
            if let Err(e) = attribute.assign(Value::from(raw)) {
                if options.strict {
                    tracing::debug!(
                        schema = self.schema,
                        field = attribute.name(),
                        key = %key,
                        error = %e,
                        "Invalid field value"
                    );
                    return Err(e);
                }
                tracing::debug!(schema = self.schema, key = %key, error = %e, "Skipped invalid field");
            }
        }

        if options.strict {
            staged.validate()?;
            if let Some(advise) = staged.advise {
                advise(&staged);
            }
        }
        *self = staged;
        Ok(self)
    }

    /// Wire name to attribute index.
    fn json_lookup(&self) -> HashMap<String, usize> {
        self.attributes
            .iter()
            .enumerate()
            .map(|(index, a)| (a.wire_name().to_string(), index))
            .collect()
    }

    /// Structural validation followed by the schema's cross-field check.
    ///
    /// A required attribute that is empty fails unless it is also
    /// omit-empty: omit-empty takes precedence over required.
    pub fn validate(&self) -> Result<()> {
        for attribute in &self.attributes {
            if !attribute.is_required() && !attribute.is_set() {
                continue;
            }

            if attribute.is_required() && attribute.is_empty() && !attribute.omits_empty() {
                tracing::debug!(schema = self.schema, field = attribute.name(), "Required field missing");
                return Err(SpecError::RequiredFieldMissing {
                    schema: self.schema.to_string(),
                    field: attribute.name().to_string(),
                });
            }

            let Some(value) = attribute.value() else {
                continue;
            };

            if !attribute.kind().check(value) {
                tracing::debug!(
                    schema = self.schema,
                    field = attribute.name(),
                    expected = %attribute.kind().describe(),
                    "Type validation failed"
                );
                return Err(SpecError::TypeMismatch {
                    field: attribute.name().to_string(),
                    expected: attribute.kind().describe(),
                });
            }

            validate_nested(value)?;
        }

        if let Some(check) = self.check {
            check(self)?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate, then build the JSON mapping.
    ///
    /// Hidden attributes never appear. Empty attributes are dropped when
    /// omit-empty and otherwise written as their kind's placeholder
    /// (`""`, `null`, `[]` or `{}`).
    pub fn to_map(&self, keys: KeyStyle) -> Result<Map<String, serde_json::Value>> {
        self.validate()?;

        let mut result = Map::new();
        for attribute in &self.attributes {
            if attribute.is_hidden() || (attribute.is_empty() && attribute.omits_empty()) {
                continue;
            }
            let label = match keys {
                KeyStyle::Wire => attribute.wire_name(),
                KeyStyle::Field => attribute.name(),
            };
            result.insert(label.to_string(), attribute.serialize(keys)?);
        }
        Ok(result)
    }

    pub fn to_json_value(&self, keys: KeyStyle) -> Result<serde_json::Value> {
        Ok(serde_json::Value::Object(self.to_map(keys)?))
    }

    pub fn to_json(&self, options: SerializeOptions) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, options)?;
        String::from_utf8(buf).map_err(|e| SpecError::SerializationError(e.to_string()))
    }

    pub fn write<W: Write>(&self, writer: W, options: SerializeOptions) -> Result<()> {
        let value = self.to_json_value(options.keys)?;
        match options.style {
            JsonStyle::Compact => serde_json::to_writer(writer, &value)?,
            JsonStyle::Pretty => {
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
                serde::Serialize::serialize(&value, &mut serializer)?;
            }
        }
        Ok(())
    }

    /// Write the serialized object to `path`.
    pub fn save(&self, path: impl AsRef<Path>, options: SerializeOptions) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json(options)?;
        std::fs::write(path, text)?;
        tracing::debug!(schema = self.schema, path = %path.display(), "Saved object");
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    fn unknown(&self, name: &str) -> SpecError {
        SpecError::UnknownField {
            schema: self.schema.to_string(),
            field: name.to_string(),
        }
    }
}

impl std::fmt::Debug for TypedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedObject")
            .field("schema", &self.schema)
            .field("attributes", &self.attributes)
            .field("check", &self.check.is_some())
            .field("advise", &self.advise.is_some())
            .finish()
    }
}

fn validate_nested(value: &Value) -> Result<()> {
    match value {
        Value::Object(object) => object.validate(),
        Value::Sequence(items) => items.iter().try_for_each(validate_nested),
        _ => Ok(()),
    }
}

/// Two objects are equal when they share a schema and hold equal values
/// under the same field names.
impl PartialEq for TypedObject {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .zip(&other.attributes)
                .all(|(a, b)| a.name() == b.name() && a.value() == b.value())
    }
}
