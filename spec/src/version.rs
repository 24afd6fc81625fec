//! Specification version constants and the schema version wrapper.

use ocispec_core::{Result, ScalarKind, ScalarType, SpecError, Value};

/// Incompatible API changes.
pub const VERSION_MAJOR: u32 = 1;

/// Backwards-compatible functionality.
pub const VERSION_MINOR: u32 = 0;

/// Backwards-compatible bug fixes.
pub const VERSION_PATCH: u32 = 2;

/// Development branch marker, empty for releases.
pub const VERSION_DEV: &str = "-dev";

/// Specification version the catalog types support.
pub const VERSION: &str = "1.0.2-dev";

/// Assemble the version string from its parts.
pub fn version() -> String {
    format!(
        "{}.{}.{}{}",
        VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH, VERSION_DEV
    )
}

/// The only `schemaVersion` image manifests and indexes may carry.
pub const SCHEMA_VERSION: i64 = 2;

/// `schemaVersion` of a manifest or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaVersion(i64);

impl SchemaVersion {
    pub fn current() -> Self {
        Self(SCHEMA_VERSION)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}

impl ScalarType for SchemaVersion {
    const NAME: &'static str = "SchemaVersion";
    const BASE: ScalarKind = ScalarKind::Integer;

    fn load(value: &Value) -> Result<Self> {
        value.as_i64().map(Self).ok_or_else(|| SpecError::TypeMismatch {
            field: Self::NAME.to_string(),
            expected: "integer".to_string(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.0 != SCHEMA_VERSION {
            return Err(SpecError::InvalidValue {
                field: "schemaVersion".to_string(),
                reason: format!("must be {}, got {}", SCHEMA_VERSION, self.0),
            });
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        Value::from(self.0)
    }
}
