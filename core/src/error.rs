use thiserror::Error;

/// Errors raised while declaring, loading, validating or serializing typed objects.
#[derive(Error, Debug)]
pub enum SpecError {
    /// A field name or JSON key that the schema never declared
    #[error("Unknown field: {schema} has no attribute '{field}'")]
    UnknownField { schema: String, field: String },

    /// The schema declaration itself is malformed
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Value shape does not match the declared kind
    #[error("Type mismatch: {field} should be {expected}")]
    TypeMismatch { field: String, expected: String },

    /// String value rejected by the field pattern
    #[error("Pattern mismatch: {field} value '{value}' does not match {pattern}")]
    PatternMismatch {
        field: String,
        value: String,
        pattern: String,
    },

    /// Required attribute absent or empty after load
    #[error("Required field missing: {schema}.{field}")]
    RequiredFieldMissing { schema: String, field: String },

    /// A schema's cross-field check rejected the object
    #[error("Validation failed for {schema}: {message}")]
    CrossFieldValidation { schema: String, message: String },

    /// Timestamp string is not ISO-8601
    #[error("Invalid timestamp for {field}: '{value}'")]
    TimestampParse { field: String, value: String },

    /// A scalar wrapper rejected its value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SpecError {
    /// Whether this error points at a bug in a schema declaration or caller
    /// code rather than at bad input data.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            SpecError::UnknownField { .. } | SpecError::InvalidSchema(_)
        )
    }
}

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        SpecError::SerializationError(err.to_string())
    }
}

/// Result type alias for typed object operations
pub type Result<T> = std::result::Result<T, SpecError>;
