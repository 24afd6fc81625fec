//! Content digests (`algorithm:encoded`).
//!
//! Only the string form is handled here; hashing content is left to callers.

use std::fmt;
use std::str::FromStr;

use ocispec_core::{ScalarKind, ScalarType, SpecError, Value};
use thiserror::Error;

/// Digest format pattern for string fields that carry one.
pub const DIGEST_PATTERN: &str = r"^[a-z0-9]+(?:[.+_-][a-z0-9]+)*:[a-zA-Z0-9=_-]+$";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("invalid digest format: {0}")]
    InvalidFormat(String),

    #[error("invalid digest length: {algorithm} expects {expected} hex characters, got {actual}")]
    InvalidLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported digest algorithm: {0}")]
    Unsupported(String),
}

impl From<DigestError> for SpecError {
    fn from(err: DigestError) -> Self {
        SpecError::InvalidValue {
            field: "digest".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Registered digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Algorithm used when none is specified.
    pub const CANONICAL: Algorithm = Algorithm::Sha256;

    pub const ALL: [Algorithm; 3] = [Algorithm::Sha256, Algorithm::Sha384, Algorithm::Sha512];

    /// Length of the hex-encoded portion.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Check an encoded string against this algorithm.
    pub fn validate(&self, encoded: &str) -> Result<(), DigestError> {
        if encoded.len() != self.encoded_len() {
            return Err(DigestError::InvalidLength {
                algorithm: *self,
                expected: self.encoded_len(),
                actual: encoded.len(),
            });
        }
        // Registered algorithms are lower-case hex only.
        if encoded.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(DigestError::InvalidFormat(format!(
                "{} encoding must be lower-case hex",
                self
            )));
        }
        hex::decode(encoded).map_err(|e| DigestError::InvalidFormat(e.to_string()))?;
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            other => Err(DigestError::Unsupported(other.to_string())),
        }
    }
}

/// A validated digest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    encoded: String,
}

impl Digest {
    pub fn new(algorithm: Algorithm, encoded: impl Into<String>) -> Result<Self, DigestError> {
        let encoded = encoded.into();
        algorithm.validate(&encoded)?;
        Ok(Self { algorithm, encoded })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.encoded)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (algorithm, encoded) = s
            .split_once(':')
            .ok_or_else(|| DigestError::InvalidFormat(s.to_string()))?;

        if !is_algorithm_component(algorithm) || !is_encoded_component(encoded) {
            return Err(DigestError::InvalidFormat(s.to_string()));
        }

        Self::new(algorithm.parse()?, encoded)
    }
}

// [a-z0-9]+ separated by single [.+_-]
fn is_algorithm_component(s: &str) -> bool {
    !s.is_empty()
        && s.split(|c| matches!(c, '.' | '+' | '_' | '-'))
            .all(|part| {
                !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
}

fn is_encoded_component(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'=' | b'_' | b'-'))
}

impl ScalarType for Digest {
    const NAME: &'static str = "Digest";
    const BASE: ScalarKind = ScalarKind::String;

    fn load(value: &Value) -> ocispec_core::Result<Self> {
        let text = value.as_str().ok_or_else(|| SpecError::TypeMismatch {
            field: Self::NAME.to_string(),
            expected: "string".to_string(),
        })?;
        Ok(text.parse()?)
    }

    fn to_value(&self) -> Value {
        Value::from(self.to_string())
    }
}
