//! OCI Spec Core - Typed Attribute Framework
//!
//! Declarative typed objects: a schema declares named, typed attributes
//! (required, omit-empty, pattern-checked, hidden or platform-tagged) and
//! every object built from it can be loaded from JSON, validated and
//! serialized back with the same rules.
//!
//! The OCI document catalog in the `ocispec` crate is built entirely on
//! these types.

pub mod attribute;
pub mod config;
pub mod error;
pub mod kind;
pub mod object;
pub mod scalar;
pub mod schema;
pub mod shared;
pub mod timestamp;
pub mod value;

// Re-export commonly used types
pub use attribute::{Attribute, Field};
pub use config::{JsonStyle, KeyStyle, LoadOptions, SerializeOptions};
pub use error::{Result, SpecError};
pub use kind::{FieldKind, ScalarKind, SchemaRef, WrapperRef};
pub use object::{Advise, Check, TypedObject};
pub use scalar::ScalarType;
pub use schema::Schema;
pub use shared::Shared;
pub use value::Value;

/// Framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
