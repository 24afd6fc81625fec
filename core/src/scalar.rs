//! Scalar wrapper types.
//!
//! Some schema fields are a single scalar with its own rules (a digest string,
//! a schema version number). A wrapper gives such a scalar the same
//! load/validate/serialize contract as a typed object; attributes refer to it
//! through [`FieldKind::Wrapped`](crate::kind::FieldKind::Wrapped).

use crate::error::Result;
use crate::kind::ScalarKind;
use crate::value::Value;

pub trait ScalarType: Sized {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Primitive kind carried on the wire.
    const BASE: ScalarKind;

    /// Build the wrapper from a value of the base kind.
    fn load(value: &Value) -> Result<Self>;

    /// Domain checks beyond the base kind.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn to_value(&self) -> Value;
}
