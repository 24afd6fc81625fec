//! Container runtime state, as reported by the `state` operation.

use ocispec_core::{Field, FieldKind, Result, Schema, SpecError, TypedObject, Value};

/// Runtime spec version written into new state documents.
pub const STATE_OCI_VERSION: &str = "1.0.0";

/// Lifecycle states a container can report.
pub const STATUSES: &[&str] = &["creating", "created", "running", "stopped"];

pub struct State;

impl Schema for State {
    const NAME: &'static str = "State";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ociVersion", FieldKind::STRING).required())?
            .declare(Field::new("ID", FieldKind::STRING).json("id").required())?
            .declare(Field::new("Status", FieldKind::STRING).json("status").required())?
            .declare(Field::new("Pid", FieldKind::INTEGER).json("pid").omit_empty())?
            .declare(Field::new("Bundle", FieldKind::STRING).json("bundle").required())?
            .declare(Field::new("Annotations", FieldKind::Map).json("annotations").omit_empty())?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        let status = object.value("Status").and_then(Value::as_str);
        match status {
            Some(status) if STATUSES.contains(&status) => Ok(()),
            other => Err(SpecError::CrossFieldValidation {
                schema: Self::NAME.to_string(),
                message: format!(
                    "status {} is not one of {}",
                    other.unwrap_or("<unset>"),
                    STATUSES.join(", ")
                ),
            }),
        }
    }
}

impl State {
    /// State document at [`STATE_OCI_VERSION`].
    pub fn create(id: &str, status: &str, bundle: &str, pid: Option<i64>) -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object
            .set("ociVersion", STATE_OCI_VERSION)?
            .set("ID", id)?
            .set("Status", status)?
            .set("Bundle", bundle)?
            .set("Pid", pid)?;
        object.validate()?;
        Ok(object)
    }
}
