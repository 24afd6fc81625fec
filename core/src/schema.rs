//! The `Schema` trait: a named set of field declarations plus an optional
//! cross-field check.

use std::io::Read;
use std::path::Path;

use crate::config::LoadOptions;
use crate::error::Result;
use crate::object::TypedObject;

/// A document type such as an image manifest or a runtime process.
///
/// Implementors are unit structs; instances live in [`TypedObject`]s built by
/// [`Schema::new_object`].
pub trait Schema: Sized {
    /// Schema name. Also the identity used when a nested object is checked
    /// against an attribute's declared kind.
    const NAME: &'static str;

    /// Declare every field on a fresh object.
    fn declare(object: &mut TypedObject) -> Result<()>;

    /// Cross-field validation, run after structural validation.
    fn check(_object: &TypedObject) -> Result<()> {
        Ok(())
    }

    /// Non-fatal diagnostics, run once after a successful strict load.
    fn advise(_object: &TypedObject) {}

    fn new_object() -> Result<TypedObject> {
        TypedObject::of::<Self>()
    }

    /// Strictly load and validate a JSON value.
    fn from_json(content: serde_json::Value) -> Result<TypedObject> {
        Self::from_json_with(content, LoadOptions::default())
    }

    fn from_json_with(content: serde_json::Value, options: LoadOptions) -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object.load_with(content, options)?;
        Ok(object)
    }

    /// Parse JSON text.
    fn parse(text: &str) -> Result<TypedObject> {
        Self::from_json(serde_json::from_str(text)?)
    }

    fn from_reader<R: Read>(reader: R) -> Result<TypedObject> {
        Self::from_json(serde_json::from_reader(reader)?)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<TypedObject> {
        let path = path.as_ref();
        tracing::debug!(schema = Self::NAME, path = %path.display(), "Loading document");
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Field;
    use crate::error::SpecError;
    use crate::kind::FieldKind;

    struct Hostname;

    impl Schema for Hostname {
        const NAME: &'static str = "Hostname";

        fn declare(object: &mut TypedObject) -> Result<()> {
            object.declare(Field::new("Name", FieldKind::STRING).json("name").required())?;
            Ok(())
        }
    }

    #[test]
    fn test_new_object_uses_name() {
        let object = Hostname::new_object().unwrap();
        assert_eq!(object.schema_name(), "Hostname");
        assert_eq!(object.attributes().count(), 1);
    }

    #[test]
    fn test_parse_text() {
        let object = Hostname::parse(r#"{"name": "box"}"#).unwrap();
        assert_eq!(object.value("Name").and_then(|v| v.as_str()), Some("box"));
    }

    #[test]
    fn test_parse_malformed_text() {
        assert!(matches!(
            Hostname::parse("{not json"),
            Err(SpecError::SerializationError(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let object = Hostname::from_reader(&b"{\"name\": \"r\"}"[..]).unwrap();
        assert!(object.is_valid());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Hostname::from_file(dir.path().join("absent.json")),
            Err(SpecError::IoError(_))
        ));
    }

    #[test]
    fn test_from_json_with_permissive() {
        let object =
            Hostname::from_json_with(serde_json::json!({"name": 1}), LoadOptions::permissive())
                .unwrap();
        assert!(!object.is_valid());
    }
}
