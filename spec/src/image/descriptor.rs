//! Content descriptors and platform selectors.

use ocispec_core::{Field, FieldKind, Result, Schema, SpecError, TypedObject, Value};

use super::mediatype::MEDIA_TYPE_PATTERN;
use crate::digest::{Digest, DIGEST_PATTERN};

/// Describes the disposition of targeted content.
pub struct Descriptor;

impl Schema for Descriptor {
    const NAME: &'static str = "Descriptor";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("MediaType", FieldKind::STRING)
                    .json("mediaType")
                    .pattern(MEDIA_TYPE_PATTERN)
                    .required(),
            )?
            .declare(
                Field::new("Digest", FieldKind::wrapped::<Digest>())
                    .json("digest")
                    .pattern(DIGEST_PATTERN)
                    .required(),
            )?
            .declare(Field::new("Size", FieldKind::INTEGER).json("size").required())?
            .declare(Field::new("URLs", FieldKind::strings()).json("urls").omit_empty())?
            .declare(Field::new("Annotations", FieldKind::Map).json("annotations").omit_empty())?
            .declare(
                Field::new("Platform", FieldKind::object::<Platform>())
                    .json("platform")
                    .omit_empty(),
            )?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        if let Some(size) = object.value("Size").and_then(Value::as_i64) {
            if size < 0 {
                return Err(SpecError::CrossFieldValidation {
                    schema: Self::NAME.to_string(),
                    message: format!("size must not be negative, got {}", size),
                });
            }
        }
        Ok(())
    }
}

impl Descriptor {
    /// Descriptor for a blob of `size` bytes.
    pub fn create(media_type: &str, digest: &Digest, size: i64) -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object
            .set("MediaType", media_type)?
            .set("Digest", digest.to_string())?
            .set("Size", size)?;
        object.validate()?;
        Ok(object)
    }
}

/// Minimum runtime requirements of an image.
pub struct Platform;

impl Schema for Platform {
    const NAME: &'static str = "Platform";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Architecture", FieldKind::STRING)
                    .json("architecture")
                    .required(),
            )?
            .declare(Field::new("OS", FieldKind::STRING).json("os").required())?
            .declare(Field::new("OSVersion", FieldKind::STRING).json("os.version").omit_empty())?
            .declare(Field::new("OSFeatures", FieldKind::strings()).json("os.features").omit_empty())?
            .declare(Field::new("Variant", FieldKind::STRING).json("variant").omit_empty())?;
        Ok(())
    }
}
