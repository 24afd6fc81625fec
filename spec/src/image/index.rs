//! Image index (`application/vnd.oci.image.index.v1+json`).

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

use super::descriptor::Descriptor;
use super::mediatype::INDEX_MEDIA_TYPES;
use crate::version::{SchemaVersion, SCHEMA_VERSION};

/// References manifests for various platforms.
pub struct Index;

impl Schema for Index {
    const NAME: &'static str = "Index";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("schemaVersion", FieldKind::wrapped::<SchemaVersion>()).required(),
            )?
            .declare(
                Field::new("Manifests", FieldKind::objects::<Descriptor>())
                    .json("manifests")
                    .required(),
            )?
            .declare(Field::new("Annotations", FieldKind::Map).json("annotations").omit_empty())?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        super::check_media_types(Self::NAME, object.value("Manifests"), INDEX_MEDIA_TYPES)
    }

    fn advise(object: &TypedObject) {
        super::warn_unregistered(Self::NAME, object.value("Manifests"), INDEX_MEDIA_TYPES);
    }
}

impl Index {
    pub fn create(
        manifests: Vec<TypedObject>,
        annotations: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object
            .set("schemaVersion", SCHEMA_VERSION)?
            .set("Manifests", manifests)?
            .set("Annotations", annotations)?;
        object.validate()?;
        Self::advise(&object);
        Ok(object)
    }
}
