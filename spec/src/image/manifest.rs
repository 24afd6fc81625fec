//! Image manifest (`application/vnd.oci.image.manifest.v1+json`).

use ocispec_core::{Field, FieldKind, Result, Schema, SpecError, TypedObject, Value};

use super::descriptor::Descriptor;
use super::mediatype::{LAYER_MEDIA_TYPES, MEDIA_TYPE_IMAGE_CONFIG};
use crate::version::{SchemaVersion, SCHEMA_VERSION};

/// A single image for a specific architecture and operating system.
pub struct Manifest;

impl Schema for Manifest {
    const NAME: &'static str = "Manifest";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("schemaVersion", FieldKind::wrapped::<SchemaVersion>()).required(),
            )?
            .declare(
                Field::new("Config", FieldKind::object::<Descriptor>())
                    .json("config")
                    .required(),
            )?
            .declare(
                Field::new("Layers", FieldKind::objects::<Descriptor>())
                    .json("layers")
                    .required(),
            )?
            .declare(Field::new("Annotations", FieldKind::Map).json("annotations").omit_empty())?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        let config_type = object
            .value("Config")
            .and_then(Value::as_object)
            .and_then(|config| config.value("MediaType"))
            .and_then(Value::as_str);

        if config_type != Some(MEDIA_TYPE_IMAGE_CONFIG) {
            return Err(SpecError::CrossFieldValidation {
                schema: Self::NAME.to_string(),
                message: format!(
                    "config media type {} is invalid, should be {}",
                    config_type.unwrap_or("<unset>"),
                    MEDIA_TYPE_IMAGE_CONFIG
                ),
            });
        }

        super::check_media_types(Self::NAME, object.value("Layers"), LAYER_MEDIA_TYPES)
    }

    fn advise(object: &TypedObject) {
        super::warn_unregistered(Self::NAME, object.value("Layers"), LAYER_MEDIA_TYPES);
    }
}

impl Manifest {
    /// Manifest at the current schema version.
    pub fn create(
        config: TypedObject,
        layers: Vec<TypedObject>,
        annotations: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object
            .set("schemaVersion", SCHEMA_VERSION)?
            .set("Config", config)?
            .set("Layers", layers)?
            .set("Annotations", annotations)?;
        object.validate()?;
        Self::advise(&object);
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::mediatype::{MEDIA_TYPE_IMAGE_LAYER_GZIP, MEDIA_TYPE_IMAGE_MANIFEST};
    use ocispec_core::KeyStyle;
    use serde_json::json;

    const CONFIG_DIGEST: &str =
        "sha256:b5b2b2c507a0944348e0303114d8d93aaaa081732b86451d9bce1f432a537bc7";
    const LAYER_DIGEST: &str =
        "sha256:9834876dcfb05cb167a5c24953eba58c4ac89b1adf57f28f2f9d09af107ee8f0";

    fn manifest(config_type: &str, layer_type: &str) -> serde_json::Value {
        json!({
            "schemaVersion": 2,
            "config": {"mediaType": config_type, "digest": CONFIG_DIGEST, "size": 7023},
            "layers": [{"mediaType": layer_type, "digest": LAYER_DIGEST, "size": 32654}],
            "annotations": {"com.example.key1": "value1"}
        })
    }

    #[test]
    fn test_valid_manifest() {
        let object =
            Manifest::from_json(manifest(MEDIA_TYPE_IMAGE_CONFIG, MEDIA_TYPE_IMAGE_LAYER_GZIP))
                .unwrap();
        let layers = object.get("Layers").unwrap().unwrap().as_sequence().unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].as_object().unwrap().schema_name(), "Descriptor");
    }

    #[test]
    fn test_wrong_config_media_type() {
        let result =
            Manifest::from_json(manifest(MEDIA_TYPE_IMAGE_MANIFEST, MEDIA_TYPE_IMAGE_LAYER_GZIP));
        assert!(matches!(result, Err(SpecError::CrossFieldValidation { .. })));
    }

    #[test]
    fn test_custom_layer_type_is_accepted() {
        let result = Manifest::from_json(manifest(
            MEDIA_TYPE_IMAGE_CONFIG,
            "application/vnd.example.layer.v1+tar",
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_layer_type_is_rejected() {
        let result = Manifest::from_json(manifest(MEDIA_TYPE_IMAGE_CONFIG, "text/plain"));
        assert!(matches!(result, Err(SpecError::CrossFieldValidation { .. })));
    }

    #[test]
    fn test_schema_version_must_be_two() {
        let mut content = manifest(MEDIA_TYPE_IMAGE_CONFIG, MEDIA_TYPE_IMAGE_LAYER_GZIP);
        content["schemaVersion"] = json!(1);
        assert!(matches!(
            Manifest::from_json(content),
            Err(SpecError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_config() {
        let mut content = manifest(MEDIA_TYPE_IMAGE_CONFIG, MEDIA_TYPE_IMAGE_LAYER_GZIP);
        content.as_object_mut().unwrap().remove("config");
        assert!(matches!(
            Manifest::from_json(content),
            Err(SpecError::RequiredFieldMissing { ref field, .. }) if field == "Config"
        ));
    }

    #[test]
    fn test_create() {
        let config = Descriptor::from_json(json!({
            "mediaType": MEDIA_TYPE_IMAGE_CONFIG,
            "digest": CONFIG_DIGEST,
            "size": 7023
        }))
        .unwrap();
        let layer = Descriptor::from_json(json!({
            "mediaType": MEDIA_TYPE_IMAGE_LAYER_GZIP,
            "digest": LAYER_DIGEST,
            "size": 32654
        }))
        .unwrap();

        let object = Manifest::create(config, vec![layer], None).unwrap();
        let map = object.to_map(KeyStyle::Wire).unwrap();
        assert_eq!(map["schemaVersion"], json!(2));
        assert!(!map.contains_key("annotations"));
        assert_eq!(map["layers"][0]["size"], json!(32654));
    }
}
