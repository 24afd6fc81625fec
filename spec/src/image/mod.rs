//! OCI image-spec v1 documents.

pub mod annotations;
pub mod config;
pub mod descriptor;
pub mod index;
pub mod layout;
pub mod manifest;
pub mod mediatype;

pub use config::{History, Image, ImageConfig, RootFS};
pub use descriptor::{Descriptor, Platform};
pub use index::Index;
pub use layout::{ImageLayout, IMAGE_LAYOUT_FILE, IMAGE_LAYOUT_VERSION};
pub use manifest::Manifest;

use once_cell::sync::Lazy;
use ocispec_core::{Result, SpecError, TypedObject, Value};
use regex::Regex;

use mediatype::CUSTOM_MEDIA_TYPE_PATTERN;

static CUSTOM_MEDIA_TYPE: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(CUSTOM_MEDIA_TYPE_PATTERN));

fn is_custom(media_type: &str) -> Result<bool> {
    CUSTOM_MEDIA_TYPE
        .as_ref()
        .map(|pattern| pattern.is_match(media_type))
        .map_err(|e| SpecError::InvalidSchema(e.to_string()))
}

/// Check the media types of a list of descriptors.
///
/// Registered and vendor types pass; anything else fails the owning schema.
pub(crate) fn check_media_types(
    schema: &str,
    descriptors: Option<&Value>,
    registered: &[&str],
) -> Result<()> {
    for media_type in media_types(descriptors) {
        if registered.contains(&media_type) || is_custom(media_type)? {
            continue;
        }
        return Err(SpecError::CrossFieldValidation {
            schema: schema.to_string(),
            message: format!("media type {} is not valid here", media_type),
        });
    }
    Ok(())
}

/// Warn about vendor media types missing from `registered`.
pub(crate) fn warn_unregistered(schema: &str, descriptors: Option<&Value>, registered: &[&str]) {
    for media_type in media_types(descriptors) {
        if !registered.contains(&media_type) && matches!(is_custom(media_type), Ok(true)) {
            tracing::warn!(schema, media_type, "Media type is valid, but not registered");
        }
    }
}

fn media_types(descriptors: Option<&Value>) -> impl Iterator<Item = &str> {
    descriptors
        .and_then(Value::as_sequence)
        .unwrap_or_default()
        .iter()
        .filter_map(media_type_of)
}

fn media_type_of(descriptor: &Value) -> Option<&str> {
    descriptor
        .as_object()
        .and_then(|object: &TypedObject| object.value("MediaType"))
        .and_then(Value::as_str)
}
