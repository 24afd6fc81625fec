//! The `oci-layout` marker file of an image layout directory.

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

/// File name of the layout marker.
pub const IMAGE_LAYOUT_FILE: &str = "oci-layout";

/// Layout version written by this crate.
pub const IMAGE_LAYOUT_VERSION: &str = "1.0.0";

pub struct ImageLayout;

impl Schema for ImageLayout {
    const NAME: &'static str = "ImageLayout";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object.declare(
            Field::new("Version", FieldKind::STRING)
                .json("imageLayoutVersion")
                .pattern(r"^\d+\.\d+\.\d+$")
                .required(),
        )?;
        Ok(())
    }
}

impl ImageLayout {
    /// Layout marker at [`IMAGE_LAYOUT_VERSION`].
    pub fn create() -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object.set("Version", IMAGE_LAYOUT_VERSION)?;
        Ok(object)
    }
}
