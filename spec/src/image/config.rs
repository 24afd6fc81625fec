//! Image configuration (`application/vnd.oci.image.config.v1+json`).

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

use crate::digest::Digest;

/// Execution parameters used as a base when running a container.
pub struct ImageConfig;

impl Schema for ImageConfig {
    const NAME: &'static str = "ImageConfig";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("User", FieldKind::STRING).json("User").omit_empty())?
            .declare(Field::new("ExposedPorts", FieldKind::Map).json("ExposedPorts").omit_empty())?
            .declare(Field::new("Env", FieldKind::strings()).json("Env").omit_empty())?
            .declare(Field::new("Entrypoint", FieldKind::strings()).json("Entrypoint").omit_empty())?
            .declare(Field::new("Cmd", FieldKind::strings()).json("Cmd").omit_empty())?
            .declare(Field::new("Volumes", FieldKind::Map).json("Volumes").omit_empty())?
            .declare(Field::new("WorkingDir", FieldKind::STRING).json("WorkingDir").omit_empty())?
            .declare(Field::new("Labels", FieldKind::Map).json("Labels").omit_empty())?
            .declare(Field::new("StopSignal", FieldKind::STRING).json("StopSignal").omit_empty())?;
        Ok(())
    }
}

/// Layer content addresses referenced by the image config.
pub struct RootFS;

impl Schema for RootFS {
    const NAME: &'static str = "RootFS";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Type", FieldKind::STRING)
                    .json("type")
                    .pattern("^layers$")
                    .required(),
            )?
            .declare(
                Field::new("DiffIDs", FieldKind::sequence_of(FieldKind::wrapped::<Digest>()))
                    .json("diff_ids")
                    .required(),
            )?;
        Ok(())
    }
}

/// History of one layer.
pub struct History;

impl Schema for History {
    const NAME: &'static str = "History";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Created", FieldKind::Timestamp).json("created").omit_empty())?
            .declare(Field::new("CreatedBy", FieldKind::STRING).json("created_by").omit_empty())?
            .declare(Field::new("Author", FieldKind::STRING).json("author").omit_empty())?
            .declare(Field::new("Comment", FieldKind::STRING).json("comment").omit_empty())?
            .declare(Field::new("EmptyLayer", FieldKind::BOOLEAN).json("empty_layer").omit_empty())?;
        Ok(())
    }
}

/// The JSON structure describing an image's root filesystem and execution
/// parameters.
pub struct Image;

impl Schema for Image {
    const NAME: &'static str = "Image";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Created", FieldKind::Timestamp).json("created").omit_empty())?
            .declare(Field::new("Author", FieldKind::STRING).json("author").omit_empty())?
            .declare(
                Field::new("Architecture", FieldKind::STRING)
                    .json("architecture")
                    .required(),
            )?
            .declare(Field::new("OS", FieldKind::STRING).json("os").required())?
            .declare(
                Field::new("Config", FieldKind::object::<ImageConfig>())
                    .json("config")
                    .omit_empty(),
            )?
            .declare(
                Field::new("RootFS", FieldKind::object::<RootFS>())
                    .json("rootfs")
                    .required(),
            )?
            .declare(
                Field::new("History", FieldKind::objects::<History>())
                    .json("history")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocispec_core::{KeyStyle, SpecError, Value};
    use serde_json::json;

    const DIFF_ID: &str =
        "sha256:c6f988f4874bb0add23a778f753c65efe992244e148a1d2ec2a8b664fb66bbd1";

    fn image() -> serde_json::Value {
        json!({
            "created": "2015-10-31T22:22:56.015925234Z",
            "author": "Alyssa P. Hacker <alyspdev@example.com>",
            "architecture": "amd64",
            "os": "linux",
            "config": {
                "User": "alice",
                "ExposedPorts": {"8080/tcp": {}},
                "Env": ["PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin"],
                "Entrypoint": ["/bin/my-app-binary"],
                "Cmd": ["--foreground", "--config", "/etc/my-app.d/default.cfg"],
                "Volumes": {"/var/job-result-data": {}},
                "WorkingDir": "/home/alice",
                "Labels": {"com.example.project.git.url": "https://example.com/project.git"}
            },
            "rootfs": {"diff_ids": [DIFF_ID], "type": "layers"},
            "history": [
                {
                    "created": "2015-10-31T22:22:54.690851953Z",
                    "created_by": "/bin/sh -c #(nop) ADD file:a3bc1e842b69636f9df5256c49c5374fb4eef1e281fe3f282c65fb853ee171c5 in /"
                },
                {
                    "created": "2015-10-31T22:22:55.613815829Z",
                    "created_by": "/bin/sh -c #(nop) CMD [\"sh\"]",
                    "empty_layer": true
                }
            ]
        })
    }

    #[test]
    fn test_image_load() {
        let object = Image::from_json(image()).unwrap();
        let created = object.value("Created").and_then(Value::as_timestamp).unwrap();
        assert_eq!(created.timestamp(), 1446330176);

        let history = object.value("History").and_then(Value::as_sequence).unwrap();
        assert_eq!(
            history[1].as_object().unwrap().value("EmptyLayer"),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn test_timestamps_serialize_at_microseconds() {
        let map = Image::from_json(image()).unwrap().to_map(KeyStyle::Wire).unwrap();
        assert_eq!(map["created"], json!("2015-10-31T22:22:56.015925000Z"));
        assert_eq!(map["history"][0]["created"], json!("2015-10-31T22:22:54.690851000Z"));
    }

    #[test]
    fn test_rootfs_type_must_be_layers() {
        let result = RootFS::from_json(json!({"type": "tarball", "diff_ids": [DIFF_ID]}));
        assert!(matches!(result, Err(SpecError::PatternMismatch { .. })));
    }

    #[test]
    fn test_rootfs_diff_ids_are_digests() {
        let result = RootFS::from_json(json!({"type": "layers", "diff_ids": ["sha256:abc"]}));
        assert!(matches!(result, Err(SpecError::InvalidValue { .. })));
    }

    #[test]
    fn test_image_requires_rootfs() {
        let mut content = image();
        content.as_object_mut().unwrap().remove("rootfs");
        assert!(matches!(
            Image::from_json(content),
            Err(SpecError::RequiredFieldMissing { ref field, .. }) if field == "RootFS"
        ));
    }

    #[test]
    fn test_config_unknown_key() {
        let result = ImageConfig::from_json(json!({"Healthcheck": {}}));
        assert!(matches!(result, Err(SpecError::UnknownField { .. })));
    }
}
