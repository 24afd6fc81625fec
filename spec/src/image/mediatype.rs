//! Media types of OCI image-spec v1 content.

/// Content descriptor.
pub const MEDIA_TYPE_DESCRIPTOR: &str = "application/vnd.oci.descriptor.v1+json";

/// Image layout header (`oci-layout`).
pub const MEDIA_TYPE_LAYOUT_HEADER: &str = "application/vnd.oci.layout.header.v1+json";

pub const MEDIA_TYPE_IMAGE_MANIFEST: &str = "application/vnd.oci.image.manifest.v1+json";

pub const MEDIA_TYPE_IMAGE_INDEX: &str = "application/vnd.oci.image.index.v1+json";

pub const MEDIA_TYPE_IMAGE_CONFIG: &str = "application/vnd.oci.image.config.v1+json";

// Tar layers
pub const MEDIA_TYPE_IMAGE_LAYER: &str = "application/vnd.oci.image.layer.v1.tar";
pub const MEDIA_TYPE_IMAGE_LAYER_GZIP: &str = "application/vnd.oci.image.layer.v1.tar+gzip";
pub const MEDIA_TYPE_IMAGE_LAYER_ZSTD: &str = "application/vnd.oci.image.layer.v1.tar+zstd";
pub const MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE: &str =
    "application/vnd.oci.image.layer.nondistributable.v1.tar";
pub const MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_GZIP: &str =
    "application/vnd.oci.image.layer.nondistributable.v1.tar+gzip";
pub const MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZSTD: &str =
    "application/vnd.oci.image.layer.nondistributable.v1.tar+zstd";

// ZFS layers
pub const MEDIA_TYPE_IMAGE_LAYER_ZFS: &str = "application/vnd.oci.image.layer.v1.zfs";
pub const MEDIA_TYPE_IMAGE_LAYER_ZFS_XZ: &str = "application/vnd.oci.image.layer.v1.zfs+xz";
pub const MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZFS: &str =
    "application/vnd.oci.image.layer.nondistributable.v1.zfs";
pub const MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZFS_XZ: &str =
    "application/vnd.oci.image.layer.nondistributable.v1.zfs+xz";

/// Media types a manifest accepts for its layers without a warning.
///
/// The config type is listed for compatibility with manifests that reference
/// the config blob as a layer.
pub const LAYER_MEDIA_TYPES: &[&str] = &[
    MEDIA_TYPE_IMAGE_LAYER,
    MEDIA_TYPE_IMAGE_LAYER_GZIP,
    MEDIA_TYPE_IMAGE_LAYER_ZSTD,
    MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE,
    MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_GZIP,
    MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZSTD,
    MEDIA_TYPE_IMAGE_LAYER_ZFS,
    MEDIA_TYPE_IMAGE_LAYER_ZFS_XZ,
    MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZFS,
    MEDIA_TYPE_IMAGE_LAYER_NON_DISTRIBUTABLE_ZFS_XZ,
    MEDIA_TYPE_IMAGE_CONFIG,
];

/// Media types an index accepts for its manifests without a warning.
pub const INDEX_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_IMAGE_MANIFEST, MEDIA_TYPE_IMAGE_INDEX];

/// RFC 6838 shaped `type/subtype`.
pub const MEDIA_TYPE_PATTERN: &str =
    r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}$";

/// Vendor media types outside the registered set.
pub const CUSTOM_MEDIA_TYPE_PATTERN: &str = r"^application/vnd\.[A-Za-z0-9.+-]+\.[A-Za-z0-9.+-]+$";
