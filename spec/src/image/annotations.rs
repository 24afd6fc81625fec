//! Pre-defined annotation keys (`org.opencontainers.image.*`).

/// Date and time the image was built (RFC 3339).
pub const ANNOTATION_CREATED: &str = "org.opencontainers.image.created";

/// Contact details of the people or organization responsible for the image.
pub const ANNOTATION_AUTHORS: &str = "org.opencontainers.image.authors";

/// URL to find more information on the image.
pub const ANNOTATION_URL: &str = "org.opencontainers.image.url";

/// URL to get documentation on the image.
pub const ANNOTATION_DOCUMENTATION: &str = "org.opencontainers.image.documentation";

/// URL to get source code for building the image.
pub const ANNOTATION_SOURCE: &str = "org.opencontainers.image.source";

/// Version of the packaged software.
pub const ANNOTATION_VERSION: &str = "org.opencontainers.image.version";

/// Source control revision identifier for the packaged software.
pub const ANNOTATION_REVISION: &str = "org.opencontainers.image.revision";

/// Name of the distributing entity.
pub const ANNOTATION_VENDOR: &str = "org.opencontainers.image.vendor";

/// License(s) under which contained software is distributed, as an SPDX expression.
pub const ANNOTATION_LICENSES: &str = "org.opencontainers.image.licenses";

/// Name of the reference for a target.
pub const ANNOTATION_REF_NAME: &str = "org.opencontainers.image.ref.name";

/// Human-readable title of the image.
pub const ANNOTATION_TITLE: &str = "org.opencontainers.image.title";

/// Human-readable description of the software packaged in the image.
pub const ANNOTATION_DESCRIPTION: &str = "org.opencontainers.image.description";
