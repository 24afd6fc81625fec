//! OCI Spec - Image and Runtime Document Schemas
//!
//! Schemas for the Open Container Initiative image-spec v1 and runtime-spec v1
//! documents, declared on the `ocispec-core` typed attribute framework.
//!
//! # Example
//!
//! ```
//! use ocispec::image::Manifest;
//! use ocispec::{KeyStyle, Schema};
//!
//! let manifest = Manifest::parse(r#"{
//!     "schemaVersion": 2,
//!     "config": {
//!         "mediaType": "application/vnd.oci.image.config.v1+json",
//!         "digest": "sha256:b5b2b2c507a0944348e0303114d8d93aaaa081732b86451d9bce1f432a537bc7",
//!         "size": 7023
//!     },
//!     "layers": [{
//!         "mediaType": "application/vnd.oci.image.layer.v1.tar+gzip",
//!         "digest": "sha256:9834876dcfb05cb167a5c24953eba58c4ac89b1adf57f28f2f9d09af107ee8f0",
//!         "size": 32654
//!     }]
//! }"#).unwrap();
//!
//! let map = manifest.to_map(KeyStyle::Wire).unwrap();
//! assert_eq!(map["schemaVersion"], 2);
//! ```

pub mod digest;
pub mod image;
pub mod runtime;
pub mod version;

pub use digest::{Algorithm, Digest, DigestError};
pub use version::{SchemaVersion, VERSION};

// The framework surface, so catalog users need one dependency.
pub use ocispec_core::{
    Field, FieldKind, JsonStyle, KeyStyle, LoadOptions, Result, Schema, SerializeOptions,
    Shared, SpecError, TypedObject, Value,
};
