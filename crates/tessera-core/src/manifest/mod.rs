//! Type manifests: declarative descriptions of a type table.
//!
//! A manifest names every type under a local key and refers to other types
//! by key. It is the fixture format for tests and the input of the CLI;
//! `tessera-types` links it into an immutable type table.
//!
//! Two encodings: JSON (internally tagged by `kind`) and a compact postcard
//! blob for tooling.

mod binary;
mod json;
mod types;


pub use json::ManifestError;
pub use types::{ConstructSpec, FieldSpec, TypeManifest, TypeSpec};
