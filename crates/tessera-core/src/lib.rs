//! Core data structures shared by the tessera type system and its tools.
//!
//! - [`Interner`]: deduplicates type and field names into [`Symbol`] handles,
//!   so nominal names compare by identity.
//! - [`FieldHash`] / [`FieldRegistry`]: the field-name hashing service. Field
//!   tables only store hashes; the registry maps them back to names.
//! - [`TypeManifest`]: a declarative, serializable description of a type
//!   table (JSON for humans, postcard for tooling).
//! - [`Colors`]: ANSI palette for CLI output.

mod colors;
mod field_hash;
mod interner;
pub mod manifest;


pub use colors::Colors;
pub use field_hash::{FieldHash, FieldRegistry, HashCollision};
pub use interner::{Interner, Symbol};
pub use manifest::{
    ConstructSpec, FieldSpec, ManifestError, TypeManifest, TypeSpec,
};
