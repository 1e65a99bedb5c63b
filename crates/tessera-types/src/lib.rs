#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Dynamic type descriptors for the tessera VM.
//!
//! Every type the bytecode can reference lives in a [`TypeTable`] arena and
//! is addressed by a [`TypeId`] handle. On top of the arena:
//! - layout: byte width and padding per kind ([`Layout`])
//! - equality, dynamism and cast compatibility (`same_type`, `is_dynamic`,
//!   `safe_cast`, with optional [`CastTracer`] instrumentation)
//! - naming and reflection (`type_str`, `type_name`, `instance_fields`, ...)
//! - linking a [`TypeManifest`](tessera_core::TypeManifest) into a table

mod cast;
mod desc;
mod equality;
mod invariants;
mod kind;
mod layout;
mod link;
mod naming;
mod reflect;
mod table;
mod trace;
mod value;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod cast_tests;
#[cfg(test)]
mod kind_tests;
#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod reflect_tests;

pub use desc::{
    ClassDesc, ClassId, EnumConstruct, EnumDesc, EnumId, FunctionSig, GlobalId, ObjField,
    RuntimeField, TypeDesc, TypeId, VirtualDesc, VirtualId,
};
pub use kind::{KIND_COUNT, TypeKind};
pub use layout::{Layout, LayoutError};
pub use link::{LinkError, Linked};
pub use naming::TypeDisplay;
pub use table::{TableError, TypeTable, TypeTableBuilder};
pub use trace::{CastRule, CastTracer, NoopTracer, PrintTracer};
pub use value::{Dynamic, GlobalStore, Payload};
