//! Invariant checks excluded from coverage reports.
//!
//! Every handle stored in a published table was validated by the builder, so
//! a lookup miss here means a handle was carried over from another table.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::desc::{ClassDesc, ClassId, TypeDesc, TypeId, VirtualDesc, VirtualId};
use crate::table::TypeTable;

impl TypeTable {
    /// Descriptor for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this table.
    pub fn desc(&self, id: TypeId) -> &TypeDesc {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeTable: type {id} not found \
                 (handles must come from the table that issued them)"
            )
        })
    }

    pub fn class(&self, id: ClassId) -> &ClassDesc {
        self.get_class(id).unwrap_or_else(|| {
            panic!(
                "TypeTable: class {} not found \
                 (handles must come from the table that issued them)",
                id.0
            )
        })
    }

    pub fn virtual_desc(&self, id: VirtualId) -> &VirtualDesc {
        self.get_virtual(id).unwrap_or_else(|| {
            panic!(
                "TypeTable: virtual {} not found \
                 (handles must come from the table that issued them)",
                id.0
            )
        })
    }
}
