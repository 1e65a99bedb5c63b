//! Dynamic values and static storage slots.
//!
//! Object allocation belongs to the VM; these types model only what
//! reflection and `type_check` need to see: a value tagged with its type,
//! and the per-class (or per-enum) static cells a descriptor points at.

use crate::desc::{GlobalId, TypeId};
use crate::table::TypeTable;

/// Untyped view of a value's contents.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Unit,
    Int(i32),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    /// Reference to a VM-owned object, by opaque address.
    Object(u64),
}

/// A value carrying its own type tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Dynamic {
    pub ty: TypeId,
    pub payload: Payload,
}

impl Dynamic {
    pub fn new(ty: TypeId, payload: Payload) -> Self {
        Self { ty, payload }
    }
}

/// Static slots, indexed by [`GlobalId`]. Each slot holds a value or null.
#[derive(Clone, Debug, Default)]
pub struct GlobalStore {
    slots: Vec<Option<Dynamic>>,
}

impl GlobalStore {
    /// A store with `count` empty slots.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// A store with one empty slot per static slot of `table`.
    pub fn for_table(table: &TypeTable) -> Self {
        Self::new(table.global_count())
    }

    /// Current value of `slot`. `None` for empty or out-of-range slots.
    pub fn get(&self, slot: GlobalId) -> Option<&Dynamic> {
        self.slots.get(slot.index())?.as_ref()
    }

    /// Store `value` in `slot`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn set(&mut self, slot: GlobalId, value: Dynamic) -> Option<Dynamic> {
        self.slots[slot.index()].replace(value)
    }

    /// Empty `slot`, returning the previous value.
    pub fn clear(&mut self, slot: GlobalId) -> Option<Dynamic> {
        self.slots.get_mut(slot.index())?.take()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
