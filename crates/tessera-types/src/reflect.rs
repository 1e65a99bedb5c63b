//! Reflection queries.
//!
//! Every query is total: asking a kind for something it does not have
//! yields `None` (or 0 for `arg_count`), never a panic.

use crate::desc::{ClassDesc, EnumDesc, TypeDesc, TypeId};
use crate::table::TypeTable;
use crate::value::{Dynamic, GlobalStore};

impl TypeTable {
    fn class_of(&self, ty: TypeId) -> Option<&ClassDesc> {
        match self.get(ty)? {
            TypeDesc::Object(class) => self.get_class(*class),
            _ => None,
        }
    }

    fn enum_of(&self, ty: TypeId) -> Option<&EnumDesc> {
        match self.get(ty)? {
            TypeDesc::Enum(e) => self.get_enum(*e),
            _ => None,
        }
    }

    /// Nominal name of an object, enum or abstract type.
    pub fn type_name(&self, ty: TypeId) -> Option<&str> {
        match self.get(ty)? {
            TypeDesc::Object(_) => self.class_of(ty).map(|c| self.name(c.name)),
            TypeDesc::Enum(_) => self.enum_of(ty)?.name.map(|n| self.name(n)),
            TypeDesc::Abstract(name) => Some(self.name(*name)),
            _ => None,
        }
    }

    /// Construct names of an enum, in declaration order.
    pub fn enum_constructs(&self, ty: TypeId) -> Option<Vec<&str>> {
        let e = self.enum_of(ty)?;
        Some(e.constructs.iter().map(|c| self.name(c.name)).collect())
    }

    /// Argument types of construct `index` of an enum.
    pub fn construct_args(&self, ty: TypeId, index: usize) -> Option<&[TypeId]> {
        self.enum_of(ty)?
            .constructs
            .get(index)
            .map(|c| c.args.as_slice())
    }

    /// Arity of a function type; 0 for every other kind.
    pub fn arg_count(&self, ty: TypeId) -> usize {
        match self.get(ty) {
            Some(TypeDesc::Function(sig)) => sig.args.len(),
            _ => 0,
        }
    }

    /// Instance field names of an object type, inherited first, in layout order.
    ///
    /// A hash missing from the field registry renders as its hex value.
    pub fn instance_fields(&self, ty: TypeId) -> Option<Vec<String>> {
        let class = self.class_of(ty)?;
        Some(
            class
                .runtime_fields
                .iter()
                .map(|f| match self.field_names().name_of(f.hash) {
                    Some(name) => name.to_owned(),
                    None => f.hash.to_string(),
                })
                .collect(),
        )
    }

    /// Field names of a structural record, in declaration order.
    pub fn virtual_fields(&self, ty: TypeId) -> Option<Vec<&str>> {
        match self.get(ty)? {
            TypeDesc::Virtual(virt) => Some(
                self.get_virtual(*virt)?
                    .fields
                    .iter()
                    .map(|f| self.name(f.name))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Declared parent of an object type.
    pub fn super_type(&self, ty: TypeId) -> Option<TypeId> {
        self.class_of(ty)?.super_type
    }

    /// Current value of the static slot of an object or enum type.
    ///
    /// `None` for other kinds, types without a slot, and empty slots.
    pub fn static_value<'g>(&self, ty: TypeId, globals: &'g GlobalStore) -> Option<&'g Dynamic> {
        let slot = match self.get(ty)? {
            TypeDesc::Object(_) => self.class_of(ty)?.global,
            TypeDesc::Enum(_) => self.enum_of(ty)?.global,
            _ => None,
        }?;
        globals.get(slot)
    }
}
