//! The descriptor arena.
//!
//! Construction is two-phase. A [`TypeTableBuilder`] accepts descriptors in
//! any order (handles may be reserved and defined later), then `build()`
//! validates every handle, resolves `super` links, flattens runtime field
//! tables and publishes an immutable [`TypeTable`]. After that point nothing
//! mutates a descriptor, so a table can be shared freely across threads.

use std::collections::HashMap;

use tessera_core::{FieldRegistry, HashCollision, Interner, Symbol};

use crate::desc::{
    ClassDesc, ClassId, EnumDesc, EnumId, FunctionSig, GlobalId, ObjField, RuntimeField,
    TypeDesc, TypeId, VirtualDesc, VirtualId,
};
use crate::kind::TypeKind;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("type {0} was reserved but never defined")]
    Undefined(TypeId),
    #[error("type {0} is already defined")]
    AlreadyDefined(TypeId),
    #[error("unknown type handle {0}")]
    UnknownType(TypeId),
    #[error("unknown class handle {0:?}")]
    UnknownClass(ClassId),
    #[error("unknown virtual handle {0:?}")]
    UnknownVirtual(VirtualId),
    #[error("unknown enum handle {0:?}")]
    UnknownEnum(EnumId),
    #[error("unknown static slot {0:?}")]
    UnknownGlobal(GlobalId),
    #[error("super type {super_type} of class `{class}` is not an object type")]
    SuperNotObject { class: String, super_type: TypeId },
    #[error("class `{class}` inherits from itself")]
    InheritanceCycle { class: String },
    #[error("type {0} contains itself without passing through an object, record or enum")]
    StructuralCycle(TypeId),
    #[error(transparent)]
    FieldHash(#[from] HashCollision),
}

/// Immutable, fully resolved set of type descriptors.
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: Vec<TypeDesc>,
    classes: Vec<ClassDesc>,
    virtuals: Vec<VirtualDesc>,
    enums: Vec<EnumDesc>,
    global_count: u32,
    names: Interner,
    fields: FieldRegistry,
    layout: Layout,
}

impl TypeTable {
    pub fn builder() -> TypeTableBuilder {
        TypeTableBuilder::new()
    }

    /// Descriptor for `id`, or `None` if the handle is foreign to this table.
    #[inline]
    pub fn get(&self, id: TypeId) -> Option<&TypeDesc> {
        self.types.get(id.index())
    }

    #[inline]
    pub fn get_class(&self, id: ClassId) -> Option<&ClassDesc> {
        self.classes.get(id.index())
    }

    #[inline]
    pub fn get_virtual(&self, id: VirtualId) -> Option<&VirtualDesc> {
        self.virtuals.get(id.index())
    }

    #[inline]
    pub fn get_enum(&self, id: EnumId) -> Option<&EnumDesc> {
        self.enums.get(id.index())
    }

    /// Resolve an interned name.
    pub fn name(&self, sym: Symbol) -> &str {
        self.names.resolve(sym)
    }

    /// Field-hash registry used to recover field names.
    pub fn field_names(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of static slots referenced by this table.
    pub fn global_count(&self) -> usize {
        self.global_count as usize
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDesc)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, desc)| (TypeId(i as u32), desc))
    }

    #[inline]
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.desc(id).kind()
    }

    /// Byte width of a `kind` value under this table's layout.
    #[inline]
    pub fn size_of(&self, kind: TypeKind) -> usize {
        self.layout.size_of(kind)
    }

    /// Padding needed before placing a value of type `ty` at `offset`.
    pub fn pad_size(&self, offset: usize, ty: TypeId) -> usize {
        self.layout.pad_size(offset, self.kind(ty))
    }

    /// Whether values of `ty` carry a runtime type tag.
    #[inline]
    pub fn is_dynamic(&self, ty: TypeId) -> bool {
        self.kind(ty).is_dynamic()
    }

    /// Copy of this table with every enum descriptor dropped, leaving
    /// `Enum` types with dangling handles.
    #[cfg(test)]
    pub(crate) fn without_enums(&self) -> Self {
        Self {
            enums: Vec::new(),
            ..self.clone()
        }
    }
}

/// Collects descriptors and links them into a [`TypeTable`].
#[derive(Debug, Default)]
pub struct TypeTableBuilder {
    types: Vec<Option<TypeDesc>>,
    classes: Vec<ClassDesc>,
    virtuals: Vec<VirtualDesc>,
    enums: Vec<EnumDesc>,
    global_count: u32,
    names: Interner,
    fields: FieldRegistry,
    layout: Layout,
    builtins: HashMap<TypeKind, TypeId>,
}

impl TypeTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target layout for size and padding queries.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.names.intern(name)
    }

    /// Build a named field of type `ty`, registering its hash.
    pub fn field(&mut self, name: &str, ty: TypeId) -> Result<ObjField, TableError> {
        let hash = self.fields.register(name)?;
        Ok(ObjField {
            name: self.names.intern(name),
            hash,
            ty,
        })
    }

    /// Add a descriptor. Structurally equal descriptors still get distinct handles.
    pub fn add(&mut self, desc: TypeDesc) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(Some(desc));
        id
    }

    /// Reserve a handle to be filled by [`define`](Self::define).
    pub fn reserve(&mut self) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(None);
        id
    }

    pub fn define(&mut self, id: TypeId, desc: TypeDesc) -> Result<(), TableError> {
        match self.types.get_mut(id.index()) {
            Some(slot @ None) => {
                *slot = Some(desc);
                Ok(())
            }
            Some(Some(_)) => Err(TableError::AlreadyDefined(id)),
            None => Err(TableError::UnknownType(id)),
        }
    }

    /// Shared descriptor for a payload-free kind.
    ///
    /// # Panics
    /// Panics if `kind` needs a payload.
    pub fn builtin(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.builtins.get(&kind) {
            return id;
        }
        let desc = TypeDesc::from_kind(kind)
            .unwrap_or_else(|| panic!("{kind:?} is not a payload-free kind"));
        let id = self.add(desc);
        self.builtins.insert(kind, id);
        id
    }

    pub fn function(&mut self, args: impl Into<Vec<TypeId>>, ret: TypeId) -> TypeId {
        self.add(TypeDesc::Function(FunctionSig::new(args, ret)))
    }

    pub fn add_class(&mut self, class: ClassDesc) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(class);
        id
    }

    /// Add a class and the `Object` type that refers to it.
    pub fn class(&mut self, class: ClassDesc) -> TypeId {
        let class = self.add_class(class);
        self.add(TypeDesc::Object(class))
    }

    pub fn add_virtual(&mut self, fields: impl Into<Vec<ObjField>>) -> VirtualId {
        let id = VirtualId(self.virtuals.len() as u32);
        self.virtuals.push(VirtualDesc {
            fields: fields.into(),
        });
        id
    }

    /// Add a structural record and the `Virtual` type that refers to it.
    pub fn virtual_type(&mut self, fields: impl Into<Vec<ObjField>>) -> TypeId {
        let id = self.add_virtual(fields);
        self.add(TypeDesc::Virtual(id))
    }

    pub fn abstract_type(&mut self, name: &str) -> TypeId {
        let sym = self.names.intern(name);
        self.add(TypeDesc::Abstract(sym))
    }

    pub fn add_enum(&mut self, desc: EnumDesc) -> EnumId {
        let id = EnumId(self.enums.len() as u32);
        self.enums.push(desc);
        id
    }

    /// Add an enum and the `Enum` type that refers to it.
    pub fn enum_type(&mut self, desc: EnumDesc) -> TypeId {
        let id = self.add_enum(desc);
        self.add(TypeDesc::Enum(id))
    }

    pub fn reference(&mut self, inner: TypeId) -> TypeId {
        self.add(TypeDesc::Ref(inner))
    }

    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        self.add(TypeDesc::Nullable(inner))
    }

    /// Allocate a static slot.
    pub fn global(&mut self) -> GlobalId {
        let id = GlobalId(self.global_count);
        self.global_count += 1;
        id
    }

    /// Validate and publish the table.
    pub fn build(mut self) -> Result<TypeTable, TableError> {
        let types = self
            .types
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.clone().ok_or(TableError::Undefined(TypeId(i as u32))))
            .collect::<Result<Vec<_>, _>>()?;

        self.check_handles(&types)?;
        check_structural_cycles(&types)?;
        self.resolve_runtime_fields(&types)?;

        Ok(TypeTable {
            types,
            classes: self.classes,
            virtuals: self.virtuals,
            enums: self.enums,
            global_count: self.global_count,
            names: self.names,
            fields: self.fields,
            layout: self.layout,
        })
    }

    fn check_handles(&self, types: &[TypeDesc]) -> Result<(), TableError> {
        let ty = |id: TypeId| {
            if id.index() < types.len() {
                Ok(())
            } else {
                Err(TableError::UnknownType(id))
            }
        };
        let global = |id: Option<GlobalId>| match id {
            Some(g) if g.0 >= self.global_count => Err(TableError::UnknownGlobal(g)),
            _ => Ok(()),
        };

        for desc in types {
            match desc {
                TypeDesc::Function(sig) => {
                    sig.args.iter().copied().try_for_each(ty)?;
                    ty(sig.ret)?;
                }
                TypeDesc::Object(class) if class.index() >= self.classes.len() => {
                    return Err(TableError::UnknownClass(*class));
                }
                TypeDesc::Virtual(virt) if virt.index() >= self.virtuals.len() => {
                    return Err(TableError::UnknownVirtual(*virt));
                }
                TypeDesc::Enum(e) if e.index() >= self.enums.len() => {
                    return Err(TableError::UnknownEnum(*e));
                }
                TypeDesc::Ref(inner) | TypeDesc::Nullable(inner) => ty(*inner)?,
                _ => {}
            }
        }

        for class in &self.classes {
            class.super_type.map(ty).transpose()?;
            class.fields.iter().try_for_each(|f| ty(f.ty))?;
            global(class.global)?;
        }
        for virt in &self.virtuals {
            virt.fields.iter().try_for_each(|f| ty(f.ty))?;
        }
        for e in &self.enums {
            e.constructs
                .iter()
                .flat_map(|c| c.args.iter().copied())
                .try_for_each(ty)?;
            global(e.global)?;
        }
        Ok(())
    }

    fn parent_class(
        &self,
        types: &[TypeDesc],
        class: ClassId,
    ) -> Result<Option<ClassId>, TableError> {
        let Some(super_type) = self.classes[class.index()].super_type else {
            return Ok(None);
        };
        match &types[super_type.index()] {
            TypeDesc::Object(parent) => Ok(Some(*parent)),
            _ => Err(TableError::SuperNotObject {
                class: self.class_name(class),
                super_type,
            }),
        }
    }

    fn class_name(&self, class: ClassId) -> String {
        self.names
            .resolve(self.classes[class.index()].name)
            .to_owned()
    }

    /// Flatten inherited and own fields of every class, parents first.
    fn resolve_runtime_fields(&mut self, types: &[TypeDesc]) -> Result<(), TableError> {
        let mut resolved = vec![false; self.classes.len()];

        for start in 0..self.classes.len() {
            let mut chain: Vec<ClassId> = Vec::new();
            let mut cursor = Some(ClassId(start as u32));
            while let Some(class) = cursor {
                if resolved[class.index()] {
                    break;
                }
                if chain.contains(&class) {
                    return Err(TableError::InheritanceCycle {
                        class: self.class_name(class),
                    });
                }
                chain.push(class);
                cursor = self.parent_class(types, class)?;
            }

            for &class in chain.iter().rev() {
                let mut runtime = match self.parent_class(types, class)? {
                    Some(parent) => self.classes[parent.index()].runtime_fields.clone(),
                    None => Vec::new(),
                };
                let desc = &mut self.classes[class.index()];
                runtime.extend(desc.fields.iter().map(|f| RuntimeField {
                    hash: f.hash,
                    ty: f.ty,
                }));
                desc.runtime_fields = runtime;
                resolved[class.index()] = true;
            }
        }
        Ok(())
    }
}

/// Types a descriptor is built from, when comparing or rendering it recurses
/// into them. Objects, records and enums stop recursion and have none.
fn operands(desc: &TypeDesc) -> Vec<TypeId> {
    match desc {
        TypeDesc::Function(sig) => sig.args.iter().copied().chain([sig.ret]).collect(),
        _ => desc.tparam().into_iter().collect(),
    }
}

/// Reject cycles made only of refs, nullables and function signatures.
///
/// Iterative depth-first search; a handle reached again while still open
/// closes a cycle.
fn check_structural_cycles(types: &[TypeDesc]) -> Result<(), TableError> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        New,
        Open,
        Done,
    }

    let mut marks = vec![Mark::New; types.len()];
    for root in 0..types.len() {
        if marks[root] != Mark::New {
            continue;
        }
        marks[root] = Mark::Open;
        let mut stack = vec![(root, operands(&types[root]), 0)];

        while let Some((node, edges, next)) = stack.last_mut() {
            let Some(&child) = edges.get(*next) else {
                marks[*node] = Mark::Done;
                stack.pop();
                continue;
            };
            *next += 1;

            let index = child.index();
            match marks[index] {
                Mark::Open => return Err(TableError::StructuralCycle(child)),
                Mark::Done => {}
                Mark::New => {
                    marks[index] = Mark::Open;
                    stack.push((index, operands(&types[index]), 0));
                }
            }
        }
    }
    Ok(())
}
