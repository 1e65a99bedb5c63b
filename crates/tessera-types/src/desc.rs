//! Type descriptors and the handles that link them.
//!
//! Descriptors live in a [`TypeTable`](crate::TypeTable) arena and refer to
//! each other through `Copy` handles, so recursive graphs (a class whose
//! field has the class's own type, a parent declared after its child) need
//! no ownership cycles. Nominal identity is handle identity: two `Object`
//! types are the same class iff they carry the same [`ClassId`].

use std::fmt;

use tessera_core::{FieldHash, Symbol};

use crate::kind::TypeKind;

/// Handle to a type descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Handle to a class descriptor (the payload of `Object` types).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClassId(pub u32);

/// Handle to a structural record descriptor (the payload of `Virtual` types).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VirtualId(pub u32);

/// Handle to an enum descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EnumId(pub u32);

/// Handle to a static storage slot owned by the VM.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GlobalId(pub u32);

macro_rules! handle_index {
    ($($ty:ident),*) => {$(
        impl $ty {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}

handle_index!(TypeId, ClassId, VirtualId, EnumId, GlobalId);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A type descriptor: the kind plus whatever payload the kind needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDesc {
    Void,
    I8,
    I16,
    I32,
    F32,
    F64,
    Bool,
    Bytes,
    Dynamic,
    Function(FunctionSig),
    Object(ClassId),
    Array,
    TypeRef,
    Ref(TypeId),
    Virtual(VirtualId),
    DynObj,
    Abstract(Symbol),
    Enum(EnumId),
    Nullable(TypeId),
}

impl TypeDesc {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::I8 => TypeKind::I8,
            Self::I16 => TypeKind::I16,
            Self::I32 => TypeKind::I32,
            Self::F32 => TypeKind::F32,
            Self::F64 => TypeKind::F64,
            Self::Bool => TypeKind::Bool,
            Self::Bytes => TypeKind::Bytes,
            Self::Dynamic => TypeKind::Dynamic,
            Self::Function(_) => TypeKind::Function,
            Self::Object(_) => TypeKind::Object,
            Self::Array => TypeKind::Array,
            Self::TypeRef => TypeKind::TypeRef,
            Self::Ref(_) => TypeKind::Ref,
            Self::Virtual(_) => TypeKind::Virtual,
            Self::DynObj => TypeKind::DynObj,
            Self::Abstract(_) => TypeKind::Abstract,
            Self::Enum(_) => TypeKind::Enum,
            Self::Nullable(_) => TypeKind::Nullable,
        }
    }

    /// The descriptor for a payload-free kind.
    ///
    /// Returns `None` for kinds that need a payload.
    pub fn from_kind(kind: TypeKind) -> Option<Self> {
        Some(match kind {
            TypeKind::Void => Self::Void,
            TypeKind::I8 => Self::I8,
            TypeKind::I16 => Self::I16,
            TypeKind::I32 => Self::I32,
            TypeKind::F32 => Self::F32,
            TypeKind::F64 => Self::F64,
            TypeKind::Bool => Self::Bool,
            TypeKind::Bytes => Self::Bytes,
            TypeKind::Dynamic => Self::Dynamic,
            TypeKind::Array => Self::Array,
            TypeKind::TypeRef => Self::TypeRef,
            TypeKind::DynObj => Self::DynObj,
            TypeKind::Function
            | TypeKind::Object
            | TypeKind::Ref
            | TypeKind::Virtual
            | TypeKind::Abstract
            | TypeKind::Enum
            | TypeKind::Nullable => return None,
        })
    }

    /// Wrapped type of `Ref` / `Nullable`.
    pub fn tparam(&self) -> Option<TypeId> {
        match self {
            Self::Ref(inner) | Self::Nullable(inner) => Some(*inner),
            _ => None,
        }
    }
}

/// Function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSig {
    pub args: Vec<TypeId>,
    pub ret: TypeId,
}

impl FunctionSig {
    pub fn new(args: impl Into<Vec<TypeId>>, ret: TypeId) -> Self {
        Self {
            args: args.into(),
            ret,
        }
    }
}

/// A named field of a class or structural record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjField {
    pub name: Symbol,
    pub hash: FieldHash,
    pub ty: TypeId,
}

/// One entry of a resolved runtime field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeField {
    pub hash: FieldHash,
    pub ty: TypeId,
}

/// Nominal class descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDesc {
    pub name: Symbol,
    /// Parent class, as an `Object` type of the same table.
    pub super_type: Option<TypeId>,
    /// Fields declared by this class only.
    pub fields: Vec<ObjField>,
    /// Inherited then own fields, in layout order. Filled by the table builder.
    pub runtime_fields: Vec<RuntimeField>,
    pub global: Option<GlobalId>,
}

impl ClassDesc {
    pub fn new(name: Symbol) -> Self {
        Self {
            name,
            super_type: None,
            fields: Vec::new(),
            runtime_fields: Vec::new(),
            global: None,
        }
    }

    pub fn with_super(mut self, super_type: TypeId) -> Self {
        self.super_type = Some(super_type);
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Vec<ObjField>>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn with_global(mut self, global: GlobalId) -> Self {
        self.global = Some(global);
        self
    }
}

/// Anonymous structural record descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualDesc {
    pub fields: Vec<ObjField>,
}

/// One variant of an enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumConstruct {
    pub name: Symbol,
    pub args: Vec<TypeId>,
}

/// Enum descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDesc {
    pub name: Option<Symbol>,
    pub constructs: Vec<EnumConstruct>,
    pub global: Option<GlobalId>,
}
