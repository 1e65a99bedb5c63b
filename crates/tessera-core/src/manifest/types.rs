//! Manifest type definitions.

use serde::{Deserialize, Serialize};

/// A complete type manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeManifest {
    /// Target word width in bytes. `None` means the host width.
    #[serde(default)]
    pub word_size: Option<u32>,
    /// Types in declaration order, keyed by their local label.
    pub types: Vec<(String, TypeSpec)>,
}

/// One manifest entry. References to other types are manifest keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSpec {
    Void,
    I8,
    I16,
    I32,
    F32,
    F64,
    Bool,
    Bytes,
    Dyn,
    Fun {
        args: Vec<String>,
        ret: String,
    },
    Obj {
        name: String,
        super_type: Option<String>,
        /// Own fields only; inherited ones come from `super_type`.
        fields: Vec<FieldSpec>,
        /// Whether the class has a static slot.
        global: bool,
    },
    Array,
    Type,
    Ref(String),
    Virtual {
        fields: Vec<FieldSpec>,
    },
    DynObj,
    Abstract {
        name: String,
    },
    Enum {
        name: Option<String>,
        constructs: Vec<ConstructSpec>,
        global: bool,
    },
    Null(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructSpec {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl TypeSpec {
    /// Payload-free kinds reachable by keyword without a manifest entry.
    pub const KEYWORDS: [(&'static str, TypeSpec); 12] = [
        ("void", TypeSpec::Void),
        ("i8", TypeSpec::I8),
        ("i16", TypeSpec::I16),
        ("i32", TypeSpec::I32),
        ("f32", TypeSpec::F32),
        ("f64", TypeSpec::F64),
        ("bool", TypeSpec::Bool),
        ("bytes", TypeSpec::Bytes),
        ("dyn", TypeSpec::Dyn),
        ("array", TypeSpec::Array),
        ("type", TypeSpec::Type),
        ("dynobj", TypeSpec::DynObj),
    ];
}

impl TypeManifest {
    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&TypeSpec> {
        self.types.iter().find(|(k, _)| k == key).map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
