//! Canonical type kind definitions.
//!
//! The kind is the discriminant of every type descriptor. The set is closed;
//! per-kind facts (byte width, dynamism, keyword) are constant tables indexed
//! by the discriminant.

/// Type kinds, in bytecode discriminant order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeKind {
    Void = 0,
    I8 = 1,
    I16 = 2,
    I32 = 3,
    F32 = 4,
    F64 = 5,
    Bool = 6,
    /// Raw byte buffer.
    Bytes = 7,
    /// Untyped top type: any value carrying its own type tag.
    Dynamic = 8,
    Function = 9,
    /// Class instance (nominal, single inheritance).
    Object = 10,
    Array = 11,
    /// A type descriptor used as a value.
    TypeRef = 12,
    /// Pointer to a single value of the inner type.
    Ref = 13,
    /// Anonymous structural record.
    Virtual = 14,
    /// Dynamic object with runtime-added fields.
    DynObj = 15,
    /// Opaque foreign handle, identified by name.
    Abstract = 16,
    Enum = 17,
    /// Boxed, nullable form of the inner type.
    Nullable = 18,
}

/// Number of kinds.
pub const KIND_COUNT: usize = 19;

/// Sentinel in [`SIZES`] for "one machine word".
const WORD: u8 = u8::MAX;

/// Byte width per kind. `WORD` entries are resolved against the target word size.
const SIZES: [u8; KIND_COUNT] = [
    0,    // Void
    1,    // I8
    2,    // I16
    4,    // I32
    4,    // F32
    8,    // F64
    1,    // Bool
    WORD, // Bytes
    WORD, // Dynamic
    WORD, // Function
    WORD, // Object
    WORD, // Array
    WORD, // TypeRef
    WORD, // Ref
    WORD, // Virtual
    WORD, // DynObj
    WORD, // Abstract
    WORD, // Enum
    WORD, // Nullable
];

/// Whether values of the kind carry a runtime type tag.
const DYNAMIC: [bool; KIND_COUNT] = [
    false, // Void
    false, // I8
    false, // I16
    false, // I32
    false, // F32
    false, // F64
    false, // Bool
    false, // Bytes
    true,  // Dynamic
    true,  // Function
    true,  // Object
    true,  // Array
    false, // TypeRef
    false, // Ref
    true,  // Virtual
    true,  // DynObj
    false, // Abstract
    false, // Enum
    true,  // Nullable
];

/// Fixed rendering for kinds without payload; `None` for structured kinds.
const KEYWORDS: [Option<&str>; KIND_COUNT] = [
    Some("void"),
    Some("i8"),
    Some("i16"),
    Some("i32"),
    Some("f32"),
    Some("f64"),
    Some("bool"),
    Some("bytes"),
    Some("dynamic"),
    None, // Function
    None, // Object
    Some("array"),
    Some("type"),
    None, // Ref
    None, // Virtual
    Some("dynobj"),
    None, // Abstract
    None, // Enum
    None, // Nullable
];

impl TypeKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TypeKind; KIND_COUNT] = [
        Self::Void,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::Bytes,
        Self::Dynamic,
        Self::Function,
        Self::Object,
        Self::Array,
        Self::TypeRef,
        Self::Ref,
        Self::Virtual,
        Self::DynObj,
        Self::Abstract,
        Self::Enum,
        Self::Nullable,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Byte width on a target whose machine word is `word_size` bytes.
    #[inline]
    pub const fn size_for_word(self, word_size: usize) -> usize {
        match SIZES[self as usize] {
            WORD => word_size,
            n => n as usize,
        }
    }

    /// Byte width on the host.
    #[inline]
    pub const fn size_of(self) -> usize {
        self.size_for_word(std::mem::size_of::<usize>())
    }

    /// Whether values of this kind carry a runtime type tag.
    #[inline]
    pub fn is_dynamic(self) -> bool {
        DYNAMIC[self.index()]
    }

    /// Rendering for payload-free kinds (`i32`, `dynamic`, ...).
    #[inline]
    pub fn keyword(self) -> Option<&'static str> {
        KEYWORDS[self.index()]
    }

    /// Kinds that are rendered and compared without looking at any payload.
    pub fn is_payload_free(self) -> bool {
        self.keyword().is_some()
    }

    /// Kinds wrapping exactly one inner type.
    pub fn is_wrapper(self) -> bool {
        matches!(self, Self::Ref | Self::Nullable)
    }
}
