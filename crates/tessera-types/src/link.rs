//! Linking a [`TypeManifest`] into a [`TypeTable`].
//!
//! Every manifest entry gets a handle up front, so entries may refer to
//! entries declared later (or to themselves). Payload-free kinds are also
//! reachable under their keyword (`i32`, `dyn`, ...) without an entry; those
//! handles are allocated after the manifest's own.

use indexmap::IndexMap;
use tessera_core::{FieldSpec, TypeManifest, TypeSpec};

use crate::desc::{ClassDesc, EnumConstruct, EnumDesc, FunctionSig, ObjField, TypeDesc, TypeId};
use crate::layout::{Layout, LayoutError};
use crate::table::{TableError, TypeTable, TypeTableBuilder};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("unknown type `{key}` referenced by `{from}`")]
    UnknownType { key: String, from: String },
    #[error("no type named `{0}`")]
    NotFound(String),
    #[error("type `{0}` is declared twice")]
    DuplicateKey(String),
    #[error("super type `{super_key}` of `{key}` is not an object type")]
    SuperNotObject { key: String, super_key: String },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A linked table plus the handle of every manifest key.
#[derive(Debug)]
pub struct Linked {
    pub table: TypeTable,
    /// Manifest keys in declaration order.
    pub keys: IndexMap<String, TypeId>,
    keywords: IndexMap<&'static str, TypeId>,
}

impl Linked {
    /// Handle for a manifest key or a keyword.
    pub fn resolve(&self, key: &str) -> Option<TypeId> {
        self.keys
            .get(key)
            .or_else(|| self.keywords.get(key))
            .copied()
    }

    /// Like [`resolve`](Self::resolve), reporting the missing key.
    pub fn require(&self, key: &str) -> Result<TypeId, LinkError> {
        self.resolve(key).ok_or_else(|| LinkError::NotFound(key.to_owned()))
    }
}

/// Descriptor of a payload-free manifest entry.
fn payload_free(spec: &TypeSpec) -> Option<TypeDesc> {
    Some(match spec {
        TypeSpec::Void => TypeDesc::Void,
        TypeSpec::I8 => TypeDesc::I8,
        TypeSpec::I16 => TypeDesc::I16,
        TypeSpec::I32 => TypeDesc::I32,
        TypeSpec::F32 => TypeDesc::F32,
        TypeSpec::F64 => TypeDesc::F64,
        TypeSpec::Bool => TypeDesc::Bool,
        TypeSpec::Bytes => TypeDesc::Bytes,
        TypeSpec::Dyn => TypeDesc::Dynamic,
        TypeSpec::Array => TypeDesc::Array,
        TypeSpec::Type => TypeDesc::TypeRef,
        TypeSpec::DynObj => TypeDesc::DynObj,
        _ => return None,
    })
}

impl TypeTable {
    /// Link `manifest` into a table.
    pub fn from_manifest(manifest: &TypeManifest) -> Result<Linked, LinkError> {
        let layout = match manifest.word_size {
            Some(word) => Layout::with_word_size(word as usize)?,
            None => Layout::native(),
        };
        Linker::new(manifest, layout)?.link()
    }
}

struct Linker<'m> {
    manifest: &'m TypeManifest,
    builder: TypeTableBuilder,
    keys: IndexMap<String, TypeId>,
    keywords: IndexMap<&'static str, TypeId>,
}

impl<'m> Linker<'m> {
    fn new(manifest: &'m TypeManifest, layout: Layout) -> Result<Self, LinkError> {
        let mut builder = TypeTable::builder().layout(layout);
        let mut keys = IndexMap::with_capacity(manifest.len());
        for (key, _) in &manifest.types {
            if keys.contains_key(key) {
                return Err(LinkError::DuplicateKey(key.clone()));
            }
            keys.insert(key.clone(), builder.reserve());
        }

        let mut keywords = IndexMap::new();
        for (keyword, spec) in &TypeSpec::KEYWORDS {
            if let Some(desc) = payload_free(spec) {
                keywords.insert(*keyword, builder.builtin(desc.kind()));
            }
        }

        Ok(Self {
            manifest,
            builder,
            keys,
            keywords,
        })
    }

    fn link(mut self) -> Result<Linked, LinkError> {
        for (key, spec) in &self.manifest.types {
            let id = self.keys[key.as_str()];
            let desc = self.describe(key, spec)?;
            self.builder.define(id, desc)?;
        }

        Ok(Linked {
            table: self.builder.build()?,
            keys: self.keys,
            keywords: self.keywords,
        })
    }

    fn lookup(&self, key: &str, from: &str) -> Result<TypeId, LinkError> {
        self.keys
            .get(key)
            .or_else(|| self.keywords.get(key))
            .copied()
            .ok_or_else(|| LinkError::UnknownType {
                key: key.to_owned(),
                from: from.to_owned(),
            })
    }

    fn fields(&mut self, fields: &[FieldSpec], from: &str) -> Result<Vec<ObjField>, LinkError> {
        fields
            .iter()
            .map(|f| -> Result<ObjField, LinkError> {
                let ty = self.lookup(&f.ty, from)?;
                Ok(self.builder.field(&f.name, ty)?)
            })
            .collect()
    }

    fn describe(&mut self, key: &str, spec: &TypeSpec) -> Result<TypeDesc, LinkError> {
        if let Some(desc) = payload_free(spec) {
            return Ok(desc);
        }

        let desc = match spec {
            TypeSpec::Fun { args, ret } => {
                let args = args
                    .iter()
                    .map(|a| self.lookup(a, key))
                    .collect::<Result<Vec<_>, _>>()?;
                let ret = self.lookup(ret, key)?;
                TypeDesc::Function(FunctionSig::new(args, ret))
            }
            TypeSpec::Obj {
                name,
                super_type,
                fields,
                global,
            } => {
                let mut class = ClassDesc::new(self.builder.intern(name));
                if let Some(super_key) = super_type {
                    if !matches!(self.manifest.get(super_key), Some(TypeSpec::Obj { .. })) {
                        // Also rejects keywords and missing keys: only `obj` entries qualify.
                        return Err(match self.lookup(super_key, key) {
                            Err(missing) => missing,
                            Ok(_) => LinkError::SuperNotObject {
                                key: key.to_owned(),
                                super_key: super_key.clone(),
                            },
                        });
                    }
                    class = class.with_super(self.lookup(super_key, key)?);
                }
                class = class.with_fields(self.fields(fields, key)?);
                if *global {
                    class = class.with_global(self.builder.global());
                }
                TypeDesc::Object(self.builder.add_class(class))
            }
            TypeSpec::Ref(inner) => TypeDesc::Ref(self.lookup(inner, key)?),
            TypeSpec::Null(inner) => TypeDesc::Nullable(self.lookup(inner, key)?),
            TypeSpec::Virtual { fields } => {
                let fields = self.fields(fields, key)?;
                TypeDesc::Virtual(self.builder.add_virtual(fields))
            }
            TypeSpec::Abstract { name } => TypeDesc::Abstract(self.builder.intern(name)),
            TypeSpec::Enum {
                name,
                constructs,
                global,
            } => {
                let name = name.as_deref().map(|n| self.builder.intern(n));
                let constructs = constructs
                    .iter()
                    .map(|c| -> Result<EnumConstruct, LinkError> {
                        let args = c
                            .args
                            .iter()
                            .map(|a| self.lookup(a, key))
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(EnumConstruct {
                            name: self.builder.intern(&c.name),
                            args,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let global = global.then(|| self.builder.global());
                TypeDesc::Enum(self.builder.add_enum(EnumDesc {
                    name,
                    constructs,
                    global,
                }))
            }
            _ => unreachable!("payload-free kinds are handled above"),
        };
        Ok(desc)
    }
}
