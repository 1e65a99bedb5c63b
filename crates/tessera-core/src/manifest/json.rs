//! JSON decoding for manifests.
//!
//! Entries are internally tagged by `kind`, which postcard cannot decode, so
//! JSON goes through `Raw*` mirror types and is converted afterwards.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::types::{ConstructSpec, FieldSpec, TypeManifest, TypeSpec};

/// Error while decoding a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),
}

impl TypeManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    word_size: Option<u32>,
    #[serde(deserialize_with = "unique_keys")]
    types: IndexMap<String, RawType>,
}

/// Map of entries where a repeated key is an error rather than a silent
/// overwrite of the earlier entry.
fn unique_keys<'de, D>(deserializer: D) -> Result<IndexMap<String, RawType>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueKeys;

    impl<'de> Visitor<'de> for UniqueKeys {
        type Value = IndexMap<String, RawType>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of type entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut types = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, ty)) = map.next_entry::<String, RawType>()? {
                if types.contains_key(&key) {
                    return Err(de::Error::custom(format_args!(
                        "duplicate type key `{key}`"
                    )));
                }
                types.insert(key, ty);
            }
            Ok(types)
        }
    }

    deserializer.deserialize_map(UniqueKeys)
}

impl From<RawManifest> for TypeManifest {
    fn from(raw: RawManifest) -> Self {
        // IndexMap keeps declaration order, which becomes handle order.
        Self {
            word_size: raw.word_size,
            types: raw.types.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawType {
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
        #[serde(default)]
        args: Vec<String>,
        ret: String,
    },
    Obj {
        name: String,
        #[serde(default, rename = "super")]
        super_type: Option<String>,
        #[serde(default)]
        fields: Vec<RawField>,
        #[serde(default)]
        global: bool,
    },
    Array,
    Type,
    Ref {
        of: String,
    },
    Virtual {
        #[serde(default)]
        fields: Vec<RawField>,
    },
    DynObj,
    Abstract {
        name: String,
    },
    Enum {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        constructs: Vec<ConstructSpec>,
        #[serde(default)]
        global: bool,
    },
    Null {
        of: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

impl From<RawField> for FieldSpec {
    fn from(raw: RawField) -> Self {
        Self {
            name: raw.name,
            ty: raw.ty,
        }
    }
}

fn fields(raw: Vec<RawField>) -> Vec<FieldSpec> {
    raw.into_iter().map(Into::into).collect()
}

impl From<RawType> for TypeSpec {
    fn from(raw: RawType) -> Self {
        match raw {
            RawType::Void => Self::Void,
            RawType::I8 => Self::I8,
            RawType::I16 => Self::I16,
            RawType::I32 => Self::I32,
            RawType::F32 => Self::F32,
            RawType::F64 => Self::F64,
            RawType::Bool => Self::Bool,
            RawType::Bytes => Self::Bytes,
            RawType::Dyn => Self::Dyn,
            RawType::Fun { args, ret } => Self::Fun { args, ret },
            RawType::Obj {
                name,
                super_type,
                fields: own,
                global,
            } => Self::Obj {
                name,
                super_type,
                fields: fields(own),
                global,
            },
            RawType::Array => Self::Array,
            RawType::Type => Self::Type,
            RawType::Ref { of } => Self::Ref(of),
            RawType::Virtual { fields: own } => Self::Virtual {
                fields: fields(own),
            },
            RawType::DynObj => Self::DynObj,
            RawType::Abstract { name } => Self::Abstract { name },
            RawType::Enum {
                name,
                constructs,
                global,
            } => Self::Enum {
                name,
                constructs,
                global,
            },
            RawType::Null { of } => Self::Null(of),
        }
    }
}
