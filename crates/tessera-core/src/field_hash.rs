//! Field-name hashing.
//!
//! Runtime field tables identify fields by a stable 32-bit hash of the name
//! rather than by the name itself. The hash is a pure function of the UTF-8
//! bytes, so two independently built tables agree on it. [`FieldRegistry`]
//! keeps the reverse mapping for reflection and rejects colliding names.

use std::collections::HashMap;
use std::fmt;

/// Modulus keeping hashes inside the VM's tagged-integer range.
const HASH_MODULUS: i32 = 0x1FFF_FF7B;

/// Stable hashed identifier of a field name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct FieldHash(i32);

impl FieldHash {
    /// Hash a field name.
    pub fn of(name: &str) -> Self {
        let mut h: i32 = 0;
        for &b in name.as_bytes() {
            h = h.wrapping_mul(223).wrapping_add(b as i32);
        }
        Self(h % HASH_MODULUS)
    }

    #[inline]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for FieldHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0 as u32)
    }
}

/// Two distinct names hashed to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field names `{existing}` and `{incoming}` share hash {hash}")]
pub struct HashCollision {
    pub hash: FieldHash,
    pub existing: String,
    pub incoming: String,
}

/// Reverse mapping from field hashes to field names.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    names: HashMap<FieldHash, Box<str>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `name` and remember it.
    ///
    /// Registering the same name twice is a no-op.
    pub fn register(&mut self, name: &str) -> Result<FieldHash, HashCollision> {
        let hash = FieldHash::of(name);
        match self.names.get(&hash) {
            Some(existing) if &**existing != name => Err(HashCollision {
                hash,
                existing: existing.to_string(),
                incoming: name.to_owned(),
            }),
            Some(_) => Ok(hash),
            None => {
                self.names.insert(hash, name.into());
                Ok(hash)
            }
        }
    }

    /// Name that produced `hash`, if it was registered.
    pub fn name_of(&self, hash: FieldHash) -> Option<&str> {
        self.names.get(&hash).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
