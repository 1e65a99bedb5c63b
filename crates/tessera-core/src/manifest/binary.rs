//! Binary manifest encoding using postcard.

use super::json::ManifestError;
use super::types::TypeManifest;

impl TypeManifest {
    /// Decode a manifest from its binary encoding.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, ManifestError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    /// Encode the manifest in binary form.
    pub fn to_binary(&self) -> Result<Vec<u8>, ManifestError> {
        Ok(postcard::to_allocvec(self)?)
    }
}
