use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tessera_core::{ManifestError, TypeManifest};
use tessera_types::{LinkError, Linked, TypeTable};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid manifest '{path}': {source}")]
    Manifest {
        path: String,
        source: ManifestError,
    },
    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Where a manifest comes from, plus command-line overrides.
pub struct Source {
    pub path: PathBuf,
    pub word_size: Option<u32>,
}

impl Source {
    pub fn new(path: PathBuf, word_size: Option<u32>) -> Self {
        Self { path, word_size }
    }

    /// Read, decode and link the manifest.
    pub fn load(&self) -> Result<Linked, LoadError> {
        let mut manifest = read_manifest(&self.path)?;
        if self.word_size.is_some() {
            manifest.word_size = self.word_size;
        }
        Ok(TypeTable::from_manifest(&manifest)?)
    }
}

fn read_manifest(path: &Path) -> Result<TypeManifest, LoadError> {
    let display = path.display().to_string();
    let io_err = |source| LoadError::Io {
        path: display.clone(),
        source,
    };
    let manifest_err = |source| LoadError::Manifest {
        path: display.clone(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        return TypeManifest::from_json(&buf).map_err(manifest_err);
    }

    if path.extension().is_some_and(|ext| ext == "bin") {
        let bytes = fs::read(path).map_err(io_err)?;
        return TypeManifest::from_binary(&bytes).map_err(manifest_err);
    }

    let text = fs::read_to_string(path).map_err(io_err)?;
    TypeManifest::from_json(&text).map_err(manifest_err)
}
