//! Size and alignment oracle.
//!
//! Every value is aligned to its own size. This relies on each non-zero
//! width in the kind table being a power of two, which [`Layout`] enforces
//! for the one configurable width, the machine word.

use crate::kind::TypeKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("word size must be a non-zero power of two, got {0}")]
    WordSizeNotPowerOfTwo(usize),
}

/// Target layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    word_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self::native()
    }
}

impl Layout {
    /// Layout of the host.
    pub const fn native() -> Self {
        Self {
            word_size: std::mem::size_of::<usize>(),
        }
    }

    /// Layout for a target with a `word_size`-byte machine word.
    pub fn with_word_size(word_size: usize) -> Result<Self, LayoutError> {
        if !word_size.is_power_of_two() {
            return Err(LayoutError::WordSizeNotPowerOfTwo(word_size));
        }
        Ok(Self { word_size })
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Byte width of a value of `kind`.
    #[inline]
    pub fn size_of(&self, kind: TypeKind) -> usize {
        kind.size_for_word(self.word_size)
    }

    /// Padding needed before placing a `kind` value at `offset`.
    pub fn pad_size(&self, offset: usize, kind: TypeKind) -> usize {
        let size = self.size_of(kind);
        if size == 0 {
            return 0;
        }
        match offset & (size - 1) {
            0 => 0,
            misalignment => size - misalignment,
        }
    }

    /// First offset at or after `offset` where a `kind` value may be placed.
    pub fn align(&self, offset: usize, kind: TypeKind) -> usize {
        offset + self.pad_size(offset, kind)
    }
}
