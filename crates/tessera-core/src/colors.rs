//! ANSI palette for CLI output.

/// Escape sequences used when rendering type tables and cast verdicts.
///
/// Every field is empty when colors are off, so callers can interpolate
/// unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Type keys and nominal names.
    pub name: &'static str,
    /// Successful verdicts.
    pub pass: &'static str,
    /// Failed verdicts.
    pub fail: &'static str,
    /// Handles, sizes and other metadata.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        pass: "\x1b[32m",
        fail: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        pass: "",
        fail: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Color for a boolean verdict.
    pub fn verdict(&self, ok: bool) -> &'static str {
        if ok { self.pass } else { self.fail }
    }
}
