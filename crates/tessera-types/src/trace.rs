//! Instrumentation for the cast engine.
//!
//! `safe_cast` is generic over a [`CastTracer`]. With [`NoopTracer`] every
//! hook is an empty `#[inline(always)]` function and the instrumentation
//! compiles away. [`PrintTracer`] records one line per recursive query and
//! one per verdict, indented by recursion depth.

use std::fmt;

use tessera_core::Colors;

use crate::desc::TypeId;
use crate::table::TypeTable;

/// The rule of the cast algorithm that decided a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastRule {
    Identity,
    /// Target is `dynamic`; decided by the source's dynamism.
    DynamicTarget,
    KindMismatch,
    /// Structural prefix check between two records.
    VirtualPrefix,
    /// Walk of the source class's `super` chain.
    ObjectChain,
    Function,
    /// Fallback to type equality.
    SameType,
}

impl CastRule {
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::DynamicTarget => "dynamic target",
            Self::KindMismatch => "kind mismatch",
            Self::VirtualPrefix => "virtual prefix",
            Self::ObjectChain => "object chain",
            Self::Function => "function",
            Self::SameType => "same type",
        }
    }
}

impl fmt::Display for CastRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hooks called by the cast engine.
///
/// Every `trace_enter` is matched by exactly one `trace_exit`, including for
/// nested queries (function arguments and return types).
pub trait CastTracer {
    /// A query `source -> target` starts.
    fn trace_enter(&mut self, source: TypeId, target: TypeId);

    /// The innermost open query was decided by `rule`.
    fn trace_exit(&mut self, rule: CastRule, ok: bool);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl CastTracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _source: TypeId, _target: TypeId) {}

    #[inline(always)]
    fn trace_exit(&mut self, _rule: CastRule, _ok: bool) {}
}

/// Tracer that collects a readable log of a cast decision.
pub struct PrintTracer<'t> {
    table: &'t TypeTable,
    colors: Colors,
    lines: Vec<String>,
    depth: usize,
}

impl<'t> PrintTracer<'t> {
    pub fn new(table: &'t TypeTable, colors: Colors) -> Self {
        Self {
            table,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Collected log, one line per event.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl CastTracer for PrintTracer<'_> {
    fn trace_enter(&mut self, source: TypeId, target: TypeId) {
        let c = self.colors;
        let line = format!(
            "{}{}{}{} -> {}{}{}",
            self.indent(),
            c.name,
            self.table.display(source),
            c.reset,
            c.name,
            self.table.display(target),
            c.reset,
        );
        self.lines.push(line);
        self.depth += 1;
    }

    fn trace_exit(&mut self, rule: CastRule, ok: bool) {
        let c = self.colors;
        let line = format!(
            "{}{}{}:{} {}{}{}",
            self.indent(),
            c.dim,
            rule,
            c.reset,
            c.verdict(ok),
            ok,
            c.reset,
        );
        self.lines.push(line);
        self.depth = self.depth.saturating_sub(1);
    }
}
