//! Cast compatibility.
//!
//! `safe_cast(source, target)` decides whether a value statically typed
//! `source` may be used where `target` is expected without a runtime check.
//! Rules are tried in order and the first applicable one decides:
//!
//! 1. identical handles are compatible;
//! 2. `dynamic` accepts any dynamic source except a structural record;
//! 3. different kinds are incompatible;
//! 4. records, classes and functions have their own rules;
//! 5. everything else falls back to [`same_type`](TypeTable::same_type).

use crate::desc::{ClassId, TypeDesc, TypeId, VirtualId};
use crate::kind::TypeKind;
use crate::table::TypeTable;
use crate::trace::{CastRule, CastTracer, NoopTracer};
use crate::value::Dynamic;

impl TypeTable {
    /// Whether `source` values can be used as `target` values.
    pub fn safe_cast(&self, source: TypeId, target: TypeId) -> bool {
        self.safe_cast_traced(source, target, &mut NoopTracer)
    }

    /// [`safe_cast`](Self::safe_cast), reporting every decision to `tracer`.
    pub fn safe_cast_traced<T: CastTracer>(
        &self,
        source: TypeId,
        target: TypeId,
        tracer: &mut T,
    ) -> bool {
        tracer.trace_enter(source, target);
        let (rule, ok) = self.decide(source, target, tracer);
        tracer.trace_exit(rule, ok);
        ok
    }

    fn decide<T: CastTracer>(
        &self,
        source: TypeId,
        target: TypeId,
        tracer: &mut T,
    ) -> (CastRule, bool) {
        if source == target {
            return (CastRule::Identity, true);
        }

        let (src, dst) = (self.desc(source), self.desc(target));
        if dst.kind() == TypeKind::Dynamic && src.kind() != TypeKind::Virtual {
            return (CastRule::DynamicTarget, src.kind().is_dynamic());
        }
        if src.kind() != dst.kind() {
            return (CastRule::KindMismatch, false);
        }

        match (src, dst) {
            (TypeDesc::Virtual(s), TypeDesc::Virtual(d)) => {
                (CastRule::VirtualPrefix, self.virtual_prefix(*s, *d))
            }
            (TypeDesc::Object(s), TypeDesc::Object(d)) => {
                (CastRule::ObjectChain, self.inherits(*s, *d))
            }
            (TypeDesc::Function(s), TypeDesc::Function(d)) => {
                if s.args.len() != d.args.len() {
                    return (CastRule::Function, false);
                }
                // Return type first, then arguments in order; stop at the first failure.
                let ok = self.safe_cast_traced(s.ret, d.ret, tracer)
                    && s.args.iter().zip(&d.args).all(|(&sa, &da)| {
                        self.safe_cast_traced(sa, da, tracer) || self.dynamic_escape(sa, da)
                    });
                (CastRule::Function, ok)
            }
            _ => (CastRule::SameType, self.same_type(source, target)),
        }
    }

    /// Whether `target`'s fields are a prefix of `source`'s, by hash and type.
    fn virtual_prefix(&self, source: VirtualId, target: VirtualId) -> bool {
        let src = &self.virtual_desc(source).fields;
        let dst = &self.virtual_desc(target).fields;
        dst.len() <= src.len()
            && src
                .iter()
                .zip(dst)
                .all(|(s, d)| s.hash == d.hash && self.same_type(s.ty, d.ty))
    }

    /// Whether `ancestor` is `class` or one of its superclasses.
    pub fn inherits(&self, class: ClassId, ancestor: ClassId) -> bool {
        let mut cursor = Some(class);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Parent class of `class`. The builder guarantees `super` is an `Object`.
    pub(crate) fn parent(&self, class: ClassId) -> Option<ClassId> {
        let super_type = self.class(class).super_type?;
        match self.desc(super_type) {
            TypeDesc::Object(parent) => Some(*parent),
            _ => None,
        }
    }

    /// A `dynamic` argument accepts anything that carries its own type tag.
    fn dynamic_escape(&self, source_arg: TypeId, target_arg: TypeId) -> bool {
        self.kind(source_arg) == TypeKind::Dynamic && self.is_dynamic(target_arg)
    }

    /// Runtime guard for a dynamic value about to be stored as `target`.
    ///
    /// Null passes only when `target` can represent null.
    pub fn type_check(&self, target: TypeId, value: Option<&Dynamic>) -> bool {
        match value {
            None => self.is_dynamic(target),
            Some(v) => self.safe_cast(v.ty, target),
        }
    }
}
