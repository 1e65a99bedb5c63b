//! Type equality.
//!
//! Structural for wrappers and function signatures, nominal (handle
//! identity) for classes, records, enums and abstract names.

use crate::desc::{TypeDesc, TypeId};
use crate::table::TypeTable;

impl TypeTable {
    /// Whether `a` and `b` denote the same type.
    pub fn same_type(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        let (da, db) = (self.desc(a), self.desc(b));
        if da.kind() != db.kind() {
            return false;
        }
        if da.kind().is_payload_free() {
            return true;
        }
        if da.kind().is_wrapper() {
            return match (da.tparam(), db.tparam()) {
                (Some(x), Some(y)) => self.same_type(x, y),
                _ => false,
            };
        }

        match (da, db) {
            (TypeDesc::Function(f), TypeDesc::Function(g)) => {
                f.args.len() == g.args.len()
                    && f.args
                        .iter()
                        .zip(&g.args)
                        .all(|(x, y)| self.same_type(*x, *y))
                    && self.same_type(f.ret, g.ret)
            }
            (TypeDesc::Object(x), TypeDesc::Object(y)) => x == y,
            (TypeDesc::Virtual(x), TypeDesc::Virtual(y)) => x == y,
            (TypeDesc::Abstract(x), TypeDesc::Abstract(y)) => x == y,
            (TypeDesc::Enum(x), TypeDesc::Enum(y)) => x == y,
            _ => false,
        }
    }
}
