//! Canonical type rendering.
//!
//! The rendering is a pure function of descriptor content, so it doubles as
//! a cache key for a type.

use std::fmt::{self, Write};

use crate::desc::{TypeDesc, TypeId, VirtualId};
use crate::table::TypeTable;

/// Placeholder for a handle the table cannot resolve.
const UNKNOWN: &str = "???";

/// Back-reference to a record that is still being rendered.
const RECURSIVE_VIRTUAL: &str = "virtual<...>";

impl TypeTable {
    /// Render `ty` into `sink`.
    ///
    /// A record reached again through its own fields renders as
    /// `virtual<...>`.
    pub fn write_type_str<W: Write>(&self, sink: &mut W, ty: TypeId) -> fmt::Result {
        self.write_rec(sink, ty, &mut Vec::new())
    }

    fn write_rec<W: Write>(
        &self,
        sink: &mut W,
        ty: TypeId,
        open: &mut Vec<VirtualId>,
    ) -> fmt::Result {
        let Some(desc) = self.get(ty) else {
            return foreign(sink, "type", ty.0);
        };
        if let Some(keyword) = desc.kind().keyword() {
            return sink.write_str(keyword);
        }

        match desc {
            TypeDesc::Function(sig) => {
                sink.write_char('(')?;
                self.write_rec(sink, sig.ret, open)?;
                sink.write_str(" (")?;
                for (i, &arg) in sig.args.iter().enumerate() {
                    if i > 0 {
                        sink.write_char(',')?;
                    }
                    self.write_rec(sink, arg, open)?;
                }
                sink.write_str("))")
            }
            TypeDesc::Object(class) => match self.get_class(*class) {
                Some(class) => write!(sink, "#{}", self.name(class.name)),
                None => foreign(sink, "class", class.0),
            },
            TypeDesc::Ref(inner) => self.write_wrapped(sink, "ref", *inner, open),
            TypeDesc::Virtual(id) => {
                let Some(virt) = self.get_virtual(*id) else {
                    return foreign(sink, "virtual", id.0);
                };
                if open.contains(id) {
                    return sink.write_str(RECURSIVE_VIRTUAL);
                }
                open.push(*id);
                sink.write_str("virtual<")?;
                for (i, field) in virt.fields.iter().enumerate() {
                    if i > 0 {
                        sink.write_char(',')?;
                    }
                    write!(sink, "{}:", self.name(field.name))?;
                    self.write_rec(sink, field.ty, open)?;
                }
                open.pop();
                sink.write_char('>')
            }
            TypeDesc::Abstract(name) => sink.write_str(self.name(*name)),
            TypeDesc::Enum(id) => match self.get_enum(*id) {
                Some(e) => match e.name {
                    Some(name) => write!(sink, "enum<{}>", self.name(name)),
                    None => sink.write_str("enum"),
                },
                None => foreign(sink, "enum", id.0),
            },
            TypeDesc::Nullable(inner) => self.write_wrapped(sink, "null", *inner, open),
            _ => sink.write_str(UNKNOWN),
        }
    }

    fn write_wrapped<W: Write>(
        &self,
        sink: &mut W,
        prefix: &str,
        inner: TypeId,
        open: &mut Vec<VirtualId>,
    ) -> fmt::Result {
        write!(sink, "{prefix}<")?;
        self.write_rec(sink, inner, open)?;
        sink.write_char('>')
    }

    /// Canonical rendering of `ty`.
    pub fn type_str(&self, ty: TypeId) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_type_str(&mut out, ty);
        out
    }

    /// `Display` adapter rendering `ty` without an intermediate `String`.
    pub fn display(&self, ty: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { table: self, ty }
    }
}

/// Returned by [`TypeTable::display`].
pub struct TypeDisplay<'t> {
    table: &'t TypeTable,
    ty: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.write_type_str(f, self.ty)
    }
}

fn foreign<W: Write>(sink: &mut W, what: &str, index: u32) -> fmt::Result {
    debug_assert!(false, "type_str: foreign {what} handle {index}");
    sink.write_str(UNKNOWN)
}
