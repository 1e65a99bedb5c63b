use std::fmt::Write;

use tessera_core::Colors;
use tessera_types::{LinkError, Linked};

use super::fail;
use super::manifest_loader::Source;

pub struct LayoutArgs {
    pub source: Source,
    pub types: Vec<String>,
    pub color: bool,
}

pub fn run(args: LayoutArgs) {
    let linked = args.source.load().unwrap_or_else(|e| fail(e));
    match render(&linked, &args.types, Colors::new(args.color)) {
        Ok(out) => print!("{out}"),
        Err(e) => fail(e),
    }
}

/// Place one value of each type after the previous one, padding each to its
/// own alignment. Prints offset, size and padding per value, then the total.
pub fn render(linked: &Linked, keys: &[String], colors: Colors) -> Result<String, LinkError> {
    let c = colors;
    let table = &linked.table;
    let mut out = String::new();
    let mut offset = 0;

    writeln!(out, "{}offset  size  type{}", c.dim, c.reset).unwrap();
    for key in keys {
        let id = linked.require(key)?;
        let pad = table.pad_size(offset, id);
        offset += pad;
        let size = table.size_of(table.kind(id));

        write!(
            out,
            "{offset:>6}  {size:>4}  {}{key}{}: {}",
            c.name,
            c.reset,
            table.display(id)
        )
        .unwrap();
        if pad > 0 {
            write!(out, "  {}(pad {pad}){}", c.dim, c.reset).unwrap();
        }
        out.push('\n');
        offset += size;
    }
    writeln!(out, "{}total{} {offset}", c.dim, c.reset).unwrap();
    Ok(out)
}
