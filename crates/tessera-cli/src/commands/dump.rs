use std::fmt::Write;

use tessera_core::Colors;
use tessera_types::Linked;

use super::fail;
use super::manifest_loader::Source;

pub struct DumpArgs {
    pub source: Source,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let linked = args.source.load().unwrap_or_else(|e| fail(e));
    print!("{}", render(&linked, Colors::new(args.color)));
}

/// One line per manifest entry: handle, key, kind, size, dynamism, canonical name.
pub fn render(linked: &Linked, colors: Colors) -> String {
    let c = colors;
    let table = &linked.table;
    let key_width = linked.keys.keys().map(|k| k.len()).max().unwrap_or(0);
    let mut out = String::new();

    writeln!(
        out,
        "{}word size {}{}",
        c.dim,
        table.layout().word_size(),
        c.reset
    )
    .unwrap();

    for (key, &id) in &linked.keys {
        let kind = table.kind(id);
        let size = table.size_of(kind);
        let kind = format!("{kind:?}");
        let dynamic = if table.is_dynamic(id) { "dyn" } else { "-" };
        writeln!(
            out,
            "{}{:>4}{}  {}{key:<key_width$}{}  {kind:<8}  {size:>2}  {dynamic:<3}  {}",
            c.dim,
            id.to_string(),
            c.reset,
            c.name,
            c.reset,
            table.display(id),
        )
        .unwrap();
    }
    out
}
