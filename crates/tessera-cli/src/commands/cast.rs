use tessera_core::Colors;
use tessera_types::{LinkError, Linked, PrintTracer};

use super::fail;
use super::manifest_loader::Source;

pub struct CastArgs {
    pub source: Source,
    pub from: String,
    pub to: String,
    pub trace: bool,
    pub color: bool,
}

pub fn run(args: CastArgs) {
    let linked = args.source.load().unwrap_or_else(|e| fail(e));
    let colors = Colors::new(args.color);
    match render(&linked, &args.from, &args.to, args.trace, colors) {
        Ok(out) => print!("{out}"),
        Err(e) => fail(e),
    }
}

/// The verdict, preceded by the decision log when `trace` is set.
pub fn render(
    linked: &Linked,
    from: &str,
    to: &str,
    trace: bool,
    colors: Colors,
) -> Result<String, LinkError> {
    let source = linked.require(from)?;
    let target = linked.require(to)?;
    let table = &linked.table;

    let mut out = String::new();
    let ok = if trace {
        let mut tracer = PrintTracer::new(table, colors);
        let ok = table.safe_cast_traced(source, target, &mut tracer);
        out.push_str(&tracer.finish());
        ok
    } else {
        table.safe_cast(source, target)
    };

    out.push_str(&format!("{}{ok}{}\n", colors.verdict(ok), colors.reset));
    Ok(out)
}
