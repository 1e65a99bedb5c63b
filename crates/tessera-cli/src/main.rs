mod cli;
mod commands;

use cli::{CastParams, DumpParams, LayoutParams, ReflectParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("cast", m)) => {
            let params = CastParams::from_matches(m);
            commands::cast::run(params.into());
        }
        Some(("reflect", m)) => {
            let params = ReflectParams::from_matches(m);
            commands::reflect::run(params.into());
        }
        Some(("layout", m)) => {
            let params = LayoutParams::from_matches(m);
            commands::layout::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
