//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Flags every command accepts.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(word_size_arg()).arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tessera")
        .about("Inspect VM type manifests: layout, casts and reflection")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(cast_command())
        .subcommand(reflect_command())
        .subcommand(layout_command())
}

/// List every type of a manifest.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("List every type with its kind, size and canonical name")
        .after_help(
            r#"EXAMPLES:
  tessera dump types.json
  tessera dump types.json --word-size 4
  cat types.json | tessera dump -"#,
        )
        .arg(manifest_arg());

    with_common_args(cmd)
}

/// Decide a cast.
pub fn cast_command() -> Command {
    let cmd = Command::new("cast")
        .about("Check whether a value of one type can be used as another")
        .after_help(
            r#"EXAMPLES:
  tessera cast types.json Leaf Base
  tessera cast types.json cb dyn --trace"#,
        )
        .arg(manifest_arg())
        .arg(from_arg())
        .arg(to_arg())
        .arg(trace_arg());

    with_common_args(cmd)
}

/// Reflect on one type.
pub fn reflect_command() -> Command {
    let cmd = Command::new("reflect")
        .about("Show name, arity, constructs, fields and parent of a type")
        .after_help(
            r#"EXAMPLES:
  tessera reflect types.json Leaf
  tessera reflect types.json Color --json"#,
        )
        .arg(manifest_arg())
        .arg(type_arg())
        .arg(json_arg());

    with_common_args(cmd)
}

/// Lay out a sequence of values.
pub fn layout_command() -> Command {
    let cmd = Command::new("layout")
        .about("Place values of the given types one after another")
        .after_help(
            r#"EXAMPLES:
  tessera layout types.json bool i32 Base
  tessera layout types.json i8 f64 --word-size 4"#,
        )
        .arg(manifest_arg())
        .arg(types_arg());

    with_common_args(cmd)
}
