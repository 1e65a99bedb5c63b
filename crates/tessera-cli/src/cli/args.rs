//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file (positional). `-` reads JSON from stdin.
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Type manifest (.json, or .bin for the binary encoding)")
}

/// Source type key (positional).
pub fn from_arg() -> Arg {
    Arg::new("from")
        .value_name("FROM")
        .required(true)
        .help("Type of the value being cast")
}

/// Target type key (positional).
pub fn to_arg() -> Arg {
    Arg::new("to")
        .value_name("TO")
        .required(true)
        .help("Expected type")
}

/// Single type key (positional).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .required(true)
        .help("Manifest key or keyword")
}

/// One or more type keys (positional).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .value_name("TYPE")
        .required(true)
        .num_args(1..)
        .help("Manifest keys or keywords, in placement order")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Target word size override (--word-size).
pub fn word_size_arg() -> Arg {
    Arg::new("word_size")
        .long("word-size")
        .value_name("BYTES")
        .value_parser(value_parser!(u32))
        .help("Machine word size in bytes (overrides the manifest)")
}

/// Print the cast decision log (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Show how the verdict was reached")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}
