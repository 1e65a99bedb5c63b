//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::cast::CastArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::layout::LayoutArgs;
use crate::commands::manifest_loader::Source;
use crate::commands::reflect::ReflectArgs;

pub struct DumpParams {
    pub manifest: PathBuf,
    pub word_size: Option<u32>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            word_size: m.get_one::<u32>("word_size").copied(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source: Source::new(p.manifest, p.word_size),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CastParams {
    pub manifest: PathBuf,
    pub from: String,
    pub to: String,
    pub trace: bool,
    pub word_size: Option<u32>,
    pub color: ColorChoice,
}

impl CastParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            from: required_string(m, "from"),
            to: required_string(m, "to"),
            trace: m.get_flag("trace"),
            word_size: m.get_one::<u32>("word_size").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CastParams> for CastArgs {
    fn from(p: CastParams) -> Self {
        Self {
            source: Source::new(p.manifest, p.word_size),
            from: p.from,
            to: p.to,
            trace: p.trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ReflectParams {
    pub manifest: PathBuf,
    pub ty: String,
    pub json: bool,
    pub word_size: Option<u32>,
    pub color: ColorChoice,
}

impl ReflectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            ty: required_string(m, "type"),
            json: m.get_flag("json"),
            word_size: m.get_one::<u32>("word_size").copied(),
            color: parse_color(m),
        }
    }
}

impl From<ReflectParams> for ReflectArgs {
    fn from(p: ReflectParams) -> Self {
        Self {
            source: Source::new(p.manifest, p.word_size),
            ty: p.ty,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LayoutParams {
    pub manifest: PathBuf,
    pub types: Vec<String>,
    pub word_size: Option<u32>,
    pub color: ColorChoice,
}

impl LayoutParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            types: m
                .get_many::<String>("types")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            word_size: m.get_one::<u32>("word_size").copied(),
            color: parse_color(m),
        }
    }
}

impl From<LayoutParams> for LayoutArgs {
    fn from(p: LayoutParams) -> Self {
        Self {
            source: Source::new(p.manifest, p.word_size),
            types: p.types,
            color: p.color.should_colorize(),
        }
    }
}

fn manifest_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest").cloned().unwrap_or_default()
}

fn required_string(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
