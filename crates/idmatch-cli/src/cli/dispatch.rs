//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::ids::IdsArgs;
use crate::commands::matches::MatchArgs;

pub struct MatchParams {
    pub left: PathBuf,
    pub right: PathBuf,
    pub origin: Option<PathBuf>,
    pub id_attribute: Option<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: ColorChoice,
    pub log_level: Option<String>,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: required_path(m, "left"),
            right: required_path(m, "right"),
            origin: m.get_one::<PathBuf>("origin").cloned(),
            id_attribute: m.get_one::<String>("id_attribute").cloned(),
            format: parse_format(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            log_level: m.get_one::<String>("log_level").cloned(),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            left: p.left,
            right: p.right,
            origin: p.origin,
            id_attribute: p.id_attribute,
            format: p.format,
            strict: p.strict,
            color: p.color.should_colorize(),
            log_level: p.log_level,
        }
    }
}

pub struct IdsParams {
    pub file: PathBuf,
    pub id_attribute: Option<String>,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl IdsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            id_attribute: m.get_one::<String>("id_attribute").cloned(),
            format: parse_format(m),
            log_level: m.get_one::<String>("log_level").cloned(),
        }
    }
}

impl From<IdsParams> for IdsArgs {
    fn from(p: IdsParams) -> Self {
        Self {
            file: p.file,
            id_attribute: p.id_attribute,
            format: p.format,
            log_level: p.log_level,
        }
    }
}

/// Required positionals are enforced by clap before dispatch.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Tree,
    }
}
