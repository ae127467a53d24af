//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Left model file (positional).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .value_name("LEFT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Left model file")
}

/// Right model file (positional).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .value_name("RIGHT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Right model file")
}

/// Common ancestor model file (positional, optional).
pub fn origin_arg() -> Arg {
    Arg::new("origin")
        .value_name("ORIGIN")
        .value_parser(value_parser!(PathBuf))
        .help("Common ancestor model file (three-way comparison)")
}

/// Single model file (positional).
pub fn model_file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Model file")
}

/// Identify elements by a named attribute (--id-attribute).
pub fn id_attribute_arg() -> Arg {
    Arg::new("id_attribute")
        .long("id-attribute")
        .value_name("NAME")
        .help("Identify elements by this attribute instead of registry IDs and ID attributes")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("tree")
        .value_parser(["tree", "json"])
        .help("Output format")
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

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Exit with failure when any diagnostic is reported")
}

/// Log filter (--log-level).
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("FILTER")
        .help("Log filter, e.g. `debug` or `idmatch_lib=trace` (default: RUST_LOG, then `warn`)")
}
