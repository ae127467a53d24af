//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("idmatch")
        .about("Identifier-based three-way model matching")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(ids_command())
}

/// Match the elements of two or three models.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Build the match forest of two or three models")
        .override_usage(
            "\
  idmatch match <LEFT> <RIGHT>
  idmatch match <LEFT> <RIGHT> <ORIGIN>",
        )
        .after_help(
            r#"EXAMPLES:
  idmatch match left.json right.json              # two-way
  idmatch match left.json right.json base.json    # three-way
  idmatch match a.json b.json --id-attribute key  # match by attribute
  idmatch match a.json b.json --format json       # forest and diagnostics as JSON"#,
        )
        .arg(left_arg())
        .arg(right_arg())
        .arg(origin_arg())
        .arg(id_attribute_arg())
        .arg(format_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(log_level_arg())
}

/// List computed identifiers.
pub fn ids_command() -> Command {
    Command::new("ids")
        .about("List each element of a model with its identifier")
        .after_help(
            r#"EXAMPLES:
  idmatch ids left.json
  idmatch ids left.json --id-attribute key
  idmatch ids left.json --format json"#,
        )
        .arg(model_file_arg())
        .arg(id_attribute_arg())
        .arg(format_arg())
        .arg(log_level_arg())
}
