use std::path::PathBuf;

use idmatch_core::{ElementId, Model, ResourceSet};
use idmatch_lib::IdentifierMatcher;

use super::run_common::{build_matcher, init_logging, load_or_exit};
use crate::cli::OutputFormat;

pub struct IdsArgs {
    pub file: PathBuf,
    pub id_attribute: Option<String>,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct IdEntry {
    pub element: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub proxy: bool,
    pub identifier: Option<String>,
}

pub fn run(args: IdsArgs) {
    init_logging(args.log_level.as_deref());

    let mut set = ResourceSet::new();
    let resource = load_or_exit(&mut set, &args.file);
    let matcher = build_matcher(args.id_attribute.as_deref());
    let entries = collect_ids(&set, &matcher, set.elements(resource));

    match args.format {
        OutputFormat::Tree => print!("{}", render_ids(&entries)),
        OutputFormat::Json => match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

pub fn collect_ids(
    set: &ResourceSet,
    matcher: &IdentifierMatcher<ResourceSet>,
    elements: impl Iterator<Item = ElementId>,
) -> Vec<IdEntry> {
    elements
        .map(|e| IdEntry {
            element: set.describe(e),
            depth: depth(set, e),
            proxy: set.is_proxy(e),
            identifier: matcher.identify(set, e),
        })
        .collect()
}

/// One line per element, indented by containment depth.
pub fn render_ids(entries: &[IdEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let id = entry.identifier.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:indent$}{}  {}\n",
            "",
            entry.element,
            id,
            indent = entry.depth * 2
        ));
    }
    out
}

fn depth(set: &ResourceSet, element: ElementId) -> usize {
    std::iter::successors(set.container(element), |&e| set.container(e)).count()
}
