use std::path::PathBuf;

use idmatch_core::{ElementId, ResourceId, ResourceSet};
use idmatch_lib::{Comparison, IdentifierMatcher, Matcher};

use super::run_common::{build_matcher, init_logging, load_or_exit};
use crate::cli::OutputFormat;

pub struct MatchArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    pub origin: Option<PathBuf>,
    pub id_attribute: Option<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: bool,
    pub log_level: Option<String>,
}

pub fn run(args: MatchArgs) {
    init_logging(args.log_level.as_deref());

    let mut set = ResourceSet::new();
    let left = load_or_exit(&mut set, &args.left);
    let right = load_or_exit(&mut set, &args.right);
    let origin = args.origin.as_deref().map(|p| load_or_exit(&mut set, p));

    let matcher = build_matcher(args.id_attribute.as_deref());
    let comparison = compare(&set, &matcher, left, right, origin);

    match args.format {
        OutputFormat::Tree => {
            print!(
                "{}",
                comparison
                    .printer()
                    .labels(|e| set.describe(e))
                    .colored(args.color)
                    .render()
            );
            eprint!("{}", comparison.diagnostics().render_colored(args.color));
        }
        OutputFormat::Json => match comparison.to_json(|e| set.describe(e), true) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }

    let diagnostics = comparison.diagnostics();
    if diagnostics.has_errors() || (args.strict && diagnostics.has_warnings()) {
        std::process::exit(1);
    }
}

/// Run `matcher` over whole resources, in containment order.
pub fn compare(
    set: &ResourceSet,
    matcher: &IdentifierMatcher<ResourceSet>,
    left: ResourceId,
    right: ResourceId,
    origin: Option<ResourceId>,
) -> Comparison<ElementId> {
    let mut comparison = Comparison::new();
    let mut origin_elements = origin.into_iter().flat_map(move |o| set.elements(o));
    matcher.create_matches(
        set,
        &mut comparison,
        &mut set.elements(left),
        &mut set.elements(right),
        &mut origin_elements,
    );
    comparison
}
