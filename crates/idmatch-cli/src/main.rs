mod cli;
mod commands;

use cli::{IdsParams, MatchParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matches::run(params.into());
        }
        Some(("ids", m)) => {
            let params = IdsParams::from_matches(m);
            commands::ids::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
