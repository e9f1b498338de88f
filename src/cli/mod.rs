//! One-shot command-line interface over the core derivations.

pub mod input;
pub mod render;

use std::{env, path::PathBuf};

use crate::errors::CliError;

use render::ReportStyle;

/// Entry point for the `membership_core_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return Err(CliError::Usage("missing command".into()));
    };

    match command.as_str() {
        "report" => {
            let family = input::load_roster(&roster_path(args.next())?)?;
            render::print_family_report(&family, &ReportStyle::detect());
        }
        "periods" => {
            let family = input::load_roster(&roster_path(args.next())?)?;
            render::print_periods(&family, &family.periods(), &ReportStyle::detect());
        }
        "json" => {
            let family = input::load_roster(&roster_path(args.next())?)?;
            println!("{}", serde_json::to_string_pretty(&family.report())?);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            print_usage();
            return Err(CliError::Usage(format!("unknown command: {other}")));
        }
    }

    Ok(())
}

fn roster_path(arg: Option<String>) -> Result<PathBuf, CliError> {
    arg.map(PathBuf::from).ok_or_else(|| {
        print_usage();
        CliError::Usage("missing roster file".into())
    })
}

fn print_usage() {
    eprintln!("Usage: membership_core_cli <command> <roster.json>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  report   <roster.json>   period overview and per-member statements");
    eprintln!("  periods  <roster.json>   period overview only");
    eprintln!("  json     <roster.json>   full report as pretty-printed JSON");
    eprintln!("  help                     show this message");
}
