use clap::Parser;
use log::{debug, LevelFilter};
use optedit::{cli::Cli, prelude::*};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // `--help` and `--version` also arrive here, and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let costs = args.costs.resolve();
    debug!("costs: {costs}");

    let planner = EditPlanner::new(costs);
    let from = args.from.chars().collect::<Vec<_>>();
    let to = args.to.chars().collect::<Vec<_>>();
    match planner.plan(&from, &to) {
        Ok(script) => {
            print!("{}", optedit::cli::render(&script, &costs, &args));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
