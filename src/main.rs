mod cli;

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;

use aidd::clone::{CloneEngine, CloneOptions, CloneReport, CloneReporter};
use aidd::error::{CloneError, Result};
use aidd::template;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    match run(cli) {
        Ok(report) => {
            render_report(&report, verbose);
            ExitCode::SUCCESS
        }
        Err(err) => {
            render_failure(&err, verbose);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<CloneReport> {
    let template_root = template::resolve_root(cli.template_root)?;

    let options = CloneOptions {
        target_directory: cli.target_directory,
        force: cli.force,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        cursor: cli.cursor,
    };

    CloneEngine::new(template_root, options).execute()
}

fn render_report(report: &CloneReport, verbose: bool) {
    if verbose {
        print!("{}", CloneReporter::action_lines(report));
    }
    print!("{}", CloneReporter::generate_summary(report));
}

fn render_failure(err: &CloneError, verbose: bool) {
    eprintln!("error[{}]: {err}", err.code());
    eprintln!("hint: {}", err.hint());

    if verbose {
        let mut cause = err.source();
        while let Some(c) = cause {
            eprintln!("caused by: {c}");
            cause = c.source();
        }
    }
}
