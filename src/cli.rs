// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::path::PathBuf;

use crate::commands;
use crate::core::engine::Mode;

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .help("Path to the runner configuration file (optional)")
        .value_name("CONFIG")
        .default_value("SuiteRunner.toml")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn mode_flag(id: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let mut arg = Arg::new(id).long(id).help(help).action(ArgAction::SetTrue);
    if let Some(c) = short {
        arg = arg.short(c);
    }
    arg
}

fn build_cli() -> Command {
    Command::new("suite-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Test-suite orchestrator and local service launcher")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("test")
                .about("Run the automated test suite")
                .arg(config_arg())
                .arg(mode_flag("all", Some('a'), "Run all test projects (default)"))
                .arg(mode_flag("coverage", Some('c'), "Run all tests with code coverage"))
                .arg(mode_flag("unit", Some('u'), "Run only unit tests"))
                .arg(mode_flag("service", Some('s'), "Run only service tests"))
                .arg(mode_flag("integration", Some('i'), "Run only integration tests"))
                .arg(mode_flag("stdio", None, "Run only stdio/protocol tests"))
                .arg(mode_flag("fast", Some('f'), "Run tests without building"))
                .arg(mode_flag("watch", Some('w'), "Run tests in watch mode"))
                .group(
                    // One mode per invocation; clap rejects combinations.
                    ArgGroup::new("mode").args([
                        "all",
                        "coverage",
                        "unit",
                        "service",
                        "integration",
                        "stdio",
                        "fast",
                        "watch",
                    ]),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Build and start the service for local manual testing")
                .arg(config_arg()),
        )
}

/// Maps the mutually exclusive mode flags to one engine mode; no flag at all
/// means the default full run.
fn selected_mode(matches: &ArgMatches) -> Mode {
    if matches.get_flag("coverage") {
        Mode::Coverage
    } else if matches.get_flag("unit") {
        Mode::Scope("unit".to_string())
    } else if matches.get_flag("service") {
        Mode::Scope("service".to_string())
    } else if matches.get_flag("integration") {
        Mode::Scope("integration".to_string())
    } else if matches.get_flag("stdio") {
        Mode::Scope("stdio".to_string())
    } else if matches.get_flag("fast") {
        Mode::Fast
    } else if matches.get_flag("watch") {
        Mode::Watch
    } else {
        Mode::All
    }
}

/// Parses the CLI and dispatches to the selected subcommand, returning the
/// process exit code the caller should exit with.
pub async fn run() -> Result<i32> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("test", test_matches)) => {
            let config = test_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            let mode = selected_mode(test_matches);
            commands::test::execute(mode, config).await
        }
        Some(("serve", serve_matches)) => {
            let config = serve_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            commands::serve::execute(config).await
        }
        _ => unreachable!("subcommand is required"),
    }
}
