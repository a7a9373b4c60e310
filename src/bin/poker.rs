use clap::Parser;
use poker_showdown::config::Config;
use poker_showdown::shell::Shell;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.color() && io::stderr().is_terminal())
        .init();
}

fn main() -> io::Result<ExitCode> {
    let mut config = Config::parse();
    if !io::stdout().is_terminal() {
        config.no_color = true;
    }
    init_logging(&config);
    event!(Level::DEBUG, version = poker_showdown::VERSION, ?config, "starting console");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), &config);
    let summary = shell.run()?;

    event!(Level::INFO, rounds = summary.rounds, end = ?summary.end, "session finished");
    if summary.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
