use clap::Parser;

/// Command-line configuration for the console.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "poker-showdown", version, about = "Compare two rank-only poker hands")]
pub struct Config {
    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter directive, e.g. `debug` or `poker_showdown=trace`
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { no_color: false, log_level: "warn".to_string() }
    }
}

impl Config {
    pub fn color(&self) -> bool {
        !self.no_color
    }
}
