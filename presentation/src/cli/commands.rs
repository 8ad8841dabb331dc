//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for chartroom
#[derive(Parser, Debug)]
#[command(name = "chartroom")]
#[command(author, version, about = "Pitch and interview practice with a board of AI reviewers")]
#[command(long_about = r#"
Chartroom runs practice sessions for founders and candidates over HTTP and SMS.

A session collects messages and context, then finalize runs the persona
agents and writes a deck outline, reviewer reports, talking points and a
mock interview to the output directory.

Configuration files are loaded from (in priority order):
1. CHARTROOM_* environment variables (e.g. CHARTROOM_SERVER__BIND)
2. --config <path>        Explicit config file
3. ./chartroom.toml       Project-level config
4. ~/.config/chartroom/config.toml   Global config

Example:
  chartroom serve --bind 0.0.0.0:8080
  chartroom --show-config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API and SMS webhook (default)
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

impl Cli {
    /// Subcommand to run; `serve` when none was given
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { bind: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["chartroom"]).unwrap();
        assert_eq!(cli.command(), Command::Serve { bind: None });
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_with_flags() {
        let cli = Cli::try_parse_from([
            "chartroom",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "-vv",
            "--config",
            "prod.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Serve {
                bind: Some("0.0.0.0:8080".to_string())
            }
        );
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("prod.toml")));
    }

    #[test]
    fn test_show_config_flag() {
        let cli = Cli::try_parse_from(["chartroom", "--show-config", "--no-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.no_config);
    }
}
