//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for cognify
#[derive(Parser, Debug)]
#[command(name = "cognify")]
#[command(author, version, about = "AI-powered study assistant - quizzes, summaries and glossaries")]
#[command(long_about = r#"
Cognify serves an HTTP API that turns study material into quizzes,
summaries and glossaries. Requests go to Google Gemini when an API key is
available and fall back to an offline stand-in otherwise.

Configuration files are loaded from (in priority order):
1. COGNIFY_* environment variables (e.g. COGNIFY_SERVER__BIND_ADDRESS)
2. --config <path>     Explicit config file
3. ./cognify.toml      Project-level config
4. ~/.config/cognify/config.toml   Global config

Example:
  cognify
  GOOGLE_API_KEY=... cognify --bind 0.0.0.0:8000 -v
  cognify --show-config
"#)]
pub struct Cli {
    /// Address to listen on (overrides [server] bind_address)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Base tracing filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "cognify",
            "--bind",
            "0.0.0.0:9000",
            "-vv",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(!cli.no_config);
        assert!(!cli.show_config);
    }

    #[test]
    fn test_default_log_level_is_warn() {
        let cli = Cli::parse_from(["cognify"]);
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(Cli::parse_from(["cognify", "-vvvv"]).log_level(), "trace");
    }
}
