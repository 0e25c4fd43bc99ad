//! CLI argument definitions for `course-planner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_planner::config::ConfigOverrides;
use course_planner::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `majors_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute the courses a student may take in a target semester.
    ///
    /// Loads a catalog JSON file and a student record JSON file, applies
    /// completion, semester-offering, and prerequisite filters, and prints
    /// the eligible courses.
    Plan {
        /// Path to the catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Path to the student record JSON file
        #[arg(value_name = "STUDENT")]
        student: PathBuf,

        /// Target semester tag (e.g., "Fall" or "Freshman Fall")
        #[arg(value_name = "SEMESTER")]
        semester: String,

        /// Majors table TOML file (overrides config and the built-in table)
        #[arg(long, value_name = "FILE")]
        majors: Option<PathBuf>,

        /// Print the full recommendation payload as JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Career path to carry into the recommendation payload
        #[arg(long, value_name = "PATH", default_value = "")]
        career_path: String,

        /// Side interests to carry into the recommendation payload
        #[arg(long, value_name = "INTEREST", num_args = 0..)]
        side_interests: Vec<String>,
    },
    /// Report progress toward a student's declared major.
    ///
    /// Walks the major's requirement tree against the student's completed
    /// courses and prints satisfied groups, outstanding deficits, and
    /// credit totals.
    Progress {
        /// Path to the catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Path to the student record JSON file
        #[arg(value_name = "STUDENT")]
        student: PathBuf,

        /// Majors table TOML file (overrides config and the built-in table)
        #[arg(long, value_name = "FILE")]
        majors: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseplanner",
    about = "course-planner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config majors table path
    #[arg(long = "config-majors-file", value_name = "FILE")]
    pub config_majors_file: Option<PathBuf>,

    /// Override config majors table path (short form)
    #[arg(long = "majors-file", value_name = "FILE")]
    pub majors_file: Option<PathBuf>,

    /// Override config minimum target credits
    #[arg(long = "credits-min", value_name = "CREDITS")]
    pub credits_min: Option<u32>,

    /// Override config maximum target credits
    #[arg(long = "credits-max", value_name = "CREDITS")]
    pub credits_max: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--majors-file`) take precedence over long-form flags (e.g.,
    /// `--config-majors-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            majors_file: self
                .majors_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_majors_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            credits_min: self.credits_min,
            credits_max: self.credits_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_majors_file: None,
            majors_file: None,
            credits_min: None,
            credits_max: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.majors_file.is_none());
        assert!(overrides.credits_min.is_none());
        assert!(overrides.credits_max.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.majors_file = Some(PathBuf::from("/tmp/majors.toml"));
        cli.credits_min = Some(12);
        cli.credits_max = Some(18);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.majors_file, Some("/tmp/majors.toml".to_string()));
        assert_eq!(overrides.credits_min, Some(12));
        assert_eq!(overrides.credits_max, Some(18));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_majors_file = Some(PathBuf::from("/long/majors.toml"));
        cli.majors_file = Some(PathBuf::from("/short/majors.toml"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.majors_file,
            Some("/short/majors.toml".to_string())
        );
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_majors_file = Some(PathBuf::from("/long/majors.toml"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.majors_file, Some("/long/majors.toml".to_string()));
    }
}
