//! Configuration module for `course-planner`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to a majors requirement table TOML file; empty means the
    /// compiled-in table
    #[serde(default)]
    pub majors_file: String,
}

/// Planning configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Minimum credits to target for a semester plan
    #[serde(default)]
    pub target_credits_min: u32,
    /// Maximum credits to target for a semester plan
    #[serde(default)]
    pub target_credits_max: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planning settings
    #[serde(default)]
    pub planning: PlanningConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override majors table path
    pub majors_file: Option<String>,
    /// Override minimum target credits
    pub credits_min: Option<u32>,
    /// Override maximum target credits
    pub credits_max: Option<u32>,
}

impl Config {
    /// Get the `$COURSE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseplanner`
    /// - macOS: `~/Library/Application Support/courseplanner`
    /// - Windows: `%APPDATA%\courseplanner`
    #[must_use]
    pub fn get_courseplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration to ensure that newly added
    /// configuration fields are populated with their default values. Only
    /// fields that are empty (or zero) in the current config and non-empty
    /// in defaults are updated.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.majors_file.is_empty() && !defaults.paths.majors_file.is_empty() {
            self.paths.majors_file.clone_from(&defaults.paths.majors_file);
            changed = true;
        }

        if self.planning.target_credits_min == 0 && defaults.planning.target_credits_min != 0 {
            self.planning.target_credits_min = defaults.planning.target_credits_min;
            changed = true;
        }
        if self.planning.target_credits_max == 0 && defaults.planning.target_credits_max != 0 {
            self.planning.target_credits_max = defaults.planning.target_credits_max;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// This allows command-line arguments to override configuration file
    /// values without modifying the persistent configuration file. Only
    /// non-`None` values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(majors_file) = &overrides.majors_file {
            self.paths.majors_file.clone_from(majors_file);
        }

        if let Some(credits_min) = overrides.credits_min {
            self.planning.target_credits_min = credits_min;
        }
        if let Some(credits_max) = overrides.credits_max {
            self.planning.target_credits_max = credits_max;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_courseplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_PLANNER` variable in a string
    ///
    /// Replaces occurrences of `$COURSE_PLANNER` with the actual
    /// courseplanner directory path so configuration values can reference
    /// the config directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$COURSE_PLANNER") {
            let planner_dir = Self::get_courseplanner_dir();
            value.replace("$COURSE_PLANNER", planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$COURSE_PLANNER`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.majors_file = Self::expand_variables(&config.paths.majors_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration that is bundled with
    /// the binary. The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled
    /// into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config.
    /// - If it doesn't exist (first run): creates the config directory,
    ///   saves the defaults, and returns them.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `majors_file`,
    /// `credits_min`, `credits_max`.
    ///
    /// # Returns
    /// The value as a string, or `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "majors_file" | "majors-file" => Some(self.paths.majors_file.clone()),
            "credits_min" | "credits-min" => Some(self.planning.target_credits_min.to_string()),
            "credits_max" | "credits-max" => Some(self.planning.target_credits_max.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed (e.g., "maybe" for the `verbose` boolean)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "majors_file" | "majors-file" => self.paths.majors_file = value.to_string(),
            "credits_min" | "credits-min" => {
                self.planning.target_credits_min = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid credit count for 'credits_min': '{value}'"))?;
            }
            "credits_max" | "credits-max" => {
                self.planning.target_credits_max = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid credit count for 'credits_max': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single configuration value to its default, taken from the
    /// provided defaults config (typically
    /// [`from_defaults()`](Config::from_defaults)). Call
    /// [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "majors_file" | "majors-file" => self
                .paths
                .majors_file
                .clone_from(&defaults.paths.majors_file),
            "credits_min" | "credits-min" => {
                self.planning.target_credits_min = defaults.planning.target_credits_min;
            }
            "credits_max" | "credits-max" => {
                self.planning.target_credits_max = defaults.planning.target_credits_max;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. If the
    /// config file doesn't exist, this succeeds without doing anything.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  majors_file = \"{}\"", self.paths.majors_file)?;

        writeln!(f, "\n[planning]")?;
        writeln!(
            f,
            "  target_credits_min = {}",
            self.planning.target_credits_min
        )?;
        writeln!(
            f,
            "  target_credits_max = {}",
            self.planning.target_credits_max
        )?;

        Ok(())
    }
}
