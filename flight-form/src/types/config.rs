use std::path::PathBuf;

use super::form_error::FormError;

pub const LOG_DIR_ENV: &str = "FLIGHT_FORM_LOG_DIR";
pub const AIRPORTS_ENV: &str = "FLIGHT_FORM_AIRPORTS";
const DEFAULT_LOG_DIR: &str = "logs";

pub const USAGE: &str = "Usage: flight-form [--log-dir <dir>] [--airports <csv>] [--quiet]";

/// Startup settings of the console.
///
/// Command-line flags win over environment variables, which win over the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    /// CSV with `code,latitude,longitude`. `None` uses the embedded table.
    pub airports: Option<PathBuf>,
    /// Echo log records to stdout.
    pub console: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            airports: None,
            console: true,
        }
    }
}

impl Config {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self, FormError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Builds a `Config` from arguments (without the program name) and an environment lookup.
    ///
    /// # Errors
    /// - `FormError::Config` - On an unknown flag, a flag missing its value, or an empty path.
    pub fn parse<F>(args: &[String], env: F) -> Result<Self, FormError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = env(LOG_DIR_ENV) {
            config.log_dir = non_empty_path(LOG_DIR_ENV, &dir)?;
        }
        if let Some(path) = env(AIRPORTS_ENV) {
            config.airports = Some(non_empty_path(AIRPORTS_ENV, &path)?);
        }

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-dir" => {
                    let value = args.next().ok_or_else(|| missing_value(arg))?;
                    config.log_dir = non_empty_path(arg, value)?;
                }
                "--airports" => {
                    let value = args.next().ok_or_else(|| missing_value(arg))?;
                    config.airports = Some(non_empty_path(arg, value)?);
                }
                "--quiet" | "-q" => config.console = false,
                other => {
                    return Err(FormError::Config(format!(
                        "unknown argument '{}'. {}",
                        other, USAGE
                    )))
                }
            }
        }

        Ok(config)
    }
}

fn missing_value(flag: &str) -> FormError {
    FormError::Config(format!("{} expects a value. {}", flag, USAGE))
}

fn non_empty_path(name: &str, value: &str) -> Result<PathBuf, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Config(format!("{} must not be empty", name)));
    }
    Ok(PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse(&[], no_env).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.console);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse(
            &args(&["--log-dir", "/tmp/ff", "--airports", "airports.csv", "--quiet"]),
            no_env,
        )
        .unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/ff"));
        assert_eq!(config.airports, Some(PathBuf::from("airports.csv")));
        assert!(!config.console);
    }

    #[test]
    fn test_environment_is_overridden_by_flags() {
        let env = |key: &str| match key {
            LOG_DIR_ENV => Some("/var/log/ff".to_string()),
            AIRPORTS_ENV => Some("env.csv".to_string()),
            _ => None,
        };
        let from_env = Config::parse(&[], env).unwrap();
        assert_eq!(from_env.log_dir, PathBuf::from("/var/log/ff"));
        assert_eq!(from_env.airports, Some(PathBuf::from("env.csv")));

        let overridden = Config::parse(&args(&["--airports", "flag.csv"]), env).unwrap();
        assert_eq!(overridden.airports, Some(PathBuf::from("flag.csv")));
        assert_eq!(overridden.log_dir, PathBuf::from("/var/log/ff"));
    }

    #[test]
    fn test_missing_value() {
        let result = Config::parse(&args(&["--log-dir"]), no_env);
        assert!(matches!(result, Err(FormError::Config(_))));
    }

    #[test]
    fn test_unknown_flag() {
        let result = Config::parse(&args(&["--verbose"]), no_env);
        assert!(matches!(result, Err(FormError::Config(_))));
    }

    #[test]
    fn test_empty_path() {
        let result = Config::parse(&args(&["--airports", "  "]), no_env);
        assert!(matches!(result, Err(FormError::Config(_))));
    }
}
