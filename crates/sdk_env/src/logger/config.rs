//!
//! Logger-specific config.
//!

use std::path::PathBuf;

use serde::Deserialize;

use crate::env;

/// Defaults shipped with the crate; everything else overrides them.
const DEFAULT_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/default.toml"
));

/// Prefix of environment variables overriding the config, e.g. `PAYMENT_SDK__LOG__CONSOLE__LEVEL`.
pub const ENV_PREFIX: &str = "PAYMENT_SDK";

/// Config settings.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Logging to a console.
    pub log: Log,
}

/// Log config settings.
#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    /// Logging to a console.
    pub console: LogConsole,
}

/// Logging to a console.
#[derive(Debug, Deserialize, Clone)]
pub struct LogConsole {
    /// Whether you want to see log in your terminal.
    pub enabled: bool,
    /// What you see in your terminal.
    pub level: Level,
    /// Log format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Describes the level of verbosity of a span or event.
#[derive(Debug, Clone, Copy)]
pub struct Level(pub(super) tracing::Level);

impl Level {
    /// Returns the most verbose [`tracing::Level`]
    pub fn into_level(&self) -> tracing::Level {
        self.0
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::str::FromStr as _;

        let s = String::deserialize(deserializer)?;
        tracing::Level::from_str(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// Telemetry / tracing.
#[derive(Default, Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default pretty log format
    #[default]
    Default,
    /// JSON based structured logging
    Json,
}

impl Config {
    /// Default constructor.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Constructor expecting config path set explicitly.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let environment = env::which();
        let config_path = Self::config_path(environment, explicit_config_path);

        Self::load(config_path, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Layers the file at `config_path` (if present) and then `environment` over the defaults.
    fn load(
        config_path: PathBuf,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let config = Self::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(environment.try_parsing(true).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builder seeded with the defaults embedded in the crate.
    pub fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
    }

    /// Config path.
    pub fn config_path(environment: env::Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| {
            let mut config_path = env::workspace_path();
            config_path.push("config");
            config_path.push(environment.config_file_name());
            config_path
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn embedded_defaults_deserialize() {
        let config: Config = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.log.console.enabled);
        assert_eq!(config.log.console.level.into_level(), tracing::Level::INFO);
        assert_eq!(config.log.console.log_format, LogFormat::Default);
    }

    #[test]
    fn overrides_take_precedence_over_defaults() {
        let overrides = r#"
            [log.console]
            level = "debug"
            log_format = "json"
        "#;
        let config: Config = Config::builder()
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.log.console.enabled);
        assert_eq!(config.log.console.level.into_level(), tracing::Level::DEBUG);
        assert_eq!(config.log.console.log_format, LogFormat::Json);
    }

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<config::Map<_, _>>();

        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn environment_file_overrides_defaults() {
        let config = Config::load(fixture("sandbox.toml"), environment(&[])).unwrap();

        assert!(config.log.console.enabled);
        assert_eq!(config.log.console.level.into_level(), tracing::Level::WARN);
        assert_eq!(config.log.console.log_format, LogFormat::Json);
    }

    #[test]
    fn environment_variables_override_the_file() {
        let config = Config::load(
            fixture("sandbox.toml"),
            environment(&[
                ("PAYMENT_SDK__LOG__CONSOLE__LEVEL", "debug"),
                ("PAYMENT_SDK__LOG__CONSOLE__ENABLED", "false"),
            ]),
        )
        .unwrap();

        assert!(!config.log.console.enabled);
        assert_eq!(config.log.console.level.into_level(), tracing::Level::DEBUG);
        assert_eq!(config.log.console.log_format, LogFormat::Json);
    }

    #[test]
    fn variables_without_the_prefix_are_ignored() {
        let config = Config::load(
            fixture("absent.toml"),
            environment(&[("LOG__CONSOLE__LEVEL", "error")]),
        )
        .unwrap();

        assert_eq!(config.log.console.level.into_level(), tracing::Level::INFO);
    }

    #[test]
    fn explicit_config_path_is_used_as_is() {
        let path = fixture("sandbox.toml");
        assert_eq!(Config::config_path(env::Env::Production, Some(path.clone())), path);

        let config = Config::new_with_config_path(Some(path)).unwrap();
        assert_eq!(config.log.console.log_format, LogFormat::Json);
    }

    #[test]
    fn default_config_path_is_per_environment() {
        let path = Config::config_path(env::Env::Sandbox, None);

        assert!(path.ends_with("config/sandbox.toml"));
    }

    #[test]
    fn rejects_unknown_level() {
        let overrides = r#"
            [log.console]
            level = "loud"
        "#;
        let config = Config::builder()
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<Config>();

        assert!(config.is_err());
    }
}
