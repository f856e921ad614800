//! Layered configuration for the Neura server.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from neura.toml)
//! - `~/.config/neura/neura.toml`
//! - `./neura.toml`
//! - A file passed explicitly (e.g. `--config`)
//! - Environment variables prefixed `NEURA__`, with `__` between sections
//!   (`NEURA__COMPLETION__API_KEY`, `NEURA__SERVER__BIND_ADDRESS`)

use config::{Config, Environment, File, FileFormat};
use neura_completion::CompletionConfig;
use neura_error::{ConfigError, NeuraResult};
use neura_illustration::IllustrationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../neura.toml");

/// Listener settings.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `"127.0.0.1:8000"`
    bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Log output settings.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. `"info"`, `"neura_story=debug"`)
    level: String,
    /// Emit JSON lines instead of human-readable logs
    json: bool,
    /// Also export spans to stdout through OpenTelemetry
    otel_stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            otel_stdout: false,
        }
    }
}

/// Complete server configuration.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct NeuraConfig {
    /// Listener settings
    server: ServerSettings,
    /// Log output settings
    logging: LoggingConfig,
    /// Text-generation provider
    completion: CompletionConfig,
    /// Image renderer
    illustration: IllustrationConfig,
}

impl NeuraConfig {
    /// Loads configuration from every source, `explicit` taking precedence
    /// over the user files and environment variables over everything.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `explicit` does not exist or any source
    /// fails to parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use neura_server::NeuraConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = NeuraConfig::load(None)?;
    /// println!("listening on {}", config.server().bind_address());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> NeuraResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/neura/neura.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("neura").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("NEURA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::deserialize_from(builder)
    }

    /// Parses a TOML document layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is not valid TOML or has
    /// values of the wrong type.
    pub fn from_toml_str(toml: &str) -> NeuraResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::deserialize_from(builder)
    }

    fn deserialize_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> NeuraResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        debug!(
            bind_address = %config.server.bind_address,
            completion_url = %config.completion.base_url(),
            has_api_key = config.completion.api_key().is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_struct_defaults() {
        let config = NeuraConfig::from_toml_str("").unwrap();
        assert_eq!(config, NeuraConfig::default());
    }

    #[test]
    fn document_overrides_single_values() {
        let config = NeuraConfig::from_toml_str(
            r#"
            [server]
            bind_address = "0.0.0.0:9000"

            [completion]
            model = "mistral"
            api_key = "from-file"
            "#,
        )
        .unwrap();
        assert_eq!(config.server().bind_address(), "0.0.0.0:9000");
        assert_eq!(config.completion().model(), "mistral");
        assert_eq!(config.completion().api_key().as_deref(), Some("from-file"));
        assert_eq!(*config.completion().timeout_secs(), 60);
        assert_eq!(*config.illustration().default_width(), 896);
    }

    #[test]
    fn wrong_types_are_config_errors() {
        let err = NeuraConfig::from_toml_str("[illustration]\ndefault_width = \"wide\"").unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = NeuraConfig::load(Some(Path::new("/nonexistent/neura-test.toml"))).unwrap_err();
        assert!(err.detail().contains("configuration"));
    }
}
