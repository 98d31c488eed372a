//! Generator configuration.
//!
//! Values come from, lowest to highest precedence: built-in defaults, an
//! optional TOML file, then whatever the caller overrides (the CLI flags).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Input document read when nothing else is configured.
pub const DEFAULT_INPUT: &str = "openapi.yml";
/// Output file written when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "sdk.go";
/// API host baked into generated request calls.
pub const DEFAULT_API_HOST: &str = "http://localhost:1317";
/// Column width used to wrap doc comments.
pub const DEFAULT_LINE_LENGTH: usize = 100;
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "wasm-sdk.toml";

/// Everything the pipeline needs to know, passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Location of the specification document.
    pub input: PathBuf,
    /// Location of the generated Go file.
    pub output: PathBuf,
    /// Host passed to the request helper by every generated function.
    pub api_host: String,
    /// Doc comment wrap width. `0` selects [`DEFAULT_LINE_LENGTH`].
    pub line_length: usize,
    /// Package clause of the generated file.
    pub package_name: String,
    /// Name reported by the generated version query.
    pub sdk_name: String,
    /// Version reported by the generated version query.
    pub sdk_version: String,
    /// Prefix prepended to each OperationID to name its function.
    pub function_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            api_host: DEFAULT_API_HOST.to_string(),
            line_length: DEFAULT_LINE_LENGTH,
            package_name: "main".to_string(),
            sdk_name: "COSM-SDK".to_string(),
            sdk_version: env!("CARGO_PKG_VERSION").to_string(),
            function_prefix: "call".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config.");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Effective doc comment wrap width.
    pub fn wrap_width(&self) -> usize {
        if self.line_length == 0 {
            DEFAULT_LINE_LENGTH
        } else {
            self.line_length
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.input, PathBuf::from("openapi.yml"));
        assert_eq!(cfg.output, PathBuf::from("sdk.go"));
        assert_eq!(cfg.api_host, "http://localhost:1317");
        assert_eq!(cfg.wrap_width(), 100);
        assert_eq!(cfg.function_prefix, "call");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg = GeneratorConfig::from_toml_str(
            r#"
input = "docs/static/openapi.yml"
api_host = "https://lcd.example.org"
line_length = 0
"#,
        )
        .unwrap();

        assert_eq!(cfg.input, PathBuf::from("docs/static/openapi.yml"));
        assert_eq!(cfg.api_host, "https://lcd.example.org");
        assert_eq!(cfg.output, PathBuf::from("sdk.go"));
        assert_eq!(cfg.wrap_width(), DEFAULT_LINE_LENGTH);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(GeneratorConfig::from_toml_str("colour = \"blue\"\n").is_err());
    }

    #[test]
    fn test_discover_prefers_explicit_then_local_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            GeneratorConfig::discover(None, dir.path()).unwrap(),
            GeneratorConfig::default()
        );

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "package_name = \"sdk\"\n").unwrap();
        let local = GeneratorConfig::discover(None, dir.path()).unwrap();
        assert_eq!(local.package_name, "sdk");

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "package_name = \"other\"\n").unwrap();
        let cfg = GeneratorConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(cfg.package_name, "other");
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "line_length = \"wide\"\n").unwrap();

        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
