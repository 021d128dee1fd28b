//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `KILN_*` environment variables, sections separated by `__`
//!    (`KILN_OUTPUT__NO_COLOR=true`)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use kiln_core::domain::{DEFAULT_BOOT_VERSION, DEFAULT_JAVA_VERSION, MarkupPolicy};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a request leaves a field blank.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Generation settings.
    pub generation: GenerationConfig,
    /// Log sinks beyond stderr.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub version: String,
    pub java_version: String,
    pub boot_version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            version: "0.0.1-SNAPSHOT".into(),
            java_version: DEFAULT_JAVA_VERSION.into(),
            boot_version: DEFAULT_BOOT_VERSION.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub markup: MarkupPolicy,
    /// Extra catalog entries merged over the built-in table.
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs (without ANSI codes) to this file.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(config_file, Self::environment())
    }

    fn load_with(
        config_file: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match config_file {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(&Self::config_path().to_string_lossy(), FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// `KILN_<SECTION>__<KEY>` variables.
    ///
    /// Values stay strings so versions such as `2.0` are not reparsed as
    /// numbers; booleans are converted when deserialized.
    fn environment() -> Environment {
        Environment::with_prefix("KILN")
            .prefix_separator("_")
            .separator("__")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kiln.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_core_fallbacks() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.java_version, DEFAULT_JAVA_VERSION);
        assert_eq!(cfg.defaults.boot_version, DEFAULT_BOOT_VERSION);
        assert_eq!(cfg.generation.markup, MarkupPolicy::Escape);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = file_with("");
        assert_eq!(AppConfig::load(Some(file.path())).unwrap(), AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = file_with(
            r#"
            [defaults]
            java_version = "21"

            [generation]
            markup = "literal"
            catalog = "/etc/kiln/catalog.toml"
            "#,
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.defaults.java_version, "21");
        assert_eq!(cfg.defaults.boot_version, DEFAULT_BOOT_VERSION);
        assert_eq!(cfg.generation.markup, MarkupPolicy::Literal);
        assert_eq!(
            cfg.generation.catalog.as_deref(),
            Some(Path::new("/etc/kiln/catalog.toml"))
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/no/such/kiln.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = file_with("[defaults\njava_version = ");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn env_versions_keep_their_text() {
        let file = file_with("");
        let cfg = AppConfig::load_with(
            Some(file.path()),
            env(&[
                ("KILN_DEFAULTS__VERSION", "2.0"),
                ("KILN_DEFAULTS__JAVA_VERSION", "17.0"),
                ("KILN_DEFAULTS__BOOT_VERSION", "3.2.10"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.defaults.version, "2.0");
        assert_eq!(cfg.defaults.java_version, "17.0");
        assert_eq!(cfg.defaults.boot_version, "3.2.10");
    }

    #[test]
    fn env_booleans_and_paths_still_deserialize() {
        let file = file_with("");
        let cfg = AppConfig::load_with(
            Some(file.path()),
            env(&[
                ("KILN_OUTPUT__NO_COLOR", "true"),
                ("KILN_GENERATION__MARKUP", "literal"),
                ("KILN_LOGGING__FILE", "/var/log/kiln.log"),
            ]),
        )
        .unwrap();

        assert!(cfg.output.no_color);
        assert_eq!(cfg.generation.markup, MarkupPolicy::Literal);
        assert_eq!(cfg.logging.file.as_deref(), Some(Path::new("/var/log/kiln.log")));
    }

    #[test]
    fn env_overrides_file() {
        let file = file_with("[defaults]\nversion = \"1.0.0\"\n");
        let cfg =
            AppConfig::load_with(Some(file.path()), env(&[("KILN_DEFAULTS__VERSION", "1.1")]))
                .unwrap();
        assert_eq!(cfg.defaults.version, "1.1");
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
