//! Configuration management for RW.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `router.routes`
//!
//! ## Example
//!
//! ```toml
//! [router]
//! routes = "dist/routes.json"
//! clean_urls = true
//! max_redirects = 10
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override route manifest path.
    pub routes: Option<PathBuf>,
    /// Override clean URL redirects flag.
    pub clean_urls: Option<bool>,
    /// Override redirect limit.
    pub max_redirects: Option<u8>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Default route manifest location, relative to the config directory.
const DEFAULT_ROUTES: &str = "dist/routes.json";

/// Default redirect limit per navigation.
const DEFAULT_MAX_REDIRECTS: u8 = 10;

/// Upper bound accepted for `router.max_redirects`.
const MAX_REDIRECTS_LIMIT: u8 = 100;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Router configuration (paths are relative strings from TOML).
    router: RouterConfigRaw,

    /// Resolved router configuration (set after loading).
    #[serde(skip)]
    pub router_resolved: RouterConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw router configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RouterConfigRaw {
    routes: Option<String>,
    clean_urls: Option<bool>,
    max_redirects: Option<u8>,
}

/// Resolved router configuration with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Route manifest written by the site build.
    pub routes: PathBuf,
    /// Whether `/foo` and `/foo/` are redirected to existing siblings.
    pub clean_urls: bool,
    /// Maximum number of redirects followed for one navigation.
    pub max_redirects: u8,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            routes: PathBuf::from(DEFAULT_ROUTES),
            clean_urls: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`router.routes`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(routes) = &settings.routes {
            self.router_resolved.routes.clone_from(routes);
        }
        if let Some(clean_urls) = settings.clean_urls {
            self.router_resolved.clean_urls = clean_urls;
        }
        if let Some(max_redirects) = settings.max_redirects {
            self.router_resolved.max_redirects = max_redirects;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_config_from(&start)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            router: RouterConfigRaw::default(),
            router_resolved: RouterConfig {
                routes: base.join(DEFAULT_ROUTES),
                ..RouterConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_router()
    }

    /// Validate router configuration.
    fn validate_router(&self) -> Result<(), ConfigError> {
        require_non_empty(
            &self.router_resolved.routes.to_string_lossy(),
            "router.routes",
        )?;

        let max_redirects = self.router_resolved.max_redirects;
        if max_redirects == 0 {
            return Err(ConfigError::Validation(
                "router.max_redirects must be greater than 0".to_owned(),
            ));
        }
        if max_redirects > MAX_REDIRECTS_LIMIT {
            return Err(ConfigError::Validation(format!(
                "router.max_redirects cannot exceed {MAX_REDIRECTS_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref routes) = self.router.routes {
            self.router.routes = Some(expand::expand_env(routes, "router.routes")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let routes = self.router.routes.as_deref().unwrap_or(DEFAULT_ROUTES);

        self.router_resolved = RouterConfig {
            routes: config_dir.join(routes),
            clean_urls: self.router.clean_urls.unwrap_or(true),
            max_redirects: self.router.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.router_resolved,
            RouterConfig {
                routes: PathBuf::from("/test/dist/routes.json"),
                clean_urls: true,
                max_redirects: 10,
            }
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.router_resolved.routes,
            PathBuf::from("/project/dist/routes.json")
        );
        assert!(config.router_resolved.clean_urls);
    }

    #[test]
    fn test_parse_router_config() {
        let toml = r#"
[router]
routes = "public/routes.yaml"
clean_urls = false
max_redirects = 3
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.router_resolved,
            RouterConfig {
                routes: PathBuf::from("/project/public/routes.yaml"),
                clean_urls: false,
                max_redirects: 3,
            }
        );
    }

    #[test]
    fn test_absolute_routes_path_kept() {
        let toml = r#"
[router]
routes = "/srv/site/routes.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.router_resolved.routes,
            PathBuf::from("/srv/site/routes.json")
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_max_redirects() {
        let toml = r"
[router]
max_redirects = 300
";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "[router]\nroutes = \"out/routes.json\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.router_resolved.routes, dir.path().join("out/routes.json"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/rw.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("/nonexistent/rw.toml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "[router\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "[router]\nmax_redirects = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("rw.toml"), "").unwrap();

        let found = Config::discover_config_from(&nested);

        assert_eq!(found, Some(dir.path().join("rw.toml")));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("rw.toml"), "").unwrap();
        std::fs::write(nested.join("rw.toml"), "").unwrap();

        let found = Config::discover_config_from(&nested);

        assert_eq!(found, Some(nested.join("rw.toml")));
    }

    #[test]
    fn test_apply_cli_settings_routes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            routes: Some(PathBuf::from("/custom/routes.json")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.router_resolved.routes,
            PathBuf::from("/custom/routes.json")
        );
        assert!(config.router_resolved.clean_urls); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_clean_urls_and_limit() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            clean_urls: Some(false),
            max_redirects: Some(2),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.router_resolved.clean_urls);
        assert_eq!(config.router_resolved.max_redirects, 2);
        assert_eq!(
            config.router_resolved.routes,
            PathBuf::from("/test/dist/routes.json")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let config_before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.router_resolved, config_before.router_resolved);
    }

    #[test]
    fn test_load_applies_and_validates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            max_redirects: Some(101),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_expand_env_vars_routes() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_RW_OUT_DIR", "build");
        }

        let toml = r#"
[router]
routes = "${TEST_RW_OUT_DIR}/routes.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.router_resolved.routes,
            PathBuf::from("/project/build/routes.json")
        );

        unsafe {
            std::env::remove_var("TEST_RW_OUT_DIR");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_CONFIG_TEST");
        }

        let toml = r#"
[router]
routes = "${MISSING_VAR_CONFIG_TEST}/routes.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_CONFIG_TEST"));
        assert!(err.to_string().contains("router.routes"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_routes_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.router_resolved.routes = PathBuf::new();
        assert_validation_error(&config, &["router.routes", "empty"]);
    }

    #[test]
    fn test_validate_max_redirects_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.router_resolved.max_redirects = 0;
        assert_validation_error(&config, &["max_redirects", "greater than 0"]);
    }

    #[test]
    fn test_validate_max_redirects_too_high() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.router_resolved.max_redirects = 101;
        assert_validation_error(&config, &["max_redirects", "100"]);
    }

    #[test]
    fn test_validate_max_redirects_at_limit() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.router_resolved.max_redirects = 100;
        assert!(config.validate().is_ok());
    }
}
