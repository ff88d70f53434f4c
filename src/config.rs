//! Configuration System
//!
//! Loads configuration from a TOML file with environment variable
//! overrides. Every field has a default, so an empty file is valid.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the terminal portal keeps its session file
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("mediclean").to_string_lossy().to_string())
        .unwrap_or_else(|| "./mediclean_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Static site server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built frontend (`index.html` plus assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> String {
    "./mediclean-ui/dist".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl SiteConfig {
    /// Socket address to bind
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "site.host",
                value: self.host.clone(),
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid {
                key: "logging.format",
                value: s.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config = Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        config.expand_paths();
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from default locations with environment overrides.
    ///
    /// Nothing is logged here; call [`LoadedConfig::log`] once tracing is
    /// installed.
    pub fn load_default() -> LoadedConfig {
        Self::load_from(&Self::default_paths(), |key| std::env::var(key).ok())
    }

    /// First loadable file among `paths`, then overrides from `lookup`
    pub fn load_from(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> LoadedConfig {
        let mut issues = Vec::new();
        let mut loaded = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    loaded = Some((config, path.clone()));
                    break;
                }
                Err(e) => issues.push(e),
            }
        }

        let (mut config, source) = match loaded {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        issues.extend(config.apply_overrides(lookup));

        LoadedConfig {
            config,
            source,
            issues,
        }
    }

    /// Candidate config files, most specific last
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("mediclean").join("config.toml")),
            Some(PathBuf::from("./mediclean.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply `MEDICLEAN_*` overrides using `lookup` to read variables.
    ///
    /// Values that fail to parse are skipped and returned.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut issues = Vec::new();

        if let Some(data_dir) = lookup("MEDICLEAN_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(host) = lookup("MEDICLEAN_HOST") {
            self.site.host = host;
        }
        if let Some(port) = lookup("MEDICLEAN_PORT") {
            match port.parse() {
                Ok(p) => self.site.port = p,
                Err(_) => issues.push(ConfigError::Invalid {
                    key: "MEDICLEAN_PORT",
                    value: port,
                }),
            }
        }
        if let Some(dist_dir) = lookup("MEDICLEAN_DIST_DIR") {
            self.site.dist_dir = dist_dir;
        }

        if let Some(level) = lookup("MEDICLEAN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("MEDICLEAN_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => issues.push(e),
            }
        }

        self.expand_paths();
        issues
    }

    fn expand_paths(&mut self) {
        self.storage.data_dir = expand_home(&self.storage.data_dir);
        self.site.dist_dir = expand_home(&self.site.dist_dir);
    }
}

/// Replace a leading `~` with the home directory
pub fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return path.to_string(),
    };

    match dirs::home_dir() {
        Some(home) => home
            .join(rest.trim_start_matches(['/', '\\']))
            .to_string_lossy()
            .to_string(),
        None => path.to_string(),
    }
}

/// A configuration plus how it was found
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Files that failed to load and overrides that were ignored
    pub issues: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report where the configuration came from and what was skipped
    pub fn log(&self) {
        for issue in &self.issues {
            tracing::warn!("Ignoring configuration: {}", issue);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# MediClean Configuration
#
# Environment variables override these settings:
# - MEDICLEAN_DATA_DIR
# - MEDICLEAN_HOST
# - MEDICLEAN_PORT
# - MEDICLEAN_DIST_DIR
# - MEDICLEAN_LOG_LEVEL
# - MEDICLEAN_LOG_FORMAT

[storage]
# Directory holding the terminal portal's session file
data_dir = '{data_dir}'

[site]
# Site server host
host = "0.0.0.0"

# Site server port
port = 8080

# Built frontend to serve
dist_dir = "./mediclean-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        data_dir = default_data_dir()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{FileStore, SESSION_KEY};
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.site.addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.site.host, "0.0.0.0");
        assert_eq!(config.site.dist_dir, "./mediclean-ui/dist");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mediclean.toml");
        std::fs::write(&path, "[site]\nport = 9000\n\n[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.site.port, 9000);
        assert_eq!(config.site.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[site\nport = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        let issues = config.apply_overrides(lookup_from(&[
            ("MEDICLEAN_DATA_DIR", "/tmp/mc"),
            ("MEDICLEAN_PORT", "3000"),
            ("MEDICLEAN_DIST_DIR", "/srv/site"),
            ("MEDICLEAN_LOG_FORMAT", "JSON"),
        ]));

        assert_eq!(config.storage.data_dir, "/tmp/mc");
        assert_eq!(config.site.port, 3000);
        assert_eq!(config.site.dist_dir, "/srv/site");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        let issues = config.apply_overrides(lookup_from(&[
            ("MEDICLEAN_PORT", "eighty"),
            ("MEDICLEAN_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.site.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(issues.len(), 2);
        assert!(matches!(&issues[0], ConfigError::Invalid { key: "MEDICLEAN_PORT", .. }));
    }

    #[test]
    fn test_generated_config_stores_session_at_absolute_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, generate_default_config()).unwrap();

        let config = Config::load(&path).unwrap();
        let store = FileStore::new(&config.storage.data_dir);
        assert!(store.path_for(SESSION_KEY).is_absolute());
        assert!(!config.storage.data_dir.starts_with('~'));
    }

    #[test]
    fn test_home_expansion() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            expand_home("~/.local/share/mediclean"),
            home.join(".local/share/mediclean").to_string_lossy()
        );
        assert_eq!(expand_home("~"), home.to_string_lossy());
        assert_eq!(expand_home("~other/data"), "~other/data");
        assert_eq!(expand_home("/srv/mediclean"), "/srv/mediclean");

        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("MEDICLEAN_DATA_DIR", "~/mc")]));
        assert_eq!(config.storage.data_dir, home.join("mc").to_string_lossy());
    }

    #[test]
    fn test_load_from_reports_source_and_issues() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "[site\nport = ").unwrap();
        std::fs::write(&good, "[storage]\ndata_dir = \"~/mc\"\n").unwrap();

        let loaded = Config::load_from(
            &[dir.path().join("absent.toml"), bad, good.clone()],
            lookup_from(&[("MEDICLEAN_PORT", "eighty")]),
        );
        assert_eq!(loaded.source, Some(good));
        assert_eq!(loaded.issues.len(), 2);
        assert!(matches!(loaded.issues[0], ConfigError::Parse { .. }));
        assert!(!loaded.config.storage.data_dir.starts_with('~'));

        let defaults = Config::load_from(&[], lookup_from(&[]));
        assert_eq!(defaults.source, None);
        assert!(defaults.issues.is_empty());
        assert_eq!(defaults.config.site.port, 8080);
    }

    #[test]
    fn test_bad_host_rejected() {
        let site = SiteConfig {
            host: "not a host".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(site.addr(), Err(ConfigError::Invalid { key: "site.host", .. })));
    }
}
