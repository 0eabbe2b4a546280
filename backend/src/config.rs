//! Configuration file support.
//!
//! Settings are read from a TOML file. Every field has a default, so a missing file or a
//! partial file is fine:
//!
//! ```toml
//! [repository]
//! type = "remote"            # or "local"
//! venues_url = "https://..."
//! artists_url = "https://..."
//! venues_path = "data/venues.csv"
//! artists_path = "data/artists.csv"
//! timeout_secs = 30
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [map]
//! artist_path_order = "source"   # or "location_number"
//! year_min = 1900
//! year_max = 2000
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::db::factory::RepositoryType;
use crate::db::repository::RepositoryError;
use crate::models::{YEAR_SLIDER_MAX, YEAR_SLIDER_MIN};
use crate::services::artist_map::ArtistPathOrder;

/// CSV export of the venue tab of the project spreadsheet.
pub const DEFAULT_VENUES_URL: &str = "https://docs.google.com/spreadsheets/d/1gohOWra462LpOoNbmK9yos1epTlem2f9KnxwVHGSYcU/export?format=csv&gid=714094255";
/// CSV export of the artist tab of the project spreadsheet.
pub const DEFAULT_ARTISTS_URL: &str = "https://docs.google.com/spreadsheets/d/1gohOWra462LpOoNbmK9yos1epTlem2f9KnxwVHGSYcU/export?format=csv&gid=0";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "JAZZ_MAP_CONFIG";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub map: MapSettings,
}

/// Where the two sheets come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    #[serde(default = "default_venues_url")]
    pub venues_url: String,
    #[serde(default = "default_artists_url")]
    pub artists_url: String,
    #[serde(default)]
    pub venues_path: Option<PathBuf>,
    #[serde(default)]
    pub artists_path: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            venues_url: default_venues_url(),
            artists_url: default_artists_url(),
            venues_path: None,
            artists_path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RepositorySettings {
    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repo_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Rendering options for both maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    #[serde(default)]
    pub artist_path_order: ArtistPathOrder,
    /// Lower bound of the year slider
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    /// Upper bound of the year slider
    #[serde(default = "default_year_max")]
    pub year_max: i32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            artist_path_order: ArtistPathOrder::default(),
            year_min: default_year_min(),
            year_max: default_year_max(),
        }
    }
}

fn default_repo_type() -> String {
    "remote".to_string()
}

fn default_venues_url() -> String {
    DEFAULT_VENUES_URL.to_string()
}

fn default_artists_url() -> String {
    DEFAULT_ARTISTS_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_year_min() -> i32 {
    YEAR_SLIDER_MIN
}

fn default_year_max() -> i32 {
    YEAR_SLIDER_MAX
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Uses `$JAZZ_MAP_CONFIG` when set, otherwise searches for `jazz-map.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file is found.
    pub fn load() -> Result<Self, RepositoryError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            info!(path = %path, "loading configuration");
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("jazz-map.toml"),
            PathBuf::from("backend/jazz-map.toml"),
            PathBuf::from("../jazz-map.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                info!(path = %path.display(), "loading configuration");
                return Self::from_file(&path);
            }
        }

        info!("no jazz-map.toml found, using defaults");
        Ok(Self::default())
    }

    /// Apply `HOST` and `PORT` environment overrides to the server settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        self
    }

    fn validate(&self) -> Result<(), RepositoryError> {
        self.repository
            .repository_type()
            .map_err(RepositoryError::configuration)?;
        if self.map.year_min > self.map.year_max {
            return Err(RepositoryError::configuration(format!(
                "map.year_min ({}) must not exceed map.year_max ({})",
                self.map.year_min, self.map.year_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with the given variables set (`Some`) or removed (`None`), restoring them after.
    fn with_env<R>(changes: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<(String, Option<String>)> = changes
            .iter()
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect();
        for (k, v) in changes {
            match v {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

        for (k, v) in saved {
            match v {
                Some(v) => std::env::set_var(&k, v),
                None => std::env::remove_var(&k),
            }
        }
        match result {
            Ok(value) => value,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.repository.repo_type, "remote");
        assert_eq!(config.repository.venues_url, DEFAULT_VENUES_URL);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.map.artist_path_order, ArtistPathOrder::Source);
        assert_eq!(config.map.year_min, 1900);
        assert_eq!(config.map.year_max, 2000);
    }

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
venues_path = "data/venues.csv"
artists_path = "data/artists.csv"

[map]
artist_path_order = "location_number"
"#;

        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.repository.repository_type().unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            config.repository.venues_path,
            Some(PathBuf::from("data/venues.csv"))
        );
        assert_eq!(
            config.map.artist_path_order,
            ArtistPathOrder::LocationNumber
        );
    }

    #[test]
    fn test_unknown_repository_type_rejected() {
        let toml = "[repository]\ntype = \"postgres\"\n";
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_inverted_year_bounds_rejected() {
        let toml = "[map]\nyear_min = 2000\nyear_max = 1900\n";
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[server]\nhost = \"127.0.0.1\"\nport = 9000\n").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = AppConfig::from_file("/nonexistent/jazz-map.toml").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_port_and_host_overrides() {
        let config = with_env(&[("HOST", Some("127.0.0.1")), ("PORT", Some("9100"))], || {
            AppConfig::default().with_env_overrides()
        });
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_unparseable_port_keeps_default() {
        let config = with_env(&[("HOST", None), ("PORT", Some("eighty"))], || {
            AppConfig::default().with_env_overrides()
        });
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_reads_file_named_by_env() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 9200\n\n[map]\nartist_path_order = \"location_number\"\n"
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = with_env(&[(CONFIG_PATH_ENV, Some(path.as_str()))], AppConfig::load).unwrap();
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.map.artist_path_order, ArtistPathOrder::LocationNumber);
    }

    #[test]
    fn test_load_with_missing_env_file_fails() {
        let result = with_env(
            &[(CONFIG_PATH_ENV, Some("/nonexistent/jazz-map.toml"))],
            AppConfig::load,
        );
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_load_finds_file_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jazz-map.toml"), "[server]\nport = 9300\n").unwrap();

        let config = with_env(&[(CONFIG_PATH_ENV, None)], || {
            let previous = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir.path()).unwrap();
            let loaded = AppConfig::load();
            std::env::set_current_dir(previous).unwrap();
            loaded
        })
        .unwrap();
        assert_eq!(config.server.port, 9300);
    }
}
