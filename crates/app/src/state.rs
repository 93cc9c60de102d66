use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const APP_NAME: &str = "snip";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const DATA_FILE_NAME: &str = "data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the API server
    #[serde(default = "default_app_port")]
    pub app_port: u16,
    /// Data file override (defaults to <config dir>/data.json)
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Skip creation of the .htaccess access guard next to the data file
    #[serde(default)]
    pub skip_access_guard: bool,
    /// Maximum number of tags a snippet may carry
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

fn default_app_port() -> u16 {
    8080
}

fn default_max_tags() -> usize {
    common::document::DEFAULT_MAX_TAGS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_port: default_app_port(),
            data_path: None,
            skip_access_guard: false,
            max_tags: default_max_tags(),
        }
    }
}

/// Client-held trust flag. Present iff a setup/login succeeded on this
/// client and no logout has run since; holds the bearer token the daemon
/// issued for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub token: Uuid,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the snip directory (~/.snip)
    pub snip_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Path to the client session file
    pub session_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the snip directory path (custom or default ~/.snip)
    pub fn snip_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new snip state directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let snip_dir = Self::snip_dir(custom_path)?;

        if snip_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&snip_dir)?;

        // Create config (use provided or default)
        let config = config.unwrap_or_default();
        let config_path = snip_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        let session_path = snip_dir.join(SESSION_FILE_NAME);

        Ok(Self {
            snip_dir,
            config_path,
            session_path,
            config,
        })
    }

    /// Load existing state from the snip directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let snip_dir = Self::snip_dir(custom_path)?;

        if !snip_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = snip_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        let session_path = snip_dir.join(SESSION_FILE_NAME);

        Ok(Self {
            snip_dir,
            config_path,
            session_path,
            config,
        })
    }

    /// The data file path the daemon will use unless overridden.
    pub fn default_data_path(&self) -> PathBuf {
        self.snip_dir.join(DATA_FILE_NAME)
    }

    /// Read the client session, if any. A missing or garbled file just
    /// means "not logged in".
    pub fn load_session(&self) -> Option<SessionFile> {
        let bytes = fs::read(&self.session_path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Persist the trust flag after a successful setup/login.
    pub fn store_session(&self, token: Uuid) -> Result<(), StateError> {
        let session = SessionFile { token };
        fs::write(&self.session_path, serde_json::to_vec_pretty(&session)?)?;
        Ok(())
    }

    /// Clear the trust flag. Returns whether a session existed.
    pub fn clear_session(&self) -> Result<bool, StateError> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StateError::Io(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("snip directory not initialized. Run 'snip init' first")]
    NotInitialized,

    #[error("snip directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("session file error: {0}")]
    Session(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let snip_dir = dir.path().join("snip");

        let state = AppState::init(Some(snip_dir.clone()), None).unwrap();
        assert_eq!(state.config.app_port, 8080);
        assert_eq!(state.config.max_tags, 3);

        let loaded = AppState::load(Some(snip_dir.clone())).unwrap();
        assert_eq!(loaded.config.app_port, 8080);

        assert!(matches!(
            AppState::init(Some(snip_dir), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn load_uninitialized_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppState::load(Some(dir.path().join("missing"))),
            Err(StateError::NotInitialized)
        ));
    }

    #[test]
    fn session_store_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init(Some(dir.path().join("snip")), None).unwrap();

        assert!(state.load_session().is_none());

        let token = Uuid::new_v4();
        state.store_session(token).unwrap();
        assert_eq!(state.load_session().unwrap().token, token);

        assert!(state.clear_session().unwrap());
        assert!(state.load_session().is_none());
        assert!(!state.clear_session().unwrap());
    }
}
