use crate::error::{Result, UnscrambleError};
use crate::index::types::{DEFAULT_DICT_FILE, DEFAULT_INDEX_FILE};
use crate::query::DEFAULT_WINDOW_SIZE;
use crate::signature::cache::DEFAULT_CACHE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "unscramble";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Index file used when none is given explicitly
    #[serde(default = "default_index_file")]
    pub default_index_file: PathBuf,

    /// Dictionary the `index` command reads when none is given
    #[serde(default = "default_dict_file")]
    pub default_dict_file: PathBuf,

    /// Fuzzy neighbors on each side of a lookup
    #[serde(default = "default_window_size")]
    pub default_window_size: usize,

    /// Words memoized per unscrambler (0 disables the cache)
    #[serde(default = "default_signature_cache_size")]
    pub signature_cache_size: usize,
}

fn default_index_file() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

fn default_dict_file() -> PathBuf {
    PathBuf::from(DEFAULT_DICT_FILE)
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_signature_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_index_file: default_index_file(),
            default_dict_file: default_dict_file(),
            default_window_size: default_window_size(),
            signature_cache_size: default_signature_cache_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| UnscrambleError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            UnscrambleError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let dir = get_app_data_dir()?;
        let path = dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| UnscrambleError::Config(format!("failed to serialize config: {e}")))?;
        fs::write(&path, content).map_err(|e| UnscrambleError::io(&path, e))?;
        Ok(path)
    }

    /// Pick the index file to load.
    ///
    /// An explicit path must name an existing file; otherwise the configured
    /// default is returned as-is and any problem with it surfaces on load.
    pub fn resolve_index_file(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) if path.is_file() => Ok(path.to_path_buf()),
            Some(path) => Err(UnscrambleError::IndexNotFound {
                path: path.to_path_buf(),
            }),
            None => Ok(self.default_index_file.clone()),
        }
    }
}

/// Path of the config file, if the platform has a data directory
pub fn config_path() -> Option<PathBuf> {
    app_data_base().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}

fn app_data_base() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    }
}

/// Get (and create) the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = app_data_base()
        .ok_or_else(|| UnscrambleError::Config("could not determine app data directory".into()))?;
    let app_dir = base.join(APP_NAME);
    fs::create_dir_all(&app_dir).map_err(|e| UnscrambleError::io(&app_dir, e))?;
    Ok(app_dir)
}
