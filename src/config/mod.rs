use crate::errors::{AppError, AppResult};
use crate::models::alarm::DEFAULT_SOUND;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Ringtones offered out of the box. An empty path means "system default tone".
pub const BUILTIN_SOUNDS: [&str; 5] = [
    DEFAULT_SOUND,
    "Gentle Alarm",
    "Sunrise",
    "Birdsong",
    "Ocean Waves",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preferences file holding the alarms blob
    pub store: String,
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_sound")]
    pub default_sound: String,
    #[serde(default = "default_vibrate")]
    pub vibrate: bool,
    /// Command used to play a tone, `{sound}` is replaced by the file path
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default = "default_sounds")]
    pub sounds: BTreeMap<String, String>,
    #[serde(default = "default_ring_timeout")]
    pub ring_timeout_secs: u64,
    #[serde(default = "default_resync")]
    pub resync_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_time() -> String {
    "08:00".to_string()
}
fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}
fn default_vibrate() -> bool {
    true
}
fn default_sounds() -> BTreeMap<String, String> {
    BUILTIN_SOUNDS
        .iter()
        .map(|s| (s.to_string(), String::new()))
        .collect()
}
fn default_ring_timeout() -> u64 {
    60
}
fn default_resync() -> u64 {
    30
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_time: default_time(),
            default_sound: default_sound(),
            vibrate: default_vibrate(),
            player: None,
            sounds: default_sounds(),
            ring_timeout_secs: default_ring_timeout(),
            resync_secs: default_resync(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("WAKEUP_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wakeup")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".wakeup")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wakeup.conf")
    }

    /// Return the default path of the preferences store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("wakeup_alarm_prefs.json")
    }

    /// Resolved store path (relative names live inside the config dir).
    pub fn store_path(&self) -> PathBuf {
        let p = crate::utils::path::expand_tilde(&self.store);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the configuration file, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration and store files.
    /// Returns the resolved store path.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(name) = custom_store {
            config.store = name;
        }

        if !is_test {
            config.save()?;
        }

        let store = config.store_path();
        crate::store::prefs::FilePreferences::new(&store).ensure_exists()?;

        Ok(store)
    }

    /// Default time for new alarms, in minutes since midnight.
    pub fn default_minutes(&self) -> AppResult<u16> {
        crate::utils::time::parse_alarm_time(&self.default_time).map_err(|_| {
            AppError::Config(format!("invalid default_time '{}'", self.default_time))
        })
    }
}
