pub mod alarms;
pub mod entity;
pub mod prefs;

use crate::config::Config;
use alarms::AlarmStore;
use prefs::FilePreferences;

/// Open the file-backed alarm store configured in `cfg`.
pub fn open(cfg: &Config) -> AlarmStore<FilePreferences> {
    AlarmStore::new(FilePreferences::new(cfg.store_path()))
}
