//! Key-value preference storage.
//!
//! The desktop backend is a single JSON object file (`{"key": "value", ...}`),
//! the in-memory backend is used by tests.
//!
//! `wakeup run` and the CLI commands share the same file, so every write goes
//! through an exclusive lock on a sidecar `<file>.lock`.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Callback for [`Preferences::update_string`]: receives the current value and
/// returns the new one, or `None` to leave it untouched.
pub type Update<'a> = dyn FnMut(Option<&str>) -> AppResult<Option<String>> + 'a;

pub trait Preferences: Send + Sync {
    fn get_string(&self, key: &str) -> AppResult<Option<String>>;

    /// Durable once this returns `Ok`.
    fn put_string(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;

    /// Read-modify-write of one key, exclusive against every other writer of
    /// the same store.
    fn update_string(&self, key: &str, f: &mut Update<'_>) -> AppResult<()>;
}

pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create an empty store file if none exists yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        self.locked(|| {
            if self.path.exists() {
                return Ok(());
            }
            self.write_all(&BTreeMap::new())
        })
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn lock_path(&self) -> PathBuf {
        let mut p = self.path.clone().into_os_string();
        p.push(".lock");
        PathBuf::from(p)
    }

    /// Run `f` while holding the exclusive write lock.
    fn locked<T>(&self, f: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
        fs::create_dir_all(self.dir())?;

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        let mut lock = fd_lock::RwLock::new(file);
        let _guard = lock.write()?;

        f()
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            AppError::Store(format!(
                "cannot read preferences file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Caller holds the lock.
    fn write_all(&self, map: &BTreeMap<String, String>) -> AppResult<()> {
        // a fresh temp file in the same directory, then an atomic rename:
        // readers never see a half written file
        let mut tmp = tempfile::NamedTempFile::new_in(self.dir())?;
        tmp.write_all(serde_json::to_string_pretty(map)?.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), keys = map.len(), "preferences written");
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn put_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.locked(|| {
            let mut map = self.read_all()?;
            map.insert(key.to_string(), value.to_string());
            self.write_all(&map)
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.locked(|| {
            let mut map = self.read_all()?;
            if map.remove(key).is_some() {
                self.write_all(&map)?;
            }
            Ok(())
        })
    }

    fn update_string(&self, key: &str, f: &mut Update<'_>) -> AppResult<()> {
        self.locked(|| {
            let mut map = self.read_all()?;
            if let Some(value) = f(map.get(key).map(String::as_str))? {
                map.insert(key.to_string(), value);
                self.write_all(&map)?;
            }
            Ok(())
        })
    }
}

#[derive(Default)]
pub struct MemoryPreferences {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.map
            .lock()
            .map_err(|_| AppError::Store("preferences lock poisoned".into()))
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn update_string(&self, key: &str, f: &mut Update<'_>) -> AppResult<()> {
        let mut map = self.lock()?;
        if let Some(value) = f(map.get(key).map(String::as_str))? {
            map.insert(key.to_string(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("nope.json"));
        assert_eq!(prefs.get_string("alarms").unwrap(), None);
    }

    #[test]
    fn file_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let path = sub.join("prefs.json");

        FilePreferences::new(&path).put_string("alarms", "[]").unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get_string("alarms").unwrap().as_deref(), Some("[]"));
        // no temp files left behind, only the store and its lock
        assert_eq!(file_names(&sub), vec!["prefs.json", "prefs.json.lock"]);
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("prefs.json"));
        prefs.put_string("a", "1").unwrap();
        prefs.put_string("b", "2").unwrap();
        prefs.remove("a").unwrap();
        assert_eq!(prefs.get_string("a").unwrap(), None);
        assert_eq!(prefs.get_string("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn update_sees_current_value_and_can_skip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("prefs.json"));
        prefs.put_string("n", "1").unwrap();

        prefs
            .update_string("n", &mut |v| {
                assert_eq!(v, Some("1"));
                Ok(Some("2".into()))
            })
            .unwrap();
        assert_eq!(prefs.get_string("n").unwrap().as_deref(), Some("2"));

        prefs.update_string("n", &mut |_| Ok(None)).unwrap();
        assert_eq!(prefs.get_string("n").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn concurrent_updates_are_serialized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let prefs = FilePreferences::new(&path);
                    for _ in 0..25 {
                        prefs
                            .update_string("count", &mut |v| {
                                let n: u32 = v.map_or(0, |s| s.parse().unwrap());
                                Ok(Some((n + 1).to_string()))
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        let prefs = FilePreferences::new(&path);
        assert_eq!(prefs.get_string("count").unwrap().as_deref(), Some("100"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FilePreferences::new(&path).get_string("alarms"),
            Err(AppError::Store(_))
        ));
    }

    #[test]
    fn memory_store_basic_ops() {
        let prefs = MemoryPreferences::new();
        prefs.put_string("k", "v").unwrap();
        assert_eq!(prefs.get_string("k").unwrap().as_deref(), Some("v"));
        prefs.remove("k").unwrap();
        assert_eq!(prefs.get_string("k").unwrap(), None);
    }
}
