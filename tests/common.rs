#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: its own config dir and alarm store.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn store(&self) -> String {
        self.home
            .path()
            .join("alarms.json")
            .to_string_lossy()
            .to_string()
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join("wakeup.conf")
    }

    /// `wakeup` bound to this environment (config dir + store).
    pub fn wk(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wakeup");
        cmd.env("WAKEUP_HOME", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--store", &self.store()]);
        cmd
    }

    /// Run `init` in test mode (no config file written).
    pub fn init(&self) {
        self.wk().args(["--test", "init"]).assert().success();
    }

    /// Add an alarm and return its full id.
    pub fn add(&self, args: &[&str]) -> String {
        let out = self
            .wk()
            .arg("add")
            .args(args)
            .output()
            .expect("run add");
        assert!(
            out.status.success(),
            "add failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );

        String::from_utf8_lossy(&out.stdout)
            .lines()
            .find_map(|l| l.strip_prefix("id: "))
            .expect("add prints the new id")
            .trim()
            .to_string()
    }

    /// Parsed `list --json` output.
    pub fn alarms(&self) -> Vec<serde_json::Value> {
        let out = self.wk().args(["list", "--json"]).output().expect("run list");
        assert!(out.status.success());
        serde_json::from_slice(&out.stdout).expect("list --json is JSON")
    }
}
