use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn test_init_creates_empty_store() {
    let env = TestEnv::new();

    env.wk()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(env.store()).is_ok());
    // test mode never writes the config file
    assert!(!env.config_file().exists());
    assert!(env.alarms().is_empty());
}

#[test]
fn test_add_and_list() {
    let env = TestEnv::new();
    env.init();

    env.add(&["07:30", "--label", "Work"]);
    env.add(&["6am", "--label", "Gym", "--repeat", "weekdays"]);

    env.wk()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("07:30"))
        .stdout(contains("Work"))
        .stdout(contains("06:00"))
        .stdout(contains("Weekdays"))
        .stdout(contains("Once"));

    let alarms = env.alarms();
    assert_eq!(alarms.len(), 2);
    assert_eq!(alarms[0]["timeInMinutes"], 450);
    assert_eq!(alarms[0]["isEnabled"], true);
    assert_eq!(alarms[0]["soundUri"], "morning!");
    assert_eq!(alarms[0]["vibrate"], true);
    assert_eq!(alarms[1]["label"], "Gym");
    assert_eq!(alarms[1]["timeInMinutes"], 360);
    assert_eq!(alarms[1]["repeatDays"], serde_json::json!([1, 2, 3, 4, 5]));
}

#[test]
fn test_list_table_sorted_json_in_storage_order() {
    let env = TestEnv::new();
    env.init();
    env.add(&["09:00", "--label", "Late"]);
    env.add(&["06:00", "--label", "Early"]);

    // table: by time of day
    let out = env.wk().arg("list").output().unwrap();
    let table = String::from_utf8_lossy(&out.stdout).to_string();
    let early = table.find("Early").unwrap();
    let late = table.find("Late").unwrap();
    assert!(early < late);

    // json: as stored
    let labels: Vec<_> = env.alarms().iter().map(|a| a["label"].clone()).collect();
    assert_eq!(labels, vec!["Late", "Early"]);
}

#[test]
fn test_add_uses_default_time() {
    let env = TestEnv::new();
    env.init();
    env.add(&[]);

    assert_eq!(env.alarms()[0]["timeInMinutes"], 8 * 60);
}

#[test]
fn test_add_rejects_invalid_time() {
    let env = TestEnv::new();
    env.init();

    env.wk()
        .args(["add", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    env.wk()
        .args(["add", "07:00", "--repeat", "mon,someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid day of week"));

    assert!(env.alarms().is_empty());
}

#[test]
fn test_edit_by_prefix_keeps_other_fields() {
    let env = TestEnv::new();
    env.init();
    let id = env.add(&["07:30", "--label", "Work", "--no-vibrate"]);

    env.wk()
        .args(["edit", &id[..8], "--label", "Office", "--repeat", "mon,wed"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let a = &env.alarms()[0];
    assert_eq!(a["id"], id.as_str());
    assert_eq!(a["label"], "Office");
    assert_eq!(a["timeInMinutes"], 450);
    assert_eq!(a["vibrate"], false);
    assert_eq!(a["repeatDays"], serde_json::json!([1, 3]));
}

#[test]
fn test_enable_disable() {
    let env = TestEnv::new();
    env.init();
    let id = env.add(&["05:45"]);

    env.wk()
        .args(["disable", &id])
        .assert()
        .success()
        .stdout(contains("disabled"));
    assert_eq!(env.alarms()[0]["isEnabled"], false);

    env.wk()
        .args(["list", "--enabled"])
        .assert()
        .success()
        .stdout(contains("No alarms"));

    env.wk().args(["enable", &id]).assert().success();
    assert_eq!(env.alarms()[0]["isEnabled"], true);
}

#[test]
fn test_delete_with_and_without_confirmation() {
    let env = TestEnv::new();
    env.init();
    let id = env.add(&["09:00"]);

    env.wk()
        .args(["del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(env.alarms().len(), 1);

    env.wk()
        .args(["del", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted alarm"));
    assert!(env.alarms().is_empty());
}

#[test]
fn test_unknown_id_fails() {
    let env = TestEnv::new();
    env.init();

    env.wk()
        .args(["del", "deadbeef", "--force"])
        .assert()
        .failure()
        .stderr(contains("No alarm found"));

    env.wk()
        .args(["enable", "deadbeef"])
        .assert()
        .failure();
}

#[test]
fn test_show_and_next() {
    let env = TestEnv::new();
    env.init();

    env.wk()
        .arg("next")
        .assert()
        .success()
        .stdout(contains("No enabled alarms"));

    let id = env.add(&["10:15", "--label", "Standup", "--repeat", "daily"]);

    env.wk()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("10:15"))
        .stdout(contains("Every day"))
        .stdout(contains("next"));

    env.wk()
        .arg("next")
        .assert()
        .success()
        .stdout(contains("Standup").and(contains("10:15")));
}

#[test]
fn test_sounds_lists_catalog() {
    let env = TestEnv::new();

    env.wk()
        .arg("sounds")
        .assert()
        .success()
        .stdout(contains("morning!"))
        .stdout(contains("Ocean Waves"))
        .stdout(contains("terminal bell"));
}

#[test]
fn test_unknown_sound_warns_but_saves() {
    let env = TestEnv::new();
    env.init();

    env.wk()
        .args(["add", "07:00", "--sound", "Polka"])
        .assert()
        .success()
        .stdout(contains("Unknown sound"));

    assert_eq!(env.alarms()[0]["soundUri"], "Polka");
}

#[test]
fn test_invalid_stored_entries_are_skipped() {
    let env = TestEnv::new();
    let blob = r#"[{"id":"keep-me","timeInMinutes":420,"label":"ok","isEnabled":true,"repeatDays":[],"soundUri":"","vibrate":true},{"id":"broken"}]"#;
    let prefs = serde_json::json!({ "alarms": blob });
    fs::write(env.store(), prefs.to_string()).unwrap();

    let alarms = env.alarms();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0]["id"], "keep-me");
}

#[test]
fn test_config_init_check_print() {
    let env = TestEnv::new();

    env.wk().arg("init").assert().success();
    assert!(env.config_file().exists());

    env.wk()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    env.wk()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_time"))
        .stdout(contains("ring_timeout_secs"));
}

#[test]
fn test_config_migrate_adds_missing_fields() {
    let env = TestEnv::new();
    fs::write(env.config_file(), format!("store: {}\n", env.store())).unwrap();

    env.wk()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("resync_secs")));

    env.wk()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let content = fs::read_to_string(env.config_file()).unwrap();
    assert!(content.contains("resync_secs"));
}

#[test]
fn test_ring_times_out() {
    let env = TestEnv::new();
    fs::write(
        env.config_file(),
        format!("store: {}\nring_timeout_secs: 1\n", env.store()),
    )
    .unwrap();
    let id = env.add(&["07:00", "--label", "Coffee", "--no-vibrate"]);

    env.wk()
        .args(["ring", &id])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Alarm: Coffee"))
        .stdout(contains("stopped after 1 seconds"));
}

#[test]
fn test_ring_stops_on_enter() {
    let env = TestEnv::new();
    env.init();
    let id = env.add(&["07:00"]);

    env.wk()
        .args(["ring", &id])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Alarm: Alarm"))
        .stdout(contains("Alarm stopped."));
}
