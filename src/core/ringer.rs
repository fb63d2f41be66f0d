//! Ringing an alarm: notification, vibration request and a looping tone.

use crate::config::Config;
use crate::models::Alarm;
use crate::models::alarm::DEFAULT_SOUND;
use crate::ui::messages;
use crate::utils::path::existing_file;
use crate::utils::time::format_minutes_to_time;
use std::collections::BTreeMap;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// on/off pattern in milliseconds, repeated while ringing
pub const VIBRATION_PATTERN_MS: [u64; 6] = [0, 500, 1000, 500, 1000, 500];

const BELL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    File(PathBuf),
    /// No playable file: terminal bell.
    Bell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingOutcome {
    Stopped,
    TimedOut,
}

pub struct Ringer {
    player: Option<String>,
    sounds: BTreeMap<String, String>,
    timeout: Duration,
}

impl Ringer {
    pub fn new(player: Option<String>, sounds: BTreeMap<String, String>, timeout: Duration) -> Self {
        Self {
            player: player.filter(|p| !p.trim().is_empty()),
            sounds,
            timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.player.clone(),
            cfg.sounds.clone(),
            Duration::from_secs(cfg.ring_timeout_secs),
        )
    }

    /// Map a `sound_uri` to something playable.
    ///
    /// A path to an existing file wins; otherwise the catalog is consulted and
    /// unknown names fall back to the default tone.
    pub fn resolve_tone(&self, sound_uri: &str) -> Tone {
        if let Some(p) = existing_file(sound_uri) {
            return Tone::File(p);
        }

        let name = if self.sounds.contains_key(sound_uri) {
            sound_uri
        } else {
            if !sound_uri.is_empty() {
                tracing::warn!(sound = sound_uri, "unknown sound, using default tone");
            }
            DEFAULT_SOUND
        };

        self.sounds
            .get(name)
            .and_then(|p| existing_file(p))
            .map(Tone::File)
            .unwrap_or(Tone::Bell)
    }

    /// Ring `alarm` until `stop` completes or the timeout elapses.
    pub async fn ring<F>(&self, alarm: &Alarm, stop: F) -> RingOutcome
    where
        F: Future<Output = ()>,
    {
        tracing::info!(id = %alarm.id, label = %alarm.label, "alarm ringing");

        show_notification(alarm);
        if alarm.vibrate {
            vibrate();
        }

        let tone = self.resolve_tone(&alarm.sound_uri);
        tracing::debug!(?tone, "playing tone");

        tokio::select! {
            _ = play_loop(self.player.clone(), tone) => RingOutcome::Stopped,
            _ = stop => {
                tracing::info!(id = %alarm.id, "alarm stopped");
                RingOutcome::Stopped
            }
            _ = tokio::time::sleep(self.timeout) => {
                tracing::info!(id = %alarm.id, "alarm timed out");
                RingOutcome::TimedOut
            }
        }
    }
}

fn show_notification(alarm: &Alarm) {
    messages::alarm(alarm.display_label(), &format_minutes_to_time(alarm.time_in_minutes));
    println!("Press Enter to stop the alarm");
}

fn vibrate() {
    tracing::info!(
        pattern = ?VIBRATION_PATTERN_MS,
        "vibration requested, no vibrator on this device"
    );
}

/// Build the player command line, substituting `{sound}` (or appending the path).
pub fn player_args(template: &str, sound: &std::path::Path) -> Vec<String> {
    let sound = sound.to_string_lossy();
    let mut substituted = false;

    let mut args: Vec<String> = template
        .split_whitespace()
        .map(|part| {
            if part.contains("{sound}") {
                substituted = true;
                part.replace("{sound}", &sound)
            } else {
                part.to_string()
            }
        })
        .collect();

    if !substituted {
        args.push(sound.into_owned());
    }
    args
}

async fn play_loop(player: Option<String>, tone: Tone) {
    if let (Some(template), Tone::File(path)) = (player.as_deref(), &tone) {
        let args = player_args(template, path);
        loop {
            let status = tokio::process::Command::new(&args[0])
                .args(&args[1..])
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .kill_on_drop(true)
                .status()
                .await;

            match status {
                Ok(s) if s.success() => continue,
                Ok(s) => tracing::warn!(player = %args[0], %s, "player failed, using bell"),
                Err(e) => tracing::warn!(player = %args[0], error = %e, "player not available, using bell"),
            }
            break;
        }
    }

    loop {
        print!("\x07");
        let _ = std::io::stdout().flush();
        tokio::time::sleep(BELL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ringer_with(sounds: &[(&str, &str)]) -> Ringer {
        Ringer::new(
            None,
            sounds
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn catalog_name_without_file_rings_bell() {
        let r = ringer_with(&[("morning!", ""), ("Sunrise", "")]);
        assert_eq!(r.resolve_tone("Sunrise"), Tone::Bell);
    }

    #[test]
    fn catalog_name_with_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let path = f.path().to_string_lossy().to_string();
        let r = ringer_with(&[("morning!", ""), ("Birdsong", &path)]);
        assert_eq!(r.resolve_tone("Birdsong"), Tone::File(f.path().to_path_buf()));
    }

    #[test]
    fn unknown_sound_uses_default() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let path = f.path().to_string_lossy().to_string();
        let r = ringer_with(&[("morning!", &path)]);
        assert_eq!(r.resolve_tone("Polka"), Tone::File(f.path().to_path_buf()));
        assert_eq!(r.resolve_tone(""), Tone::File(f.path().to_path_buf()));
    }

    #[test]
    fn direct_file_reference() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let r = ringer_with(&[]);
        assert_eq!(
            r.resolve_tone(&f.path().to_string_lossy()),
            Tone::File(f.path().to_path_buf())
        );
    }

    #[test]
    fn player_template_substitution() {
        let p = Path::new("/tmp/a.wav");
        assert_eq!(player_args("paplay {sound}", p), vec!["paplay", "/tmp/a.wav"]);
        assert_eq!(
            player_args("mpv --no-video", p),
            vec!["mpv", "--no-video", "/tmp/a.wav"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ring_times_out() {
        let r = ringer_with(&[]);
        let a = Alarm::new(60, "t");
        let outcome = r.ring(&a, std::future::pending()).await;
        assert_eq!(outcome, RingOutcome::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn ring_stops_on_request() {
        let r = ringer_with(&[]);
        let mut a = Alarm::new(60, "t");
        a.vibrate = false;
        let stop = tokio::time::sleep(Duration::from_secs(2));
        assert_eq!(r.ring(&a, stop).await, RingOutcome::Stopped);
    }
}
