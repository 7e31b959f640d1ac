//! Settings loader for restsec.toml

use std::path::{Path, PathBuf};

use restsec_core::prelude::*;

use super::types::SimSettings;

pub const SETTINGS_FILENAME: &str = "restsec.toml";

/// Default settings location inside `dir`.
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILENAME)
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or malformed one is logged and
/// ignored. The result is always normalized.
pub fn load_settings(path: &Path) -> SimSettings {
    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return SimSettings::default();
    }

    let settings = match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<SimSettings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                SimSettings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            SimSettings::default()
        }
    };

    settings.normalized()
}

/// Strict variant of [`load_settings`] for callers that asked for a file.
pub fn load_settings_strict(path: &Path) -> Result<SimSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
    let settings: SimSettings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))?;
    Ok(settings.normalized())
}

/// Write a commented default settings file into `dir` unless one exists.
///
/// Returns the path of the settings file.
pub fn init_settings_file(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let path = settings_path(dir);
    if path.exists() {
        debug!("Settings file already exists at {:?}", path);
        return Ok(path);
    }

    let default_content = r#"# REST security guide simulator settings
# Every value is optional; intervals are in milliseconds.

[rate_limit]
tick_ms = 50              # Driver tick
normal_spawn_ms = 1300    # One request per lane pick in normal traffic
attack_spawn_ms = 200     # Flood rate
normal_threshold = 4      # In-flight count that starts blocking (normal)
attack_threshold = 2      # In-flight count that starts blocking (attack)
passed_release_ms = 1600
blocked_release_ms = 900
packet_lifetime_ms = 2000
max_packets = 20          # Visible packet list size
queue_scale = 4           # In-flight count that fills the queue bar

[scanner]
reveal_ms = 700

[stepper]
advance_ms = 700

[sequence]
reveal_ms = 800

[clipboard]
ack_ms = 2000
"#;

    std::fs::write(&path, default_content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created settings file at {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&settings_path(temp.path()));
        assert_eq!(settings, SimSettings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = settings_path(temp.path());
        std::fs::write(
            &path,
            r#"
[rate_limit]
attack_spawn_ms = 100

[sequence]
reveal_ms = 400
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.rate_limit.attack_spawn_ms, 100);
        assert_eq!(settings.rate_limit.normal_spawn_ms, 1300);
        assert_eq!(settings.sequence.reveal_ms, 400);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = settings_path(temp.path());
        std::fs::write(&path, "[rate_limit\ntick_ms = ").unwrap();

        assert_eq!(load_settings(&path), SimSettings::default());
        let err = load_settings_strict(&path).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_settings_normalizes() {
        let temp = tempdir().unwrap();
        let path = settings_path(temp.path());
        std::fs::write(&path, "[scanner]\nreveal_ms = 1\n").unwrap();

        assert_eq!(load_settings(&path).scanner.reveal_ms, 16);
    }

    #[test]
    fn test_init_settings_file_round_trips() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested");

        let path = init_settings_file(&dir).unwrap();
        assert!(path.exists());
        assert_eq!(load_settings_strict(&path).unwrap(), SimSettings::default());

        // Existing file is left alone
        std::fs::write(&path, "[scanner]\nreveal_ms = 900\n").unwrap();
        init_settings_file(&dir).unwrap();
        assert_eq!(load_settings(&path).scanner.reveal_ms, 900);
    }
}
