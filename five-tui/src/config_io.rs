use std::path::Path;

use five_core::Settings;

/// Default settings file next to the binary's working directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Load settings, falling back to defaults. The second element is a status
/// message for the UI.
pub fn load_or_default(path: &Path) -> (Settings, Option<String>) {
    if path.exists() {
        match Settings::load(path) {
            Ok(s) => (s, None),
            Err(e) => (
                Settings::default(),
                Some(format!("Failed to load {}: {e}", path.display())),
            ),
        }
    } else {
        (Settings::default(), None)
    }
}

/// Persist settings atomically (tmp + rename).
pub fn save_settings_atomic(path: &Path, settings: &Settings) -> Result<(), std::io::Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let tmp = path.with_extension("yaml.tmp");
    let s = serde_yaml::to_string(settings).map_err(std::io::Error::other)?;
    std::fs::write(&tmp, s)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
