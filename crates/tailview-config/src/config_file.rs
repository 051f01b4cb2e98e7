use std::{env, path::Path, path::PathBuf};

const CONFIG_FILE: &str = ".tailview.toml";

/// Load config file content
///
/// Searches for the config in:
/// 1. Current working directory as .tailview.toml
/// 2. Home directory as .tailview.toml
/// 3. The platform config directory as tailview/config.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_config_file(Path::new(CONFIG_FILE)) {
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Some(content) = read_config_file(&home_config) {
            return Some(content);
        }
    }

    crate::paths::app_config_path()
        .ok()
        .and_then(|path| read_config_file(&path))
}

/// Read a config file, logging where it came from
pub fn read_config_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
