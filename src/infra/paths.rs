// src/infra/paths.rs — Config path resolution
//
// All paths respect the TOOLNEST_HOME environment variable for isolation.
// When TOOLNEST_HOME is set, config lives directly under that directory.
// When unset, config uses ~/.toolnest/.

use directories::BaseDirs;
use std::path::PathBuf;

/// Returns the TOOLNEST_HOME override, if set.
fn toolnest_home() -> Option<PathBuf> {
    std::env::var_os("TOOLNEST_HOME").map(PathBuf::from)
}

/// Home directory, or `None` when the platform cannot report one.
pub fn dirs_home() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

/// Configuration directory: $TOOLNEST_HOME/ or ~/.toolnest/
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = toolnest_home() {
        return Some(home);
    }
    dirs_home().map(|h| h.join(".toolnest"))
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}
