//! Filesystem path helpers shared by the loader, settings store and log setup.

use std::env;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, data_local_dir, home_dir};

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "catsel";

/// Expand a leading `~` (Unix or Windows separator) to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Path named by environment variable `name`, when set to a non-blank value.
pub fn path_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(expand_tilde(trimmed))
    }
}

/// `<config-dir>/catsel/<file_name>`, falling back to the working directory.
pub fn config_file_path(file_name: &str) -> PathBuf {
    app_dir(config_dir()).join(file_name)
}

/// `<data-local-dir>/catsel/<file_name>`, falling back to the working directory.
pub fn data_file_path(file_name: &str) -> PathBuf {
    app_dir(data_local_dir()).join(file_name)
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Human-readable form of `path` for log fields and error messages.
pub fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
