//! Path utilities: expand ~ and resolve data files inside the data directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Join a data file name onto the data directory
pub fn data_file(data_dir: &Path, file_name: &str) -> PathBuf {
    data_dir.join(file_name)
}
