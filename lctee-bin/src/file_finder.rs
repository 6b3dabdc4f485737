use anyhow::{Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

const LOG_HOME_SUBDIR: &str = ".lctee/logs";

/// Where saved logs live: an explicit non-empty override, else `<home>/.lctee/logs`
pub fn resolve_log_home(override_dir: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir
        && !dir.as_os_str().is_empty()
    {
        return Ok(dir.to_path_buf());
    }

    home.map(|home| home.join(LOG_HOME_SUBDIR))
        .ok_or_else(|| anyhow!("Could not determine home directory"))
}

/// Recursively find all regular files under the given path, sorted
pub fn find_log_files(base_path: &Path) -> Vec<PathBuf> {
    let mut log_files = Vec::new();
    collect_files(base_path, &mut log_files);
    log_files.sort();
    log_files
}

fn collect_files(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping '{}': {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            collect_files(&path, found);
        } else if file_type.is_file() {
            found.push(path);
        }
    }
}
