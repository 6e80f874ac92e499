//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup-tui";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/signup-tui` or `~/.cache/signup-tui`
/// - macOS: `~/Library/Caches/dev.signup.signup-tui`
/// - Windows: `C:\Users\<User>\AppData\Local\signup\signup-tui\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/signup-tui` or `~/.config/signup-tui`
/// - macOS: `~/Library/Application Support/dev.signup.signup-tui`
/// - Windows: `C:\Users\<User>\AppData\Roaming\signup\signup-tui\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the form configuration file.
pub fn form_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("form.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Name format of archived logs, stamped with the time the session ended.
const ARCHIVE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Archive the previous session's log and prune old archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache);
    }
}

fn rotate_logs_in(dir: &Path) {
    let latest = dir.join("latest.log");

    if let Ok(metadata) = fs::metadata(&latest) {
        let ended: DateTime<Local> = metadata
            .modified()
            .map(DateTime::from)
            .unwrap_or_else(|_| Local::now());
        let archived = dir.join(format!("{}.log", ended.format(ARCHIVE_FORMAT)));
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("Could not archive {}: {}", latest.display(), e);
        }
    }

    prune_archives(dir);
}

/// Timestamp of an archived log, or None for any other file.
fn archive_stamp(file_name: &str) -> Option<NaiveDateTime> {
    let stem = file_name.strip_suffix(".log")?;
    NaiveDateTime::parse_from_str(stem, ARCHIVE_FORMAT).ok()
}

/// Remove archived logs beyond the newest MAX_OLD_LOGS.
fn prune_archives(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<(NaiveDateTime, PathBuf)> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let stamp = archive_stamp(&e.file_name().to_string_lossy())?;
            Some((stamp, e.path()))
        })
        .collect();

    // Newest first
    archives.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, path) in archives.iter().skip(MAX_OLD_LOGS) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("signup-tui-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_archive_stamp() {
        assert!(archive_stamp("20260101_120000.log").is_some());
        assert!(archive_stamp("latest.log").is_none());
        assert!(archive_stamp("notes.log").is_none());
        assert!(archive_stamp("20260101_120000.txt").is_none());
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("rotate");
        fs::write(dir.join("latest.log"), "previous session").unwrap();

        rotate_logs_in(&dir);

        assert!(!dir.join("latest.log").exists());
        let archived: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(archived.len(), 1);
        assert!(archive_stamp(&archived[0]).is_some());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prune_keeps_newest_archives_only() {
        let dir = scratch_dir("prune");
        for day in 1..=(MAX_OLD_LOGS + 3) {
            fs::write(dir.join(format!("202601{:02}_000000.log", day)), "").unwrap();
        }
        fs::write(dir.join("notes.log"), "").unwrap();

        prune_archives(&dir);

        assert!(!dir.join("20260101_000000.log").exists());
        assert!(!dir.join("20260103_000000.log").exists());
        assert!(dir.join("20260104_000000.log").exists());
        assert!(dir.join("notes.log").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
