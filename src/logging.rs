//! File logging. The TUI owns stdout, so log lines go to a file instead.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;

/// Returns `~/.local/share/regform/regform.log` (platform equivalent).
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("regform").join("regform.log"))
}

/// Installs the global logger, appending to the file at `path`.
///
/// The parent directory is created if it does not already exist.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn setup_logger(level: LevelFilter, path: &Path) -> Result<(), fern::InitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Utc::now().to_rfc3339(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}
