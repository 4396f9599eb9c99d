use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use env_logger::Target;
use log::LevelFilter;

use crate::{ConfigError::FileError, Result};

const LOG_FILE_NAME: &str = "kube-suggest.log";

/// Send log records to `kube-suggest.log` in the user's local data directory
/// and, unless `quiet` is set, to stderr as well. stdout is left to the report.
///
/// `verbose` lowers the level from `info` to `debug`, which also shows why each
/// workload was skipped.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let log_path = log_file_path()?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| FileError(format!("Failed to open {}: {}", log_path.display(), e)))?;

    let target = if quiet {
        Target::Pipe(Box::new(log_file))
    } else {
        Target::Pipe(Box::new(StderrAndFile {
            stderr: io::stderr(),
            file: log_file,
        }))
    };

    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format_timestamp_secs()
        .target(target)
        .init();

    log::debug!("Logging to: {}", log_path.display());

    Ok(())
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn log_file_path() -> Result<PathBuf> {
    let dir = match ProjectDirs::from("dev", "kube-suggest", "kube-suggest") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        // No home directory, e.g. in a bare container
        None => std::env::current_dir()
            .map_err(|e| FileError(format!("Failed to get current directory: {}", e)))?,
    };

    ensure_dir(&dir)?;
    Ok(dir.join(LOG_FILE_NAME))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| FileError(format!("Failed to create {}: {}", dir.display(), e)).into())
}

/// Duplicates every record onto stderr and the log file.
struct StderrAndFile {
    stderr: io::Stderr,
    file: fs::File,
}

impl Write for StderrAndFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stderr.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()?;
        self.file.flush()
    }
}
