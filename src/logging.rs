use crate::config::LoggingConfig;
use crate::error::AppError;
use file_rotate::compression::Compression;
use file_rotate::suffix::{AppendTimestamp, FileLimit};
use file_rotate::{ContentLimit, FileRotate};
use log::LevelFilter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const BYTES_PER_MB: usize = 1024 * 1024;

/// Writes every record to stdout and to the log file.
struct Tee<W> {
    file: W,
}

impl<W: Write> Write for Tee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Opens the log file for appending, rotating it by size and pruning old
/// rotations by age. A limit of zero disables that rule.
fn open_log_file(
    path: &Path,
    max_size_bytes: usize,
    max_age_days: u32,
) -> Result<FileRotate<AppendTimestamp>, AppError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file_limit = match max_age_days {
        0 => FileLimit::Unlimited,
        days => FileLimit::Age(chrono::Duration::days(i64::from(days))),
    };
    let content_limit = match max_size_bytes {
        0 => ContentLimit::None,
        bytes => ContentLimit::Bytes(bytes),
    };
    Ok(FileRotate::new(
        path,
        AppendTimestamp::default(file_limit),
        content_limit,
        Compression::None,
        #[cfg(unix)]
        None,
    ))
}

/// Installs the global logger.
///
/// `override_level` (from the command line) wins over the configured level.
/// `RUST_LOG` still refines individual modules on top of that.
pub fn init(config: &LoggingConfig, override_level: Option<LevelFilter>) -> Result<(), AppError> {
    let level = override_level.unwrap_or(config.level);
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder.filter_level(level);

    if let Some(path) = config.file_path() {
        let file = open_log_file(
            &path,
            config.max_size_mb.saturating_mul(BYTES_PER_MB),
            config.max_age_days,
        )?;
        builder.target(env_logger::Target::Pipe(Box::new(Tee { file })));
    }

    builder
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log::debug!("Logger initialised at level {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("enroll.log"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_log_file_directory_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("enroll.log");

        let mut file = open_log_file(&path, BYTES_PER_MB, 365).unwrap();
        file.write_all(b"line\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_tee_appends_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enroll.log");
        fs::write(&path, "old\n").unwrap();

        let mut tee = Tee {
            file: open_log_file(&path, BYTES_PER_MB, 365).unwrap(),
        };
        tee.write_all(b"new\n").unwrap();
        tee.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_write_past_size_limit_starts_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enroll.log");

        let mut file = open_log_file(&path, 16, 365).unwrap();
        file.write_all(b"first record....").unwrap();
        file.write_all(b"second\n").unwrap();
        file.flush().unwrap();

        let files = log_files(dir.path());
        assert_eq!(files.len(), 2, "{files:?}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        let rotated = files.iter().find(|name| name.as_str() != "enroll.log").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(rotated)).unwrap(),
            "first record...."
        );
    }

    #[test]
    fn test_zero_size_limit_never_rotates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enroll.log");

        let mut file = open_log_file(&path, 0, 0).unwrap();
        for _ in 0..64 {
            file.write_all(b"0123456789abcdef\n").unwrap();
        }
        file.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["enroll.log".to_string()]);
    }
}
