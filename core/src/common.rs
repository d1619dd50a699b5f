//! Shared helpers for the command-line application: logger setup and path validation.

use std::error::Error;
use std::path::{Path, PathBuf};

/// Initialize the logger with the specified configuration.
///
/// # Arguments
/// * `log_level` - Log level string (off, error, warn, info, debug, trace)
/// * `log_file` - Optional path to log file (logs to stderr if None)
///
/// # Errors
/// Returns an error if the log file cannot be opened or logger initialization fails.
pub fn init_logger(log_level: &str, log_file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    use std::io::Write;

    let level = log_level.parse::<log::LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        log::LevelFilter::Info
    });

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    if let Some(log_path) = log_file {
        create_parent_dirs(log_path)?;
        let target = Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.try_init()?;
    Ok(())
}

/// Validate that an input path exists and is a CSV file.
///
/// # Errors
/// Returns an error if the path does not exist, is not a file, or lacks a `.csv` extension.
pub fn validate_input_csv(input: &Path) -> Result<(), Box<dyn Error>> {
    if !input.is_file() {
        return Err(format!("Input path '{}' is not an existing file.", input.display()).into());
    }
    if input.extension().and_then(|s| s.to_str()) != Some("csv") {
        return Err(format!("Input file '{}' is not a CSV file.", input.display()).into());
    }
    Ok(())
}

/// Create the parent directories of `path` if it has any.
pub fn create_parent_dirs(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_csv() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("positions.csv");
        std::fs::write(&csv, "latitude,longitude\n").unwrap();
        assert!(validate_input_csv(&csv).is_ok());

        let txt = dir.path().join("positions.txt");
        std::fs::write(&txt, "").unwrap();
        assert!(validate_input_csv(&txt).is_err());

        assert!(validate_input_csv(&dir.path().join("missing.csv")).is_err());
        assert!(validate_input_csv(dir.path()).is_err());
    }

    #[test]
    fn test_create_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("out.csv");
        create_parent_dirs(&nested).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        // bare file name has an empty parent
        assert!(create_parent_dirs(Path::new("out.csv")).is_ok());
    }
}
