//! # Session Logs
//!
//! Each finished feature run leaves one flat text file behind:
//!
//! ```text
//! Active Devices
//! Generated: 2024-05-01 13:04:05.123456
//!
//! 192.168.1.1
//! 192.168.1.5
//! ```
//!
//! Files are named `{Title_with_underscores}_{YYYYMMDD_HHMMSS}.txt` and are
//! never read back by the tool.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use netmon_common::error::ReconError;
use tracing::debug;

const FILE_STAMP: &str = "%Y%m%d_%H%M%S";
const BODY_STAMP: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    title: String,
    generated: NaiveDateTime,
    lines: Vec<String>,
}

impl LogRecord {
    /// Stamped with the current local time.
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::at(title, Local::now().naive_local(), lines)
    }

    pub fn at(title: impl Into<String>, generated: NaiveDateTime, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            generated,
            lines,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            self.title.replace(' ', "_"),
            self.generated.format(FILE_STAMP)
        )
    }

    pub fn body(&self) -> String {
        let mut body = format!("{}\nGenerated: {}\n\n", self.title, self.generated.format(BODY_STAMP));
        for line in &self.lines {
            body.push_str(line);
            body.push('\n');
        }
        body
    }
}

/// The directory session logs are written to.
#[derive(Debug, Clone)]
pub struct LogBook {
    dir: PathBuf,
}

impl LogBook {
    /// Creates `dir` (and parents) if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ReconError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ReconError::LogDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `record` and returns the path of the new file.
    pub fn save(&self, record: &LogRecord) -> Result<PathBuf, ReconError> {
        let path = self.dir.join(record.file_name());
        fs::write(&path, record.body()).map_err(|source| ReconError::LogWrite {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} lines to {}", record.lines().len(), path.display());
        Ok(path)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(13, 4, 5, 123_456)
            .unwrap()
    }

    #[test]
    fn file_name_replaces_spaces_and_stamps_to_the_second() {
        let record = LogRecord::at("Active Devices", instant(), vec![]);
        assert_eq!(record.file_name(), "Active_Devices_20240501_130405.txt");

        let record = LogRecord::at("Open Ports on 10.0.0.5", instant(), vec![]);
        assert_eq!(record.file_name(), "Open_Ports_on_10.0.0.5_20240501_130405.txt");
    }

    #[test]
    fn body_has_title_stamp_blank_line_then_items() {
        let record = LogRecord::at("Active Devices", instant(), vec!["192.168.1.1".into(), "192.168.1.5".into()]);
        assert_eq!(
            record.body(),
            "Active Devices\nGenerated: 2024-05-01 13:04:05.123456\n\n192.168.1.1\n192.168.1.5\n"
        );
    }

    #[test]
    fn save_writes_into_the_configured_directory() {
        let tmp = tempdir().unwrap();
        let book = LogBook::open(tmp.path().join("nested").join("logs")).unwrap();
        let record = LogRecord::at("New Devices Detected", instant(), vec!["10.0.0.9".into()]);

        let path = book.save(&record).unwrap();

        assert_eq!(path, book.dir().join("New_Devices_Detected_20240501_130405.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), record.body());
    }

    #[test]
    fn open_fails_when_directory_cannot_be_created() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = LogBook::open(blocker.join("logs")).unwrap_err();
        assert!(matches!(err, ReconError::LogDirectory { .. }));
    }
}
