use std::path::{Path, PathBuf};
use std::time::Duration;

const MOBILE_STORAGE: &str = "/sdcard";
const LOG_DIR_NAME: &str = "NetworkMonitorLogs";

/// Settings for one run of the tool, built once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where session logs are written. Created on startup if missing.
    pub log_dir: PathBuf,

    /// Upper bound on probes in flight at once.
    pub workers: usize,

    /// How long a sweep waits for each echo reply.
    pub echo_wait: Duration,

    /// Echoes sent to each sweep candidate. A single reply marks it live.
    ///
    /// With `1`, a host that drops its only packet is reported as absent.
    pub echo_attempts: u8,

    /// TCP connect ceiling for the port scan.
    pub connect_timeout: Duration,

    /// Pause between continuous ping cycles.
    pub monitor_interval: Duration,

    /// Pause between device watch sweeps.
    pub watch_interval: Duration,

    /// 1 hides banners and headers, 2 also hides per-host progress lines.
    pub quiet: u8,

    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            workers: 64,
            echo_wait: Duration::from_secs(1),
            echo_attempts: 1,
            connect_timeout: Duration::from_millis(500),
            monitor_interval: Duration::from_secs(2),
            watch_interval: Duration::from_secs(10),
            quiet: 0,
            no_banner: false,
        }
    }
}

impl Config {
    /// Clamps values that would stall a scan.
    pub fn normalized(mut self) -> Self {
        self.workers = self.workers.max(1);
        self.echo_attempts = self.echo_attempts.max(1);
        self
    }
}

/// Shared storage on Android/Termux when present, the working directory otherwise.
pub fn default_log_dir() -> PathBuf {
    log_dir_under(Path::new(MOBILE_STORAGE))
}

fn log_dir_under(mobile_root: &Path) -> PathBuf {
    if mobile_root.is_dir() {
        mobile_root.join(LOG_DIR_NAME)
    } else {
        PathBuf::from(LOG_DIR_NAME)
    }
}
