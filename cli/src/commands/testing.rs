//! Shared fixtures for the command tests: a scripted network and a session
//! whose logbook lives in a temporary directory.

use std::collections::HashMap;
use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use netmon_common::cancel::CancelToken;
use netmon_common::config::Config;
use netmon_core::logbook::LogBook;
use netmon_core::network::echo::EchoProber;

use crate::commands::Session;

/// Hosts answer from their `n`-th echo onwards, so a host can "join" between
/// two sweeps. Asking `stop_at` for the given time cancels `cancel`.
pub struct FakeNetwork {
    joins_at: HashMap<String, usize>,
    asked: Mutex<HashMap<String, usize>>,
    stop_at: Option<(String, usize, CancelToken)>,
}

impl FakeNetwork {
    pub fn new(hosts: &[(Ipv4Addr, usize)]) -> Self {
        Self {
            joins_at: hosts.iter().map(|(ip, n)| (ip.to_string(), *n)).collect(),
            asked: Mutex::new(HashMap::new()),
            stop_at: None,
        }
    }

    pub fn cancel_on(mut self, host: Ipv4Addr, nth: usize, cancel: &CancelToken) -> Self {
        self.stop_at = Some((host.to_string(), nth, cancel.clone()));
        self
    }
}

#[async_trait]
impl EchoProber for FakeNetwork {
    async fn echo(&self, target: &str, _wait: Option<Duration>) -> bool {
        let nth = {
            let mut asked = self.asked.lock().unwrap();
            let count = asked.entry(target.to_string()).or_insert(0);
            *count += 1;
            *count
        };

        if let Some((host, at, cancel)) = &self.stop_at {
            if host == target && *at == nth {
                cancel.cancel();
            }
        }

        self.joins_at.get(target).is_some_and(|from| nth >= *from)
    }
}

pub fn lan(octet: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, octet)
}

pub fn session(dir: &Path, prober: FakeNetwork) -> Session {
    let cfg = Config {
        log_dir: dir.to_path_buf(),
        workers: 1,
        watch_interval: Duration::ZERO,
        quiet: 2,
        no_banner: true,
        ..Config::default()
    };
    let logbook = LogBook::open(dir).unwrap();
    Session::with_prober(cfg, logbook, Box::new(prober))
}

/// `(file name, body)` of every log written so far, sorted by name.
pub fn written_logs(dir: &Path) -> Vec<(String, String)> {
    let mut logs: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();
    logs.sort();
    logs
}

/// Data lines of a log body, after the title, stamp and blank line.
pub fn items(body: &str) -> Vec<&str> {
    body.lines().skip(3).collect()
}
