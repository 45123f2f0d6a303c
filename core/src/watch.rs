//! # Device-Join Watcher
//!
//! Re-sweeps on an interval and reports hosts never seen before in this run.
//! The known set only grows: a host that goes quiet stays known, and a host
//! that merely missed its echo in an earlier sweep shows up as "new" later.

use std::future::Future;
use std::time::Duration;

use netmon_common::cancel::CancelToken;
use netmon_common::network::host::LiveHostSet;
use tokio::time::sleep;
use tracing::debug;

/// Every host observed since the watch started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownHosts {
    hosts: LiveHostSet,
}

impl KnownHosts {
    pub fn new(baseline: LiveHostSet) -> Self {
        Self { hosts: baseline }
    }

    /// Folds `current` in and returns the hosts that were not known before.
    pub fn absorb(&mut self, current: &LiveHostSet) -> LiveHostSet {
        let new = current.difference(&self.hosts);
        self.hosts.extend(new.iter().copied());
        new
    }

    pub fn hosts(&self) -> &LiveHostSet {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Runs until `cancel` fires and returns everything that was seen.
///
/// `sweep` is called once for the baseline and once per cycle. `on_new` only
/// fires for cycles that turned up unknown hosts.
pub async fn watch_for_new_devices<S, Fut, F>(
    mut sweep: S,
    interval: Duration,
    cancel: &CancelToken,
    mut on_new: F,
) -> KnownHosts
where
    S: FnMut() -> Fut,
    Fut: Future<Output = LiveHostSet>,
    F: FnMut(&LiveHostSet),
{
    let mut known = KnownHosts::new(sweep().await);
    debug!("watch baseline holds {} hosts", known.len());

    let mut cycle: u64 = 0;
    while !cancel.is_cancelled() {
        let current = sweep().await;
        if cancel.is_cancelled() {
            break;
        }

        cycle += 1;
        let new = known.absorb(&current);
        debug!("watch cycle {cycle}: {} live, {} new, {} known", current.len(), new.len(), known.len());

        if !new.is_empty() {
            on_new(&new);
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep(interval) => {}
        }
    }

    known
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
