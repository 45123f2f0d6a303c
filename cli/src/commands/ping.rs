use netmon_common::cancel::CancelToken;
use netmon_common::network::probe::Reachability;
use netmon_common::network::target::Target;
use netmon_core::monitor;
use tracing::{info, warn};

use crate::commands::Session;
use crate::terminal::{colors, print};

/// Menu entry 3. Runs until Ctrl+C; writes no log.
pub async fn continuous_ping(session: &Session, target: &Target, cancel: &CancelToken) {
    print::header("continuous ping", session.cfg.quiet);
    info!("Pinging {target} continuously (Ctrl+C to stop)");

    let cycles = monitor::monitor(
        target,
        session.prober.as_ref(),
        session.cfg.monitor_interval,
        cancel,
        |state| match state {
            Reachability::Reachable => print::item(&format!("{target} is reachable"), colors::ONLINE),
            Reachability::Unreachable => print::item(&format!("{target} is unreachable"), colors::OFFLINE),
        },
    )
    .await;

    warn!("Stopped continuous ping after {cycles} cycles.");
}
