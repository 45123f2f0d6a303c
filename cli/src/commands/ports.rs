use netmon_common::cancel::CancelToken;
use netmon_common::network::host::COMMON_PORTS;
use netmon_common::network::target::Target;
use netmon_core::logbook::LogRecord;
use netmon_core::ports;
use tracing::{info, warn};

use crate::commands::{Session, sweep};
use crate::terminal::{colors, print};

/// Menu entry 4.
pub async fn port_scan(session: &Session, target: &Target, cancel: &CancelToken) {
    port_scan_on(session, target, &COMMON_PORTS, cancel).await;
}

/// Prints each open port as soon as it is confirmed and logs the full result
/// unless the scan was interrupted.
pub async fn port_scan_on(session: &Session, target: &Target, port_list: &[u16], cancel: &CancelToken) {
    print::header("open ports", session.cfg.quiet);
    info!("Scanning common ports on {target}...");

    let open = ports::probe_ports_on(target, port_list, &session.cfg, cancel, |port| {
        print::item(&format!("Port {port} is OPEN"), colors::ONLINE);
    })
    .await;

    if cancel.is_cancelled() {
        warn!("Port scan interrupted.");
        return;
    }

    if open.is_empty() {
        print::no_results("open ports");
    }

    sweep::save_log(session, LogRecord::new(format!("Open Ports on {target}"), open.to_lines()));
}
