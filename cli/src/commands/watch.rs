use std::net::Ipv4Addr;

use colored::*;
use netmon_common::cancel::CancelToken;
use netmon_core::logbook::LogRecord;
use netmon_core::watch;
use tracing::{info, warn};

use crate::commands::{Session, sweep};
use crate::terminal::{colors, format, print};

pub const NEW_DEVICES: &str = "New Devices Detected";

/// Menu entry 5. Every cycle is a full sweep, logged like menu entry 2.
pub async fn new_device_watch(session: &Session, from: Option<Ipv4Addr>, cancel: &CancelToken) {
    print::header("device watch", session.cfg.quiet);
    info!("Watching for new devices... (Ctrl+C to stop)");

    let Some(local_ip) = sweep::local_ip(from).await else {
        return;
    };

    let known = watch::watch_for_new_devices(
        move || sweep::run_sweep(session, local_ip, cancel),
        session.cfg.watch_interval,
        cancel,
        |new| {
            let alert = format!("New Device(s) Detected: {}", format::join_addrs(new));
            print::blank();
            print::print(&format!("{} {}", "[!]".color(colors::ALERT).bold(), alert.color(colors::ALERT)));
            sweep::save_log(session, LogRecord::new(NEW_DEVICES, new.to_lines()));
        },
    )
    .await;

    warn!("Stopped device watch, {} devices seen.", known.len());
}
