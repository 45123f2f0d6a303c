use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use colored::*;
use netmon_common::cancel::CancelToken;
use netmon_common::network::host::LiveHostSet;
use netmon_common::network::subnet::SubnetPrefix;
use netmon_core::logbook::LogRecord;
use netmon_core::sweep;
use tracing::{Instrument, error, info, info_span, warn};

use crate::commands::{Session, info as device};
use crate::terminal::{colors, print, spinner};

pub const ACTIVE_DEVICES: &str = "Active Devices";

/// Menu entry 2. `from` skips identity resolution and sweeps its /24 instead.
pub async fn active_scan(
    session: &Session,
    from: Option<Ipv4Addr>,
    cancel: &CancelToken,
) -> Option<LiveHostSet> {
    print::header("active devices", session.cfg.quiet);
    info!("Scanning active devices...");

    let local_ip = local_ip(from).await?;
    Some(run_sweep(session, local_ip, cancel).await)
}

/// The address whose /24 gets swept, or `None` after telling the user why not.
pub async fn local_ip(from: Option<Ipv4Addr>) -> Option<Ipv4Addr> {
    if let Some(ip) = from {
        return Some(ip);
    }

    match device::show_identity().await {
        Some(identity) => Some(identity.ip),
        None => {
            error!("Unable to determine network.");
            None
        }
    }
}

/// One sweep with progress output. Completed sweeps are logged.
pub async fn run_sweep(session: &Session, local_ip: Ipv4Addr, cancel: &CancelToken) -> LiveHostSet {
    let cfg = &session.cfg;
    let prefix = SubnetPrefix::from_local(local_ip);

    let span = info_span!("sweep", indicatif.pb_show = true);
    spinner::attach(&span, &format!("Sweeping {prefix}1-254..."));

    let start_time = Instant::now();
    let mut found: usize = 0;
    let hosts = sweep::probe_subnet(local_ip, session.prober.as_ref(), cfg, cancel, |ip| {
        found += 1;
        spinner::report_found(&span, found);
        if cfg.quiet < 2 {
            print::item(&format!("{ip} is ONLINE"), colors::ONLINE);
        }
    })
    .instrument(span.clone())
    .await;
    drop(span);

    if cancel.is_cancelled() {
        warn!("Sweep interrupted, {} hosts confirmed before stopping.", hosts.len());
        return hosts;
    }

    print_summary(hosts.len(), start_time.elapsed(), cfg.quiet);
    save_log(session, LogRecord::new(ACTIVE_DEVICES, hosts.to_lines()));
    hosts
}

fn print_summary(hosts_len: usize, total_time: Duration, quiet: u8) {
    if hosts_len == 0 {
        print::no_results("active devices");
        return;
    }

    let active_hosts: ColoredString = format!("{hosts_len} active hosts").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Sweep Complete: {active_hosts} identified in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match quiet {
        0 => {
            print::fat_separator();
            print::centered(&output);
        }
        _ => info!("{output}"),
    }
}

/// Writes a record and reports where it went.
pub fn save_log(session: &Session, record: LogRecord) {
    match session.logbook.save(&record) {
        Ok(path) => info!("Log saved to {}", path.display()),
        Err(e) => error!("{e}"),
    }
}
