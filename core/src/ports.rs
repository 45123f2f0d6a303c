//! # Port Prober
//!
//! One TCP connect per port with a fixed timeout. Refused, timed out,
//! unreachable and unresolvable all end up as "not open" at the boundary;
//! [`scan_ports`] keeps the typed outcome for callers that want it.

use std::net::IpAddr;

use futures::stream::{self, StreamExt};
use netmon_common::cancel::CancelToken;
use netmon_common::config::Config;
use netmon_common::network::host::{COMMON_PORTS, OpenPortSet};
use netmon_common::network::probe::ProbeOutcome;
use netmon_common::network::target::Target;
use tracing::debug;

use crate::network::tcp;

/// Scans [`COMMON_PORTS`] on `target`. `on_open` fires once per open port,
/// in list order, as soon as that port is settled.
pub async fn probe_ports<F>(target: &Target, cfg: &Config, cancel: &CancelToken, on_open: F) -> OpenPortSet
where
    F: FnMut(u16),
{
    probe_ports_on(target, &COMMON_PORTS, cfg, cancel, on_open).await
}

pub async fn probe_ports_on<F>(
    target: &Target,
    ports: &[u16],
    cfg: &Config,
    cancel: &CancelToken,
    mut on_open: F,
) -> OpenPortSet
where
    F: FnMut(u16),
{
    let mut open = OpenPortSet::new();
    scan_ports(target, ports, cfg, cancel, |port, outcome| {
        if outcome.is_open() {
            open.push(port);
            on_open(port);
        }
    })
    .await;
    open
}

/// Per-port outcomes in the order of `ports`, each also handed to
/// `on_outcome` as it is consumed.
pub async fn scan_ports<F>(
    target: &Target,
    ports: &[u16],
    cfg: &Config,
    cancel: &CancelToken,
    mut on_outcome: F,
) -> Vec<(u16, ProbeOutcome)>
where
    F: FnMut(u16, ProbeOutcome),
{
    let Some(addr) = tcp::resolve(target).await else {
        debug!("{target} did not resolve, every port is indeterminate");
        return ports
            .iter()
            .map(|port| {
                on_outcome(*port, ProbeOutcome::Indeterminate);
                (*port, ProbeOutcome::Indeterminate)
            })
            .collect();
    };

    let mut results = stream::iter(ports.iter().copied())
        .map(move |port| probe_one(addr, port, cfg, cancel))
        .buffered(cfg.workers.max(1));

    let mut outcomes = Vec::with_capacity(ports.len());
    while let Some((port, outcome)) = results.next().await {
        on_outcome(port, outcome);
        outcomes.push((port, outcome));
    }
    outcomes
}

async fn probe_one(addr: IpAddr, port: u16, cfg: &Config, cancel: &CancelToken) -> (u16, ProbeOutcome) {
    if cancel.is_cancelled() {
        return (port, ProbeOutcome::Indeterminate);
    }

    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => ProbeOutcome::Indeterminate,
        outcome = tcp::connect_probe(addr, port, cfg.connect_timeout) => outcome,
    };
    (port, outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
