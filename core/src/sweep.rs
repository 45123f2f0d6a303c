//! # Subnet Host Prober
//!
//! Sends echoes to every candidate of the local /24 and keeps the addresses
//! that answered.
//!
//! Candidates go through a bounded pool of concurrent probes. Results are
//! consumed in candidate order, so progress callbacks fire in ascending
//! octet order even though replies arrive out of order.
//!
//! A host that drops its only echo is reported as absent. Hosts that filter
//! ICMP look exactly like hosts that are down.

use std::net::Ipv4Addr;

use futures::stream::{self, StreamExt};
use netmon_common::cancel::CancelToken;
use netmon_common::config::Config;
use netmon_common::network::host::LiveHostSet;
use netmon_common::network::subnet::SubnetPrefix;
use tracing::debug;

use crate::network::echo::EchoProber;

pub async fn probe_subnet<P, F>(
    local_ip: Ipv4Addr,
    prober: &P,
    cfg: &Config,
    cancel: &CancelToken,
    mut on_found: F,
) -> LiveHostSet
where
    P: EchoProber + ?Sized,
    F: FnMut(Ipv4Addr),
{
    let prefix = SubnetPrefix::from_local(local_ip);
    debug!("sweeping {prefix}1-254 with {} workers", cfg.workers);

    let mut replies = stream::iter(prefix.candidates())
        .map(move |candidate| probe_candidate(candidate, prober, cfg, cancel))
        .buffered(cfg.workers.max(1));

    let mut live = LiveHostSet::new();
    while let Some((candidate, alive)) = replies.next().await {
        if alive && live.insert(candidate) {
            on_found(candidate);
        }
    }

    if cancel.is_cancelled() {
        debug!("sweep of {prefix} cancelled with {} hosts confirmed", live.len());
    }
    live
}

async fn probe_candidate<P>(
    candidate: Ipv4Addr,
    prober: &P,
    cfg: &Config,
    cancel: &CancelToken,
) -> (Ipv4Addr, bool)
where
    P: EchoProber + ?Sized,
{
    let target = candidate.to_string();

    for _ in 0..cfg.echo_attempts.max(1) {
        if cancel.is_cancelled() {
            return (candidate, false);
        }

        let replied = tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            replied = prober.echo(&target, Some(cfg.echo_wait)) => replied,
        };

        if replied {
            return (candidate, true);
        }
    }

    (candidate, false)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
