//! # Continuous Reachability Monitor
//!
//! Pings one target every interval until cancelled. Every cycle is reported,
//! not only changes. Nothing is logged to disk for this feature.

use std::time::Duration;

use netmon_common::cancel::CancelToken;
use netmon_common::network::probe::Reachability;
use netmon_common::network::target::Target;
use tokio::time::sleep;

use crate::network::echo::EchoProber;

/// Returns the number of completed cycles once `cancel` fires.
pub async fn monitor<P, F>(
    target: &Target,
    prober: &P,
    interval: Duration,
    cancel: &CancelToken,
    mut on_tick: F,
) -> u64
where
    P: EchoProber + ?Sized,
    F: FnMut(Reachability),
{
    let arg = target.as_arg();
    let mut cycles: u64 = 0;

    while !cancel.is_cancelled() {
        let replied = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            replied = prober.echo(&arg, None) => replied,
        };

        cycles += 1;
        on_tick(Reachability::from(replied));

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep(interval) => {}
        }
    }

    cycles
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
