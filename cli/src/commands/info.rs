use colored::*;
use netmon_common::cancel::CancelToken;
use netmon_core::identity::{self, Identity};
use netmon_core::network::interface;
use tracing::{error, info, warn};

use crate::commands::Session;
use crate::terminal::{colors, network_fmt, print};

const MAX_INTERFACES: usize = 10;

/// Menu entry 1: identity plus the interfaces that carry it. A lookup stuck
/// on the name service gives way to Ctrl+C.
pub async fn device_info(session: &Session, cancel: &CancelToken) -> Option<Identity> {
    print::header("device info", session.cfg.quiet);
    let identity = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("Device info interrupted.");
            return None;
        }
        identity = show_identity() => identity,
    };

    let interfaces = interface::active_interfaces(MAX_INTERFACES);
    if !interfaces.is_empty() {
        print::header("interfaces", session.cfg.quiet);
        for (idx, intf) in interfaces.iter().enumerate() {
            print::tree(idx, &intf.name, &network_fmt::interface_entries(intf));
        }
    }

    identity
}

/// Resolves and prints host name and local IP. Failures are reported, not returned.
pub async fn show_identity() -> Option<Identity> {
    info!("Fetching Device Info...");

    match identity::resolve_identity().await {
        Ok(identity) => {
            print::key_values(&[
                ("Hostname", identity.hostname.clone().color(colors::ACCENT)),
                ("Local IP", identity.ip.to_string().color(colors::IPV4_ADDR)),
            ]);
            Some(identity)
        }
        Err(e) => {
            error!("Error fetching IP: {e}");
            None
        }
    }
}
