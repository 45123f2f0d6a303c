//! Host name and LAN-facing IPv4 address of this device.
//!
//! The address is whatever the name service maps the host name to. On hosts
//! where that is a loopback or VPN address the sweep will target the wrong
//! /24; this mirrors how the name service is configured and is not corrected.

use std::net::{IpAddr, Ipv4Addr};

use netmon_common::error::ReconError;
use tokio::net::lookup_host;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: String,
    pub ip: Ipv4Addr,
}

pub async fn resolve_identity() -> Result<Identity, ReconError> {
    let hostname = sys_info::hostname()
        .map_err(|e| ReconError::Resolution(format!("host name unavailable: {e}")))?;

    let ip = resolve_ipv4(&hostname).await?;
    Ok(Identity { hostname, ip })
}

/// Forward lookup of `name`, keeping the first IPv4 answer.
pub async fn resolve_ipv4(name: &str) -> Result<Ipv4Addr, ReconError> {
    let addrs = lookup_host((name, 0))
        .await
        .map_err(|e| ReconError::Resolution(format!("{name}: {e}")))?;

    let ip = addrs.map(|sa| sa.ip()).find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    });

    debug!("{name} resolved to {ip:?}");
    ip.ok_or_else(|| ReconError::Resolution(format!("{name} has no IPv4 address")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
