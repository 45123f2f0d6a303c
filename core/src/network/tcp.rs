use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use netmon_common::network::probe::ProbeOutcome;
use netmon_common::network::target::Target;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::debug;

/// One connect attempt. The stream, if any, is dropped before returning.
pub async fn connect_probe(addr: IpAddr, port: u16, connect_timeout: Duration) -> ProbeOutcome {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    let outcome = match timeout(connect_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => ProbeOutcome::Open,
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => ProbeOutcome::Closed,
        Ok(Err(_)) | Err(_) => ProbeOutcome::Indeterminate,
    };

    debug!("{socket_addr} -> {outcome:?}");
    outcome
}

/// Resolves a target to one address, preferring IPv4.
pub async fn resolve(target: &Target) -> Option<IpAddr> {
    match target {
        Target::Addr(addr) => Some(*addr),
        Target::Name(name) => {
            let addrs: Vec<IpAddr> = match lookup_host((name.as_str(), 0)).await {
                Ok(addrs) => addrs.map(|sa| sa.ip()).collect(),
                Err(e) => {
                    debug!("cannot resolve {name}: {e}");
                    return None;
                }
            };
            addrs
                .iter()
                .find(|ip| ip.is_ipv4())
                .or_else(|| addrs.first())
                .copied()
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
