//! # Subnet Prefix
//!
//! A sweep always works on a naive /24: the first three octets of the local
//! address are kept and the host octet walks from 1 to 254. No netmask is
//! consulted, network and broadcast addresses are never probed.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const FIRST_HOST_OCTET: u8 = 1;
pub const LAST_HOST_OCTET: u8 = 254;
pub const CANDIDATE_COUNT: usize = (LAST_HOST_OCTET - FIRST_HOST_OCTET + 1) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetPrefix {
    octets: [u8; 3],
}

impl SubnetPrefix {
    /// Truncates `local_ip` to its first three octets.
    pub fn from_local(local_ip: Ipv4Addr) -> Self {
        let [a, b, c, _] = local_ip.octets();
        Self { octets: [a, b, c] }
    }

    pub fn host(&self, octet: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, octet)
    }

    /// Every candidate address of the sweep in ascending order.
    pub fn candidates(self) -> impl Iterator<Item = Ipv4Addr> {
        (FIRST_HOST_OCTET..=LAST_HOST_OCTET).map(move |octet| self.host(octet))
    }

    pub fn contains(&self, ip: &Ipv4Addr) -> bool {
        let [a, b, c, d] = ip.octets();
        [a, b, c] == self.octets && (FIRST_HOST_OCTET..=LAST_HOST_OCTET).contains(&d)
    }
}

impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}.")
    }
}

impl FromStr for SubnetPrefix {
    type Err = String;

    /// Accepts a full dotted-quad and derives the prefix from it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Ipv4Addr>()
            .map(Self::from_local)
            .map_err(|e| format!("invalid IPv4 address '{s}': {e}"))
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
