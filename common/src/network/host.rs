//! Result sets produced by a single sweep or port scan.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

/// Well-known TCP ports checked by a port scan, in scan order.
pub const COMMON_PORTS: [u16; 12] = [21, 22, 23, 25, 53, 80, 110, 139, 143, 443, 445, 3389];

/// Hosts that answered during a sweep.
///
/// Iteration is ascending by address, which for one /24 is the order a sweep
/// discovers them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveHostSet {
    hosts: BTreeSet<Ipv4Addr>,
}

impl LiveHostSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the host was not already present.
    pub fn insert(&mut self, host: Ipv4Addr) -> bool {
        self.hosts.insert(host)
    }

    pub fn contains(&self, host: &Ipv4Addr) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Addr> {
        self.hosts.iter()
    }

    /// Hosts in `self` that are absent from `other`.
    pub fn difference(&self, other: &LiveHostSet) -> LiveHostSet {
        self.hosts.difference(&other.hosts).copied().collect()
    }

    pub fn is_subset(&self, other: &LiveHostSet) -> bool {
        self.hosts.is_subset(&other.hosts)
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.hosts.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<Ipv4Addr> for LiveHostSet {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Ipv4Addr> for LiveHostSet {
    fn extend<I: IntoIterator<Item = Ipv4Addr>>(&mut self, iter: I) {
        self.hosts.extend(iter);
    }
}

impl IntoIterator for LiveHostSet {
    type Item = Ipv4Addr;
    type IntoIter = std::collections::btree_set::IntoIter<Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.into_iter()
    }
}

impl<'a> IntoIterator for &'a LiveHostSet {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::collections::btree_set::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

/// Ports that accepted a connection, kept in the order they were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPortSet {
    ports: Vec<u16>,
}

impl OpenPortSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, port: u16) {
        if !self.ports.contains(&port) {
            self.ports.push(port);
        }
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ports.contains(&port)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.ports.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<u16> for OpenPortSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut set = Self::new();
        for port in iter {
            set.push(port);
        }
        set
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

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(octets: &[u8]) -> LiveHostSet {
        octets.iter().map(|o| Ipv4Addr::new(192, 168, 1, *o)).collect()
    }

    #[test]
    fn live_hosts_iterate_in_address_order() {
        let set = hosts(&[254, 5, 1]);
        assert_eq!(set.to_lines(), vec!["192.168.1.1", "192.168.1.5", "192.168.1.254"]);
    }

    #[test]
    fn difference_ignores_discovery_order() {
        let known = hosts(&[5, 1]);
        let a = hosts(&[9, 1, 5]);
        let b = hosts(&[1, 5, 9]);
        assert_eq!(a.difference(&known), b.difference(&known));
        assert_eq!(a.difference(&known), hosts(&[9]));
    }

    #[test]
    fn open_ports_keep_scan_order_without_duplicates() {
        let ports: OpenPortSet = [443, 22, 443].into_iter().collect();
        assert_eq!(ports.as_slice(), &[443, 22]);
        assert!(ports.contains(22));
        assert!(!ports.contains(80));
    }
}
