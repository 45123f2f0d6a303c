use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use netmon_core::network::echo::EchoProber;

/// A simulated network where only the listed addresses answer echoes.
pub struct FakeNetwork {
    alive: HashSet<String>,
    pub asked: Mutex<Vec<String>>,
}

impl FakeNetwork {
    pub fn with_hosts(hosts: &[&str]) -> Self {
        Self {
            alive: hosts.iter().map(|h| h.to_string()).collect(),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Hosts `prefix.octet` for every octet given.
    pub fn with_octets(prefix: [u8; 3], octets: &[u8]) -> Self {
        let hosts: Vec<String> = octets
            .iter()
            .map(|o| Ipv4Addr::new(prefix[0], prefix[1], prefix[2], *o).to_string())
            .collect();
        let refs: Vec<&str> = hosts.iter().map(String::as_str).collect();
        Self::with_hosts(&refs)
    }
}

#[async_trait]
impl EchoProber for FakeNetwork {
    async fn echo(&self, target: &str, _wait: Option<Duration>) -> bool {
        self.asked.lock().unwrap().push(target.to_string());
        self.alive.contains(target)
    }
}

pub fn lan(octets: &[u8]) -> netmon_common::network::host::LiveHostSet {
    octets.iter().map(|o| Ipv4Addr::new(192, 168, 1, *o)).collect()
}
