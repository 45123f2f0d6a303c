use colored::*;
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::terminal::{colors, format};

/// Tree branches for one interface: every address with its family, then the MAC.
pub fn interface_entries(interface: &NetworkInterface) -> Vec<(String, ColoredString)> {
    let mut entries: Vec<(String, ColoredString)> = interface.ips.iter().map(address_entry).collect();
    if let Some(mac) = interface.mac {
        entries.push(("MAC".to_string(), mac.to_string().color(colors::MAC_ADDR)));
    }
    entries
}

fn address_entry(network: &IpNetwork) -> (String, ColoredString) {
    let (key, addr_color, prefix_color) = match network {
        IpNetwork::V4(_) => ("IPv4", colors::IPV4_ADDR, colors::IPV4_PREFIX),
        IpNetwork::V6(v6) => (format::ipv6_to_type_str(&v6.ip()), colors::IPV6_ADDR, colors::IPV6_PREFIX),
    };

    let value = format!(
        "{}{}{}",
        network.ip().to_string().color(addr_color),
        "/".color(colors::SEPARATOR),
        network.prefix().to_string().color(prefix_color)
    );
    (key.to_string(), value.normal())
}
