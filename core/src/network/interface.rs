use pnet::datalink::{self, NetworkInterface};

/// Interfaces worth showing next to the device identity: up, not loopback,
/// carrying at least one address. Wired names sort first.
pub fn active_interfaces(limit: usize) -> Vec<NetworkInterface> {
    prioritize(datalink::interfaces(), limit)
}

fn prioritize(interfaces: Vec<NetworkInterface>, limit: usize) -> Vec<NetworkInterface> {
    let mut interfaces: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|i| i.is_up() && !i.is_loopback() && !i.ips.is_empty())
        .collect();

    interfaces.sort_by_key(|i| if i.name.starts_with('e') { 0 } else { 1 });
    interfaces.into_iter().take(limit).collect()
}
