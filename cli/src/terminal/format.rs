use std::net::Ipv6Addr;

/// Short label for an IPv6 address in the interface tree.
pub fn ipv6_to_type_str(addr: &Ipv6Addr) -> &'static str {
    match addr.segments()[0] {
        // 2000::/3
        0x2000..=0x3fff => "GUA",
        s if s & 0xfe00 == 0xfc00 => "ULA",
        s if s & 0xffc0 == 0xfe80 => "LLA",
        _ => "IPv6",
    }
}

/// Comma separated list for one-line alerts.
pub fn join_addrs<'a, I, T>(items: I) -> String
where
    I: IntoIterator<Item = &'a T>,
    T: ToString + 'a,
{
    items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
