//! # Probe Target Model
//!
//! What the user typed when asked for something to ping or port-scan:
//! * An IP address (e.g., `10.0.0.5`, `::1`).
//! * A host or domain name (e.g., `router.lan`, `example.com`).
//!
//! Names are kept verbatim and only resolved when a probe needs a socket address.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A literal IP address.
    Addr(IpAddr),
    /// A name left for the platform resolver.
    Name(String),
}

impl Target {
    /// The form handed to external tools such as `ping`.
    pub fn as_arg(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err("target cannot be empty".to_string());
        }

        if let Some(target) = parse_addr(s) {
            return Ok(target);
        }

        parse_name(s).ok_or_else(|| format!("invalid target: {s}"))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Addr(addr) => write!(f, "{addr}"),
            Target::Name(name) => write!(f, "{name}"),
        }
    }
}

fn parse_addr(s: &str) -> Option<Target> {
    s.parse::<IpAddr>().ok().map(Target::Addr)
}

/// Host names may contain letters, digits, '-', '_' and '.'.
fn parse_name(s: &str) -> Option<Target> {
    let valid = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    (valid && !s.starts_with('-')).then(|| Target::Name(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
