/// Typed result of one TCP connect attempt.
///
/// Callers that only care about open/closed use [`ProbeOutcome::is_open`];
/// the finer split is kept for anyone who wants to tell a refusal from a
/// silent drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// The connection was accepted.
    Open,
    /// The target actively refused the connection.
    Closed,
    /// Timed out, unreachable, unresolvable or any other failure.
    Indeterminate,
}

impl ProbeOutcome {
    pub fn is_open(&self) -> bool {
        matches!(self, ProbeOutcome::Open)
    }
}

/// Result of a single echo probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl From<bool> for Reachability {
    fn from(replied: bool) -> Self {
        if replied {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }
}
