//! ICMP reachability through the platform `ping` utility.
//!
//! Exit status 0 means a reply came back. Anything else, including a `ping`
//! binary that cannot be launched, counts as no reply.

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// A single echo request/reply exchange.
#[async_trait]
pub trait EchoProber: Send + Sync {
    /// Sends one echo to `target`. `wait` caps how long to wait for the reply,
    /// `None` leaves it to the platform default.
    async fn echo(&self, target: &str, wait: Option<Duration>) -> bool;
}

pub struct PingCommand {
    program: String,
    launch_warned: AtomicBool,
}

impl Default for PingCommand {
    fn default() -> Self {
        Self::new("ping")
    }
}

impl PingCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            launch_warned: AtomicBool::new(false),
        }
    }

    /// `-c 1 [-W secs] target`. Waits are whole seconds, at least one.
    pub fn args(target: &str, wait: Option<Duration>) -> Vec<String> {
        let mut args: Vec<String> = vec!["-c".into(), "1".into()];
        if let Some(wait) = wait {
            args.push("-W".into());
            args.push(wait.as_secs().max(1).to_string());
        }
        args.push(target.into());
        args
    }
}

#[async_trait]
impl EchoProber for PingCommand {
    async fn echo(&self, target: &str, wait: Option<Duration>) -> bool {
        let status = Command::new(&self.program)
            .args(Self::args(target, wait))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await;

        match status {
            Ok(status) => {
                debug!("echo {target}: {status}");
                status.success()
            }
            Err(e) => {
                if !self.launch_warned.swap(true, Ordering::Relaxed) {
                    warn!("Could not run '{}': {e}", self.program);
                }
                false
            }
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
