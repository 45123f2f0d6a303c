pub mod info;
pub mod menu;
pub mod ping;
pub mod ports;
pub mod sweep;
pub mod watch;

#[cfg(test)]
mod testing;

use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use netmon_common::config::Config;
use netmon_common::network::target::Target;
use netmon_core::logbook::LogBook;
use netmon_core::network::echo::{EchoProber, PingCommand};

#[derive(Parser)]
#[command(name = "netmon")]
#[command(version, about = "A pocket network monitor. Runs the interactive menu when no command is given.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory for session logs
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Maximum probes in flight at once
    #[arg(long, global = true, default_value_t = 64)]
    pub workers: usize,

    /// Echoes sent to each host during a sweep before calling it offline
    #[arg(long, global = true, default_value_t = 1)]
    pub echo_attempts: u8,

    /// Reduce output (-q hides banners, -qq also hides per-host lines)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show host name, local IP and active interfaces
    #[command(alias = "i")]
    Info,
    /// Ping every address of the local /24
    #[command(alias = "s")]
    Sweep {
        /// Sweep the /24 of this address instead of the resolved local IP
        #[arg(long)]
        from: Option<Ipv4Addr>,
    },
    /// Ping a host every two seconds until Ctrl+C
    #[command(alias = "p")]
    Ping { target: Target },
    /// Check the common TCP ports of a host
    #[command(alias = "o")]
    Ports { target: Target },
    /// Re-sweep periodically and report devices that join
    #[command(alias = "w")]
    Watch {
        #[arg(long)]
        from: Option<Ipv4Addr>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            log_dir: self.log_dir.clone().unwrap_or(defaults.log_dir.clone()),
            workers: self.workers,
            echo_attempts: self.echo_attempts,
            quiet: self.quiet,
            no_banner: self.no_banner,
            ..defaults
        }
        .normalized()
    }
}

/// Everything a feature needs for one run of the tool.
pub struct Session {
    pub cfg: Config,
    pub logbook: LogBook,
    pub prober: Box<dyn EchoProber>,
}

impl Session {
    /// Echoes go through the platform `ping`.
    pub fn new(cfg: Config, logbook: LogBook) -> Self {
        Self::with_prober(cfg, logbook, Box::new(PingCommand::default()))
    }

    pub fn with_prober(cfg: Config, logbook: LogBook, prober: Box<dyn EchoProber>) -> Self {
        Self { cfg, logbook, prober }
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
