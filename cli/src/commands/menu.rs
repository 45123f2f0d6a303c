use colored::*;
use netmon_common::network::target::Target;
use tracing::{error, warn};

use crate::commands::{Session, info, ping, ports, sweep, watch};
use crate::terminal::input::{self, Prompt};
use crate::terminal::{colors, print};

const MENU: &str = r#"
[1] Show Device Info
[2] Scan Active Devices
[3] Continuous Ping Monitor
[4] Open Port Scan (Basic)
[5] Start New Device Watch
[6] Exit
"#;

pub enum MenuExit {
    /// The user picked "Exit".
    Chosen,
    /// Ctrl+C at a prompt.
    Interrupted,
    /// Standard input ran dry.
    Closed,
}

pub async fn run(session: &Session) -> anyhow::Result<MenuExit> {
    loop {
        print::banner(session.cfg.no_banner, session.cfg.quiet);
        print::print(&format!("{}", MENU.color(colors::MENU)));

        let choice = match input::prompt("Enter choice: ").await? {
            Prompt::Line(line) => line,
            Prompt::Interrupted => return Ok(MenuExit::Interrupted),
            Prompt::Closed => return Ok(MenuExit::Closed),
        };

        match choice.as_str() {
            "1" => {
                let (cancel, _interrupt) = input::interruptible();
                info::device_info(session, &cancel).await;
            }
            "2" => {
                let (cancel, _interrupt) = input::interruptible();
                sweep::active_scan(session, None, &cancel).await;
            }
            "3" => {
                let target = match ask_target("Enter IP or Domain to ping: ").await? {
                    Asked::Target(target) => target,
                    Asked::Skip => continue,
                    Asked::Exit(exit) => return Ok(exit),
                };
                let (cancel, _interrupt) = input::interruptible();
                ping::continuous_ping(session, &target, &cancel).await;
            }
            "4" => {
                let target = match ask_target("Enter IP to scan ports: ").await? {
                    Asked::Target(target) => target,
                    Asked::Skip => continue,
                    Asked::Exit(exit) => return Ok(exit),
                };
                let (cancel, _interrupt) = input::interruptible();
                ports::port_scan(session, &target, &cancel).await;
            }
            "5" => {
                let (cancel, _interrupt) = input::interruptible();
                watch::new_device_watch(session, None, &cancel).await;
            }
            "6" => {
                warn!("Exiting...");
                return Ok(MenuExit::Chosen);
            }
            _ => error!("Invalid choice!"),
        }
    }
}

enum Asked {
    Target(Target),
    /// Unusable input, back to the menu.
    Skip,
    Exit(MenuExit),
}

async fn ask_target(question: &str) -> anyhow::Result<Asked> {
    let line = match input::prompt(question).await? {
        Prompt::Line(line) => line,
        Prompt::Interrupted => return Ok(Asked::Exit(MenuExit::Interrupted)),
        Prompt::Closed => return Ok(Asked::Exit(MenuExit::Closed)),
    };

    match line.parse::<Target>() {
        Ok(target) => Ok(Asked::Target(target)),
        Err(e) => {
            error!("{e}");
            Ok(Asked::Skip)
        }
    }
}
