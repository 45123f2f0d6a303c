mod commands;
mod terminal;

use anyhow::Context;
use commands::menu::{self, MenuExit};
use commands::{CommandLine, Commands, Session, info, ping, ports, sweep, watch};
use netmon_core::logbook::LogBook;
use terminal::input;

use crate::terminal::{logging, print};

/// Conventional status for a run ended by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    let logbook = LogBook::open(&cfg.log_dir).context("session logs cannot be stored")?;
    let session = Session::new(cfg, logbook);

    match commands.command {
        None => match menu::run(&session).await? {
            MenuExit::Chosen | MenuExit::Closed => {}
            MenuExit::Interrupted => {
                print::end_of_program();
                // A reader thread is still parked on stdin; leave without waiting for it.
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        },
        Some(command) => {
            print::banner(session.cfg.no_banner, session.cfg.quiet);
            let (cancel, _interrupt) = input::interruptible();

            match command {
                Commands::Info => {
                    info::device_info(&session, &cancel).await;
                }
                Commands::Sweep { from } => {
                    sweep::active_scan(&session, from, &cancel).await;
                }
                Commands::Ping { target } => {
                    ping::continuous_ping(&session, &target, &cancel).await;
                }
                Commands::Ports { target } => {
                    ports::port_scan(&session, &target, &cancel).await;
                }
                Commands::Watch { from } => {
                    watch::new_device_watch(&session, from, &cancel).await;
                }
            }
        }
    }

    print::end_of_program();
    Ok(())
}
