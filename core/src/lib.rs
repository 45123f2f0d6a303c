//! # netmon core
//!
//! The probing engines behind every menu entry. Each engine takes its
//! collaborators (echo primitive, configuration, cancellation token) as
//! arguments and reports progress through callbacks, so the terminal layer
//! decides how anything is shown.

pub mod identity;
pub mod logbook;
pub mod monitor;
pub mod network;
pub mod ports;
pub mod sweep;
pub mod watch;
