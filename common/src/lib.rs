//! # netmon common
//!
//! Models and plumbing shared by the engines in `netmon-core` and the terminal
//! front-end in `netmon-cli`. Nothing in here touches the network.

pub mod cancel;
pub mod config;
pub mod error;
pub mod network;
