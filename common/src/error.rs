use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that reach the user. Individual probe failures are not errors,
/// see [`crate::network::probe::ProbeOutcome`].
#[derive(Error, Debug)]
pub enum ReconError {
    #[error("unable to resolve local identity: {0}")]
    Resolution(String),

    #[error("cannot create log directory {}: {source}", .path.display())]
    LogDirectory { path: PathBuf, source: io::Error },

    #[error("cannot write log file {}: {source}", .path.display())]
    LogWrite { path: PathBuf, source: io::Error },
}
