use std::io::{self, BufRead};

use colored::*;
use console::Term;
use netmon_common::cancel::CancelToken;
use tokio::task::JoinHandle;

use crate::terminal::colors;

pub enum Prompt {
    Line(String),
    /// Ctrl+C while waiting for input.
    Interrupted,
    /// Standard input was closed.
    Closed,
}

/// Asks `question` and waits for one line of input.
///
/// The read happens on a blocking thread so Ctrl+C can still be observed.
/// After `Interrupted` that thread is still parked on stdin; the caller is
/// expected to exit the process.
pub async fn prompt(question: &str) -> anyhow::Result<Prompt> {
    let term = Term::stderr();
    term.write_str(&format!("{}", question.color(colors::MENU)))?;
    term.flush()?;

    tokio::select! {
        line = tokio::task::spawn_blocking(read_line) => {
            Ok(match line?? {
                Some(line) => Prompt::Line(line.trim().to_string()),
                None => Prompt::Closed,
            })
        }
        _ = tokio::signal::ctrl_c() => Ok(Prompt::Interrupted),
    }
}

fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

/// Cancels a token on Ctrl+C for as long as the handle lives.
pub struct InterruptHandle {
    listener: JoinHandle<()>,
}

impl InterruptHandle {
    pub fn arm(cancel: &CancelToken) -> Self {
        let cancel = cancel.clone();
        let listener = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
        Self { listener }
    }
}

impl Drop for InterruptHandle {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

/// A fresh token wired to Ctrl+C.
pub fn interruptible() -> (CancelToken, InterruptHandle) {
    let cancel = CancelToken::new();
    let handle = InterruptHandle::arm(&cancel);
    (cancel, handle)
}
