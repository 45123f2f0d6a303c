//! Console rendering. Every line goes out as a tracing event on
//! [`PRINT_TARGET`] so the sweep spinner can redraw around it.

use std::fmt::Display;

use colored::*;
use tracing::info;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "netmon::print";

/// Writes `msg` verbatim, without a status glyph.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

/// `fill` repeated on both sides of `title` up to [`TOTAL_WIDTH`] columns.
fn rule(fill: &str, title: &str) -> String {
    let pad = TOTAL_WIDTH.saturating_sub(console::measure_text_width(title));
    let left = pad / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title,
        fill.repeat(pad - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ NETMON v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule("═", &title.bright_green().bold().to_string()));
    banner::print();
}

/// Section title, hidden from `-q` upwards.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&rule("─", &title.bright_green().to_string()));
}

pub fn fat_separator() {
    print(&rule("═", ""));
}

/// `key....: value` lines with the dots lined up on the longest key.
pub fn key_values<V: Display>(pairs: &[(&str, V)]) {
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (key, value) in pairs {
        let dots = ".".repeat(width + 1 - key.len());
        print(&format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// ` - {msg}` in the given color, the shape of every per-item result line.
pub fn item(msg: &str, color: Color) {
    print(&format!(" - {}", msg.color(color)));
}

/// `[idx] name` followed by one branch per entry.
pub fn tree(idx: usize, name: &str, entries: &[(String, ColoredString)]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    for (i, (key, value)) in entries.iter().enumerate() {
        let branch = if i + 1 == entries.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(7usize.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centered(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

pub fn no_results(what: &str) {
    print(&format!("No {what} found.").red().bold().to_string());
}

pub fn end_of_program() {
    fat_separator();
}
