use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

const TICKS: &[&str] = &["(    )", "( .  )", "( .. )", "(... )", "(....)", "( ...)", "(  ..)", "(   .)"];

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Turns `span` into a spinner with an initial message. It shows up once
/// the span is first entered.
pub fn attach(span: &Span, message: &str) {
    span.pb_set_style(&style());
    span.pb_set_message(message);
}

/// Replaces the spinner text with the running count of live hosts.
pub fn report_found(span: &Span, count: usize) {
    let hosts = format!("{count} online").color(colors::ONLINE).bold();
    span.pb_set_message(&format!("Sweeping... {hosts} so far"));
}
