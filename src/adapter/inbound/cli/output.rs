//! Terminal output for CLI handlers.
//!
//! With `--json` each call prints one `{"type", "payload"}` object per line
//! on stdout. `--quiet` drops everything except warnings, failures and
//! errors.

use std::fmt::Display;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Global output flags, set once from the parsed command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: RwLock<OutputConfig> = RwLock::new(OutputConfig::new(false, false, 0));

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Whether a line survives `--quiet`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Priority {
    Regular,
    Always,
}

fn current() -> OutputConfig {
    *OUTPUT.read().unwrap_or_else(PoisonError::into_inner)
}

/// Print `kind`/`payload` as a JSON line, or run `render` for the terminal.
fn emit(kind: &str, payload: Value, priority: Priority, render: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if priority == Priority::Always || !config.quiet {
        render();
    }
}

/// Style `value` for the terminal; JSON mode gets the plain text.
fn paint(value: impl Display, style: impl FnOnce(&String) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        style(&value)
    }
}

/// Apply the global `--json`, `--quiet` and `-v` flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write().unwrap_or_else(PoisonError::into_inner) = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// App name and version, shown before the startup fields of `run`.
pub fn header(version: &str) {
    let app = env!("CARGO_PKG_NAME");
    emit(
        "header",
        json!({ "app": app, "version": version }),
        Priority::Regular,
        || println!("{} {}\n", app.bold(), version.dimmed()),
    );
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), Priority::Regular, || {
        println!("\n{}", title.bold());
    });
}

/// A `label  value` row.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        Priority::Regular,
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

/// Each line of a multi-line block, indented. Used for report previews.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), Priority::Regular, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), Priority::Regular, || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), Priority::Regular, || {
        println!("  {}", message.dimmed());
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), Priority::Regular, || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), Priority::Always, || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Print an error to stderr, in JSON mode too.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Start a spinner for a network call. Hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = current();
    let pb = if config.json || config.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, "spinner_success", message, Priority::Regular, "✓".green());
}

/// Failures stay visible under `--quiet`.
pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, "spinner_fail", message, Priority::Always, "×".red());
}

fn finish_spinner(
    pb: &ProgressBar,
    kind: &str,
    message: &str,
    priority: Priority,
    mark: impl Display,
) {
    let mut shown = false;
    emit(kind, json!({ "message": message }), priority, || {
        pb.finish_with_message(format!("{mark} {message}"));
        shown = true;
    });
    if !shown {
        pb.finish_and_clear();
    }
}

#[must_use]
pub fn highlight(value: impl Display) -> String {
    paint(value, |v| v.cyan().to_string())
}

#[must_use]
pub fn muted(value: impl Display) -> String {
    paint(value, |v| v.dimmed().to_string())
}

/// Print a command's JSON result object as-is.
pub fn json_output(value: Value) {
    println!("{value}");
}
