//! CLI output formatting.
//!
//! Human-readable output uses colored symbols; `--json` switches every helper
//! to one JSON object per line (`{"type": ..., "payload": ...}`) for scripting.
//! Streamed market messages never go through here; they are logged.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Global CLI flags that shape output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    /// Suppress informational lines in human mode. Warnings and errors still print.
    pub quiet: bool,
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

    const fn suppresses_info(self) -> bool {
        !self.json && self.quiet
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags. Call once, before any output.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Number of `-v` flags given.
#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Where a line goes and whether `--quiet` may drop it.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Alert,
}

fn envelope(kind: &str, payload: Value) -> Value {
    json!({ "type": kind, "payload": payload })
}

/// Emit one line: a JSON envelope in JSON mode, otherwise the human rendering.
fn emit(level: Level, kind: &str, payload: Value, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", envelope(kind, payload));
        return;
    }
    if level == Level::Info && config.suppresses_info() {
        return;
    }
    human();
}

/// Application name and version.
pub fn header(version: &str) {
    emit(
        Level::Info,
        "header",
        json!({ "app": "polyfeed", "version": version }),
        || {
            println!("{} {}", "polyfeed".bold(), version.dimmed());
            println!();
        },
    );
}

/// A labeled value, aligned under the current section.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Info,
        "field",
        json!({ "label": label, "value": &value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn section(title: &str) {
    emit(Level::Info, "section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

pub fn success(message: &str) {
    emit(Level::Info, "success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn note(message: &str) {
    emit(Level::Info, "note", json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

pub fn warning(message: &str) {
    emit(Level::Alert, "warning", json!({ "message": message }), || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Errors go to stderr in both modes.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", json!({ "message": message })));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a command's whole result as a single JSON document.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Cyan in human mode, plain in JSON mode.
pub fn highlight(value: impl Display) -> String {
    if is_json() {
        return value.to_string();
    }
    value.cyan().to_string()
}

pub fn muted(value: impl Display) -> String {
    if is_json() {
        return value.to_string();
    }
    value.dimmed().to_string()
}
