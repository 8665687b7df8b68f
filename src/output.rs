// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

impl OutputMode {
    pub fn from_flags(quiet: bool, json: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print installed component references, one per line.
    pub fn components(&self, items: &[String]) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                for item in items {
                    println!("{item}");
                }
            }
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(&ComponentsEvent {
                    event: "components",
                    components: items,
                }) {
                    println!("{json}");
                }
            }
        }
    }

    /// Print the status of one component.
    pub fn status(&self, status: &ComponentStatus<'_>) {
        match self.mode {
            OutputMode::Normal => {
                let state = if status.installed {
                    "installed"
                } else {
                    "not installed"
                };
                println!("{}: {}", status.reference, state);
                if let Some(dependant) = status.working_dir_dependant {
                    println!(
                        "  recreated on working directory change: {}",
                        if dependant { "yes" } else { "no" }
                    );
                }
            }
            OutputMode::Quiet => println!("{}", status.installed),
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(status) {
                    println!("{json}");
                }
            }
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "success",
                    message,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    println!("{json}");
                }
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Print a follow-up suggestion for an error (human modes only).
    pub fn hint(&self, message: &str) {
        if self.mode != OutputMode::Json {
            eprintln!("hint: {message}");
        }
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }
}

/// Installation status of a single component.
#[derive(Debug, Serialize)]
pub struct ComponentStatus<'a> {
    pub reference: &'a str,
    pub installed: bool,
    /// Only known for registry components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir_dependant: Option<bool>,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct ComponentsEvent<'a> {
    event: &'a str,
    components: &'a [String],
}
