#![forbid(unsafe_code)]

//! Command-line argument parsing for the toast demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `TOASTLINE_DEMO_*`.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Toastline Demo — interactive toast notification playground

USAGE:
    toastline-demo [OPTIONS]

OPTIONS:
    --config=FILE        Load display configuration from a JSON file
    --log-file=FILE      Append tracing output to FILE (filtered by RUST_LOG)
    --ascii              Use ASCII icons instead of Unicode glyphs
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    1  Success toast     5  Loading toast (stays until dismissed)
    2  Error toast       6  Neutral toast
    3  Info toast        7  System toast
    4  Warning toast
    d  Dismiss the newest toast
    c  Clear all toasts
    p  Cycle the stack anchor
    q / Esc / Ctrl+C     Quit

CONFIG FILE:
    JSON object with any of: position (e.g. \"bottom-left\"),
    defaultDurationMs, typeDurations (per-kind ms), maxToasts.

ENVIRONMENT VARIABLES:
    TOASTLINE_DEMO_CONFIG          Override --config
    TOASTLINE_DEMO_LOG_FILE        Override --log-file
    TOASTLINE_DEMO_EXIT_AFTER_MS   Auto-quit after N milliseconds (for testing)";

/// Parsed command-line options.
pub struct Opts {
    /// Path to a JSON display configuration, if any.
    pub config: Option<String>,
    /// Path tracing output is appended to, if any.
    pub log_file: Option<String>,
    /// Render ASCII icons instead of Unicode glyphs.
    pub ascii: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: None,
            log_file: None,
            ascii: false,
            exit_after_ms: 0,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("TOASTLINE_DEMO_CONFIG") {
            opts.config = Some(val);
        }
        if let Ok(val) = env::var("TOASTLINE_DEMO_LOG_FILE") {
            opts.log_file = Some(val);
        }
        if let Ok(val) = env::var("TOASTLINE_DEMO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("toastline-demo {VERSION}");
                    process::exit(0);
                }
                "--ascii" => {
                    opts.ascii = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --exit-after-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
