#![forbid(unsafe_code)]

//! Interactive terminal playground for the toast subsystem: one
//! directory, one host, a key per toast kind.

mod cli;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style, terminal};
use unicode_width::UnicodeWidthChar;

use toastline::{DismissReason, Phase, PlacedToast, ToastDirectory, ToastDismissal, ToastHost};
use toastline_core::{Anchor, ConfigPatch, ShowOptions, ToastKind};

const POLL_INTERVAL: Duration = Duration::from_millis(60);

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to open log file {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = run(&opts) {
        eprintln!("Demo error: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> io::Result<()> {
    let mut directory = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&text)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            ToastDirectory::with_config(config)
        }
        None => ToastDirectory::new(),
    };
    let mut host = ToastHost::new();
    host.attach(&mut directory);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = event_loop(&mut stdout, &mut directory, &mut host, opts);
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(
    stdout: &mut impl Write,
    directory: &mut ToastDirectory,
    host: &mut ToastHost,
    opts: &cli::Opts,
) -> io::Result<()> {
    let started = Instant::now();
    let mut last_event: Option<ToastDismissal> = None;
    let mut anchor_index = 0usize;
    let mut counter = 0u64;

    loop {
        let now = Instant::now();
        host.pump(directory, now);
        if let Some(event) = host.drain_events().pop() {
            tracing::info!(id = %event.id, reason = ?event.reason, "dismissal");
            last_event = Some(event);
        }
        draw(stdout, host, last_event.as_ref(), opts.ascii, now)?;

        if opts.exit_after_ms > 0
            && started.elapsed() >= Duration::from_millis(opts.exit_after_ms)
        {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(key, directory, host, &mut anchor_index, &mut counter) {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Returns true when the demo should quit.
fn handle_key(
    key: KeyEvent,
    directory: &mut ToastDirectory,
    host: &mut ToastHost,
    anchor_index: &mut usize,
    counter: &mut u64,
) -> bool {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char(c @ '1'..='7') => {
            let kind = ToastKind::ALL[(c as u8 - b'1') as usize];
            *counter += 1;
            let message = sample(kind, *counter);
            if kind == ToastKind::Loading {
                // Loading persists until dismissed.
                directory.show_with(kind, message, ShowOptions::duration(Duration::ZERO));
            } else {
                directory.show(kind, message);
            }
        }
        KeyCode::Char('d') => {
            let newest = host
                .visible()
                .find(|t| t.phase() != Phase::Leaving)
                .map(|t| t.id.clone());
            if let Some(id) = newest {
                host.close(&id, now);
            }
        }
        KeyCode::Char('c') => directory.clear(),
        KeyCode::Char('p') => {
            *anchor_index = (*anchor_index + 1) % Anchor::ALL.len();
            directory.configure(ConfigPatch::anchor(Anchor::ALL[*anchor_index]));
        }
        _ => {}
    }
    false
}

fn sample(kind: ToastKind, n: u64) -> String {
    match kind {
        ToastKind::Success => format!("Changes saved ({n})"),
        ToastKind::Error => format!("Request failed ({n})"),
        ToastKind::Info => format!("3 new items in your feed ({n})"),
        ToastKind::Warning => format!("Disk space below 10% ({n})"),
        ToastKind::Loading => format!("Uploading report... ({n})"),
        ToastKind::Neutral => format!("Session resumed ({n})"),
        ToastKind::System => format!("Maintenance window at 02:00 ({n})"),
    }
}

fn draw(
    stdout: &mut impl Write,
    host: &mut ToastHost,
    last_event: Option<&ToastDismissal>,
    ascii: bool,
    now: Instant,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    queue!(
        stdout,
        cursor::MoveTo(1, 0),
        style::Print("toastline demo"),
        cursor::MoveTo(1, 1),
        style::Print("1-7 show toast   d dismiss newest   c clear   p cycle anchor   q quit"),
    )?;
    queue!(
        stdout,
        cursor::MoveTo(1, 2),
        style::Print(format!(
            "anchor: {:?}   active: {}",
            host.config().anchor,
            host.visible().count()
        )),
    )?;
    if let Some(event) = last_event {
        let reason = match event.reason {
            DismissReason::Manual => "manual",
            DismissReason::Timeout => "timeout",
        };
        queue!(
            stdout,
            cursor::MoveTo(1, rows.saturating_sub(1)),
            style::Print(format!("last dismissal: {} ({reason})", event.id)),
        )?;
    }

    for placed in &host.layout(cols, rows, now) {
        draw_toast(stdout, placed, ascii)?;
    }
    stdout.flush()
}

fn draw_toast(stdout: &mut impl Write, placed: &PlacedToast<'_>, ascii: bool) -> io::Result<()> {
    let toast = placed.toast;
    let rect = placed.rect;
    let inner = rect.width.saturating_sub(2) as usize;
    let icon = if ascii {
        toast.kind.icon_ascii()
    } else {
        toast.kind.icon()
    };

    queue!(stdout, style::SetForegroundColor(kind_color(toast.kind)))?;
    if placed.opacity < 0.5 {
        queue!(stdout, style::SetAttribute(style::Attribute::Dim))?;
    }

    queue!(
        stdout,
        cursor::MoveTo(rect.x, rect.y),
        style::Print(format!("\u{250C}{}\u{2510}", "\u{2500}".repeat(inner))),
    )?;

    let mut row = rect.y + 1;
    if toast.title.is_some() {
        let title = fit(&format!(" {icon} {}", toast.display_title()), inner);
        queue!(
            stdout,
            cursor::MoveTo(rect.x, row),
            style::Print(format!("\u{2502}{title}\u{2502}")),
        )?;
        row += 1;
        let body = fit(&format!("   {}", toast.message), inner);
        queue!(
            stdout,
            cursor::MoveTo(rect.x, row),
            style::Print(format!("\u{2502}{body}\u{2502}")),
        )?;
        row += 1;
    } else {
        let body = fit(&format!(" {icon} {}", toast.message), inner);
        queue!(
            stdout,
            cursor::MoveTo(rect.x, row),
            style::Print(format!("\u{2502}{body}\u{2502}")),
        )?;
        row += 1;
    }

    queue!(
        stdout,
        cursor::MoveTo(rect.x, row),
        style::Print(format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner))),
        style::SetAttribute(style::Attribute::Reset),
        style::ResetColor,
    )?;
    Ok(())
}

fn kind_color(kind: ToastKind) -> style::Color {
    match kind {
        ToastKind::Success => style::Color::Green,
        ToastKind::Error => style::Color::Red,
        ToastKind::Info => style::Color::Cyan,
        ToastKind::Warning => style::Color::Yellow,
        ToastKind::Loading => style::Color::Magenta,
        ToastKind::Neutral => style::Color::Grey,
        ToastKind::System => style::Color::Blue,
    }
}

/// Truncate or pad `s` to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_short_strings() {
        assert_eq!(fit("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_long_strings() {
        assert_eq!(fit("abcdef", 4), "abcd");
    }

    #[test]
    fn fit_never_splits_wide_glyphs() {
        // A width-2 glyph that does not fit is dropped, not halved.
        assert_eq!(fit("a完", 2), "a ");
    }

    #[test]
    fn sample_messages_cover_all_kinds() {
        for kind in ToastKind::ALL {
            assert!(!sample(kind, 1).is_empty());
        }
    }
}
