#![forbid(unsafe_code)]

//! Toast severity kinds.

use serde::{Deserialize, Serialize};

/// Severity/category tag of a toast.
///
/// The set is closed: callers cannot supply an unknown kind, so the
/// icon and label mappings below are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Error,
    /// Neutral informational message.
    #[default]
    Info,
    /// Non-blocking warning.
    Warning,
    /// Long-running operation in progress. Typically shown with a
    /// zero duration so it persists until dismissed explicitly.
    Loading,
    /// Plain notice without semantic coloring.
    Neutral,
    /// Message originating from the system rather than a user action.
    System,
}

impl ToastKind {
    /// All kinds, in display order.
    pub const ALL: [ToastKind; 7] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
        ToastKind::Loading,
        ToastKind::Neutral,
        ToastKind::System,
    ];

    /// Display title used when a toast carries no explicit title.
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Loading => "Loading",
            ToastKind::Neutral => "Notice",
            ToastKind::System => "System",
            ToastKind::Info => "Info",
        }
    }

    /// Glyph shown next to the message.
    pub fn icon(self) -> char {
        match self {
            ToastKind::Success => '\u{2713}', // ✓
            ToastKind::Error => '\u{2717}',   // ✗
            ToastKind::Warning => '!',
            ToastKind::Loading => '\u{21BB}', // ↻
            ToastKind::Neutral => '\u{2022}', // •
            ToastKind::System => '\u{2601}',  // ☁
            ToastKind::Info => 'i',
        }
    }

    /// ASCII fallback for terminals without the glyphs above.
    pub fn icon_ascii(self) -> char {
        match self {
            ToastKind::Success => '+',
            ToastKind::Error => 'x',
            ToastKind::Warning => '!',
            ToastKind::Loading => '~',
            ToastKind::Neutral => '-',
            ToastKind::System => '@',
            ToastKind::Info => 'i',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_every_kind() {
        for kind in ToastKind::ALL {
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn neutral_label_is_notice() {
        assert_eq!(ToastKind::Neutral.label(), "Notice");
    }

    #[test]
    fn ascii_fallback_is_ascii() {
        for kind in ToastKind::ALL {
            assert!(kind.icon_ascii().is_ascii(), "{kind:?}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ToastKind::System).unwrap();
        assert_eq!(json, "\"system\"");
    }
}
