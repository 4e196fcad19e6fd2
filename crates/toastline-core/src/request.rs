#![forbid(unsafe_code)]

//! Toast requests and identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kind::ToastKind;

/// Stable identifier for a toast.
///
/// Directory-assigned ids look like `toast-7`; callers may supply
/// their own to address a toast later (e.g. to replace a "loading"
/// toast with a "success" one).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A declarative toast request, as supplied by a caller or published
/// by the directory.
///
/// All fields except `message` are optional at this level; the
/// renderer normalizes them when it materializes the toast.
/// `Some(Duration::ZERO)` means "never auto-dismiss".
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    /// Stable identifier. When absent, the renderer derives one from
    /// the request's content fingerprint.
    pub id: Option<ToastId>,
    /// Severity kind.
    pub kind: ToastKind,
    /// Optional explicit title; defaults to the kind's label.
    pub title: Option<String>,
    /// Display text.
    pub message: String,
    /// Auto-dismiss delay. `None` defers to the renderer's default;
    /// zero disables the timer entirely.
    pub duration: Option<Duration>,
    /// Whether a manual close affordance is shown. Defaults to true.
    pub closable: Option<bool>,
}

impl ToastRequest {
    /// Create a request with the given kind and message.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            title: None,
            message: message.into(),
            duration: None,
            closable: None,
        }
    }

    /// Success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Loading request with the timer disabled.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Loading, message).duration(Duration::ZERO)
    }

    /// Set an explicit id.
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an explicit title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an explicit auto-dismiss delay. Zero disables the timer.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set whether the toast shows a close affordance.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Content fingerprint used to derive an id for anonymous
    /// requests. Stable across clones and re-syncs of the same value.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::hash::DefaultHasher::new();
        self.kind.hash(&mut hasher);
        self.title.hash(&mut hasher);
        self.message.hash(&mut hasher);
        self.duration.hash(&mut hasher);
        self.closable.hash(&mut hasher);
        hasher.finish()
    }
}

/// Per-call options for `ToastDirectory::show_with`.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Explicit auto-dismiss delay; overrides per-kind and global
    /// defaults. Zero disables the timer.
    pub duration: Option<Duration>,
    /// Whether a close affordance is shown. Defaults to true.
    pub closable: Option<bool>,
    /// Explicit id. Re-using a live id replaces that toast in place.
    pub id: Option<ToastId>,
}

impl ShowOptions {
    /// Options with only a duration set.
    pub fn duration(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    /// Options with only an id set.
    pub fn id(id: impl Into<ToastId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let request = ToastRequest::warning("disk almost full")
            .id("toast-disk")
            .title("Storage")
            .duration(Duration::from_secs(8))
            .closable(false);

        assert_eq!(request.kind, ToastKind::Warning);
        assert_eq!(request.id, Some(ToastId::from("toast-disk")));
        assert_eq!(request.title.as_deref(), Some("Storage"));
        assert_eq!(request.duration, Some(Duration::from_secs(8)));
        assert_eq!(request.closable, Some(false));
    }

    #[test]
    fn loading_disables_timer() {
        let request = ToastRequest::loading("Uploading...");
        assert_eq!(request.duration, Some(Duration::ZERO));
    }

    #[test]
    fn fingerprint_stable_across_clones() {
        let request = ToastRequest::info("hello");
        assert_eq!(request.fingerprint(), request.clone().fingerprint());
    }

    #[test]
    fn fingerprint_differs_on_content() {
        let a = ToastRequest::info("hello");
        let b = ToastRequest::info("goodbye");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
