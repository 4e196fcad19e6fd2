#![forbid(unsafe_code)]

//! Display configuration for the toast directory.
//!
//! Durations cross the serde boundary as integer milliseconds (the
//! wire shape the original host pages produce); negative values clamp
//! to zero, which doubles as the "never auto-dismiss" sentinel.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::kind::ToastKind;

/// Convert caller-supplied milliseconds to a duration, clamping
/// negatives to zero (timer disabled, never "immediate").
pub fn duration_from_millis(ms: i64) -> Duration {
    Duration::from_millis(ms.max(0) as u64)
}

/// Display configuration owned by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigWire", into = "ConfigWire")]
pub struct DisplayConfig {
    /// Where the toast stack is pinned.
    pub anchor: Anchor,
    /// Fallback auto-dismiss delay when neither the call nor the kind
    /// supplies one.
    pub default_duration: Duration,
    /// Per-kind auto-dismiss defaults. Entries for kinds never shown
    /// are kept but never consulted.
    pub kind_durations: HashMap<ToastKind, Duration>,
    /// Upper bound on concurrently published toasts; the oldest
    /// entries beyond the bound are evicted.
    pub max_visible: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            default_duration: Duration::from_millis(4000),
            kind_durations: HashMap::from([
                (ToastKind::Success, Duration::from_millis(3000)),
                (ToastKind::Info, Duration::from_millis(4000)),
                (ToastKind::Warning, Duration::from_millis(5000)),
                (ToastKind::Error, Duration::from_millis(6000)),
            ]),
            max_visible: 6,
        }
    }
}

impl DisplayConfig {
    /// Merge a partial configuration into this one.
    ///
    /// Scalars replace wholesale; `kind_durations` merges key-wise so
    /// a patch can adjust one kind without clearing the rest.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(anchor) = patch.anchor {
            self.anchor = anchor;
        }
        if let Some(default_duration) = patch.default_duration {
            self.default_duration = default_duration;
        }
        if let Some(kind_durations) = patch.kind_durations {
            self.kind_durations.extend(kind_durations);
        }
        if let Some(max_visible) = patch.max_visible {
            self.max_visible = max_visible;
        }
    }
}

/// Resolve the effective auto-dismiss delay for a toast.
///
/// Precedence: explicit per-call value, then the kind's configured
/// default, then the global default.
pub fn resolve_duration(
    kind: ToastKind,
    explicit: Option<Duration>,
    config: &DisplayConfig,
) -> Duration {
    explicit.unwrap_or_else(|| {
        config
            .kind_durations
            .get(&kind)
            .copied()
            .unwrap_or(config.default_duration)
    })
}

/// Partial configuration accepted by `ToastDirectory::configure`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PatchWire", into = "PatchWire")]
pub struct ConfigPatch {
    /// New anchor, if any.
    pub anchor: Option<Anchor>,
    /// New global default duration, if any.
    pub default_duration: Option<Duration>,
    /// Per-kind durations to merge in, if any.
    pub kind_durations: Option<HashMap<ToastKind, Duration>>,
    /// New visibility bound, if any.
    pub max_visible: Option<usize>,
}

impl ConfigPatch {
    /// Patch setting only the anchor.
    pub fn anchor(anchor: Anchor) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::default()
        }
    }

    /// Patch setting only the visibility bound.
    pub fn max_visible(max_visible: usize) -> Self {
        Self {
            max_visible: Some(max_visible),
            ..Self::default()
        }
    }

    /// Patch setting the duration for a single kind.
    pub fn kind_duration(kind: ToastKind, duration: Duration) -> Self {
        Self {
            kind_durations: Some(HashMap::from([(kind, duration)])),
            ..Self::default()
        }
    }
}

// Wire shapes: durations as integer milliseconds, field names matching
// the original host configuration payloads.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigWire {
    position: Anchor,
    default_duration_ms: i64,
    type_durations: HashMap<ToastKind, i64>,
    max_toasts: usize,
}

impl From<ConfigWire> for DisplayConfig {
    fn from(wire: ConfigWire) -> Self {
        Self {
            anchor: wire.position,
            default_duration: duration_from_millis(wire.default_duration_ms),
            kind_durations: wire
                .type_durations
                .into_iter()
                .map(|(kind, ms)| (kind, duration_from_millis(ms)))
                .collect(),
            max_visible: wire.max_toasts,
        }
    }
}

impl From<DisplayConfig> for ConfigWire {
    fn from(config: DisplayConfig) -> Self {
        Self {
            position: config.anchor,
            default_duration_ms: config.default_duration.as_millis() as i64,
            type_durations: config
                .kind_durations
                .into_iter()
                .map(|(kind, duration)| (kind, duration.as_millis() as i64))
                .collect(),
            max_toasts: config.max_visible,
        }
    }
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PatchWire {
    position: Option<Anchor>,
    default_duration_ms: Option<i64>,
    type_durations: Option<HashMap<ToastKind, i64>>,
    max_toasts: Option<usize>,
}

impl From<PatchWire> for ConfigPatch {
    fn from(wire: PatchWire) -> Self {
        Self {
            anchor: wire.position,
            default_duration: wire.default_duration_ms.map(duration_from_millis),
            kind_durations: wire.type_durations.map(|map| {
                map.into_iter()
                    .map(|(kind, ms)| (kind, duration_from_millis(ms)))
                    .collect()
            }),
            max_visible: wire.max_toasts,
        }
    }
}

impl From<ConfigPatch> for PatchWire {
    fn from(patch: ConfigPatch) -> Self {
        Self {
            position: patch.anchor,
            default_duration_ms: patch.default_duration.map(|d| d.as_millis() as i64),
            type_durations: patch.kind_durations.map(|map| {
                map.into_iter()
                    .map(|(kind, duration)| (kind, duration.as_millis() as i64))
                    .collect()
            }),
            max_toasts: patch.max_visible,
        }
    }
}
