#![forbid(unsafe_code)]

//! The toast directory: process-wide notification store.
//!
//! One directory is constructed per application root and injected
//! where needed — never a hidden global. It owns the published toast
//! list (newest first) and the display configuration, and republishes
//! both in full on every mutation.
//!
//! Subscriptions have replay-latest semantics: a new subscriber
//! immediately receives the current value, then a fresh snapshot on
//! every change. Publication is a single send of a cloned snapshot, so
//! subscribers never observe a half-updated list.

use std::sync::mpsc;

use toastline_core::{
    ConfigPatch, DisplayConfig, ShowOptions, ToastId, ToastKind, ToastRequest, resolve_duration,
};

/// Receiving end of a toast-list subscription.
#[derive(Debug)]
pub struct ListSubscription {
    rx: mpsc::Receiver<Vec<ToastRequest>>,
}

impl ListSubscription {
    /// Drain pending snapshots and return the newest, if any arrived
    /// since the last call.
    pub fn latest(&self) -> Option<Vec<ToastRequest>> {
        let mut latest = None;
        while let Ok(snapshot) = self.rx.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }
}

/// Receiving end of a display-config subscription.
#[derive(Debug)]
pub struct ConfigSubscription {
    rx: mpsc::Receiver<DisplayConfig>,
}

impl ConfigSubscription {
    /// Drain pending snapshots and return the newest, if any.
    pub fn latest(&self) -> Option<DisplayConfig> {
        let mut latest = None;
        while let Ok(snapshot) = self.rx.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }
}

/// Process-wide source of truth for pending toasts and their display
/// configuration.
#[derive(Debug, Default)]
pub struct ToastDirectory {
    toasts: Vec<ToastRequest>,
    config: DisplayConfig,
    list_subscribers: Vec<mpsc::Sender<Vec<ToastRequest>>>,
    config_subscribers: Vec<mpsc::Sender<DisplayConfig>>,
    next_id: u64,
}

impl ToastDirectory {
    /// Create an empty directory with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory with the given configuration.
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current published list, newest first.
    pub fn toasts(&self) -> &[ToastRequest] {
        &self.toasts
    }

    /// Current display configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Merge a partial configuration and republish it.
    pub fn configure(&mut self, patch: ConfigPatch) {
        self.config.apply(patch);
        tracing::debug!(
            anchor = ?self.config.anchor,
            max_visible = self.config.max_visible,
            "directory reconfigured"
        );
        self.publish_config();
        // A smaller bound applies to already-published toasts too.
        if self.toasts.len() > self.config.max_visible {
            self.toasts.truncate(self.config.max_visible);
            self.publish_list();
        }
    }

    /// Enqueue a toast with default options. Returns its id.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.show_with(kind, message, ShowOptions::default())
    }

    /// Enqueue a toast. Returns the assigned id so the caller can
    /// dismiss it later.
    ///
    /// The effective duration resolves explicit option → per-kind
    /// default → global default. The new toast is prepended and the
    /// list truncated to `max_visible`, evicting the oldest entries.
    /// Re-using a live id replaces that toast rather than duplicating
    /// it.
    pub fn show_with(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        options: ShowOptions,
    ) -> ToastId {
        let duration = resolve_duration(kind, options.duration, &self.config);
        let id = options.id.unwrap_or_else(|| self.generate_id());

        let request = ToastRequest {
            id: Some(id.clone()),
            kind,
            title: None,
            message: message.into(),
            duration: Some(duration),
            closable: Some(options.closable.unwrap_or(true)),
        };

        self.toasts.retain(|toast| toast.id.as_ref() != Some(&id));
        self.toasts.insert(0, request);
        self.toasts.truncate(self.config.max_visible);

        tracing::debug!(id = %id, ?kind, ?duration, "toast shown");
        self.publish_list();
        id
    }

    /// Remove a toast by id and republish. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &ToastId) {
        self.toasts.retain(|toast| toast.id.as_ref() != Some(id));
        tracing::debug!(id = %id, "toast dismissed from directory");
        self.publish_list();
    }

    /// Republish an empty list.
    pub fn clear(&mut self) {
        self.toasts.clear();
        tracing::debug!("directory cleared");
        self.publish_list();
    }

    /// Subscribe to the toast list. The current list is delivered
    /// immediately; every mutation delivers a fresh snapshot.
    pub fn subscribe(&mut self) -> ListSubscription {
        let (tx, rx) = mpsc::channel();
        // Replay the latest value; a send into our own fresh channel
        // cannot fail.
        let _ = tx.send(self.toasts.clone());
        self.list_subscribers.push(tx);
        tracing::trace!(
            subscribers = self.list_subscribers.len(),
            "list subscriber added"
        );
        ListSubscription { rx }
    }

    /// Subscribe to the display configuration, replay-latest.
    pub fn subscribe_config(&mut self) -> ConfigSubscription {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.config.clone());
        self.config_subscribers.push(tx);
        tracing::trace!(
            subscribers = self.config_subscribers.len(),
            "config subscriber added"
        );
        ConfigSubscription { rx }
    }

    fn generate_id(&mut self) -> ToastId {
        self.next_id += 1;
        ToastId::new(format!("toast-{}", self.next_id))
    }

    fn publish_list(&mut self) {
        let snapshot = &self.toasts;
        self.list_subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    fn publish_config(&mut self) {
        let snapshot = &self.config;
        self.config_subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
