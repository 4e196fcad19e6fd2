#![forbid(unsafe_code)]

//! The toast host: turns a declarative request list into live toasts.
//!
//! The host reconciles whatever list it is handed against its active
//! entries. Existing toasts update in place, new ones enter at the
//! head, and toasts missing from the list begin their exit. Each entry
//! walks entering → visible → leaving and is purged a fixed grace
//! period after its exit begins, so the caller can animate the exit.
//!
//! All time-dependent methods take an explicit `Instant`. The host
//! never reads the clock itself, which keeps every transition
//! reproducible under test.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use toastline_core::{DisplayConfig, ToastId, ToastKind, ToastRequest, resolve_duration};

use crate::animation::{self, Easing};
use crate::directory::{ConfigSubscription, ListSubscription, ToastDirectory};
use crate::layout::{self, PlacedToast, Rect};

/// Lifecycle phase of a hosted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in; promoted to visible when the entrance window ends.
    Entering,
    /// Fully shown, countdown running if the toast has one.
    Visible,
    /// Exit under way; purged once the grace period elapses.
    Leaving,
}

/// Why a toast was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Closed by the user or by code.
    Manual,
    /// The auto-dismiss countdown expired.
    Timeout,
}

/// Emitted exactly once per toast, when its dismissal begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDismissal {
    pub id: ToastId,
    pub reason: DismissReason,
    /// Snapshot of the toast at the moment it started leaving.
    pub toast: ToastRequest,
}

/// A toast currently managed by the host.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    pub duration: Duration,
    pub closable: bool,
    phase: Phase,
    entered_at: Instant,
    leaving_at: Option<Instant>,
    deadline: Option<Instant>,
}

impl ActiveToast {
    fn new(id: ToastId, item: &ToastRequest, duration: Duration, now: Instant) -> Self {
        Self {
            id,
            kind: item.kind,
            title: item.title.clone(),
            message: item.message.clone(),
            duration,
            closable: item.closable.unwrap_or(true),
            phase: Phase::Entering,
            entered_at: now,
            leaving_at: None,
            deadline: deadline_for(duration, now),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Explicit title, or the kind's display label.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.kind.label())
    }

    /// Render opacity at `now`: fading in while entering, fading out
    /// while leaving.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Entering => {
                Easing::EaseOut.apply(animation::progress(self.entered_at, now, animation::ENTRANCE))
            }
            Phase::Visible => 1.0,
            Phase::Leaving => {
                let start = self.leaving_at.unwrap_or(now);
                1.0 - Easing::EaseIn.apply(animation::progress(start, now, animation::EXIT_GRACE))
            }
        }
    }

    fn request(&self) -> ToastRequest {
        ToastRequest {
            id: Some(self.id.clone()),
            kind: self.kind,
            title: self.title.clone(),
            message: self.message.clone(),
            duration: Some(self.duration),
            closable: Some(self.closable),
        }
    }
}

/// Zero duration means no countdown at all.
fn deadline_for(duration: Duration, now: Instant) -> Option<Instant> {
    if duration.is_zero() {
        None
    } else {
        Some(now + duration)
    }
}

#[derive(Debug)]
struct ReflowMotion {
    from_y: u16,
    started: Instant,
}

/// Renderer-side half of the subsystem.
///
/// Drive it detached with [`ToastHost::sync`] plus [`ToastHost::tick`],
/// or attach it to a [`ToastDirectory`] and call [`ToastHost::pump`]
/// once per frame.
#[derive(Debug, Default)]
pub struct ToastHost {
    active: Vec<ActiveToast>,
    /// Ids whose dismissal has begun. Guards against a stale source
    /// list resurrecting a toast mid-exit; pruned once the source
    /// stops publishing the id.
    dismissed: HashSet<ToastId>,
    events: Vec<ToastDismissal>,
    /// Purged ids awaiting forwarding to the directory.
    acks: Vec<ToastId>,
    config: DisplayConfig,
    max_width: u16,
    margin: u16,
    /// Last laid-out row per toast, the starting point for reflow.
    rows: HashMap<ToastId, u16>,
    reflow: HashMap<ToastId, ReflowMotion>,
    list_sub: Option<ListSubscription>,
    config_sub: Option<ConfigSubscription>,
}

impl ToastHost {
    pub fn new() -> Self {
        Self {
            max_width: 42,
            margin: 1,
            ..Self::default()
        }
    }

    /// Cap on rendered toast width, including chrome.
    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    /// Gap between the stack and the viewport edge.
    pub fn with_margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Display configuration used for duration resolution and layout.
    /// Overwritten by the directory's config when attached.
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Subscribe to a directory's list and config streams. Subsequent
    /// [`ToastHost::pump`] calls drain them.
    pub fn attach(&mut self, directory: &mut ToastDirectory) {
        self.config_sub = Some(directory.subscribe_config());
        self.list_sub = Some(directory.subscribe());
    }

    /// One frame of subscribed-mode work: apply pending config and
    /// list snapshots, advance time, and forward purged ids back to
    /// the directory so its list stays in step.
    pub fn pump(&mut self, directory: &mut ToastDirectory, now: Instant) {
        if let Some(config) = self.config_sub.as_ref().and_then(ConfigSubscription::latest) {
            self.config = config;
        }
        let snapshot = self.list_sub.as_ref().and_then(ListSubscription::latest);
        if let Some(items) = snapshot {
            self.sync(&items, now);
        }
        self.tick(now);
        for id in std::mem::take(&mut self.acks) {
            directory.dismiss(&id);
        }
    }

    /// Reconcile the host against a declarative toast list (newest
    /// first).
    ///
    /// Entries already hosted update in place; their countdown
    /// restarts only when the resolved duration actually changed.
    /// Entries not yet hosted enter at the head. Hosted entries absent
    /// from the list begin a manual dismissal with the event
    /// suppressed, since the source already knows.
    pub fn sync(&mut self, items: &[ToastRequest], now: Instant) {
        let resolved: Vec<(ToastId, &ToastRequest)> = items
            .iter()
            .map(|item| (Self::resolve_id(item), item))
            .collect();
        let incoming: HashSet<&ToastId> = resolved.iter().map(|(id, _)| id).collect();

        // Guards outlive the entry they protect only while the source
        // keeps publishing the id.
        let active = &self.active;
        self.dismissed
            .retain(|id| incoming.contains(id) || active.iter().any(|t| &t.id == id));

        let absent: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| t.phase != Phase::Leaving && !incoming.contains(&t.id))
            .map(|t| t.id.clone())
            .collect();
        for id in absent {
            self.begin_dismiss(&id, DismissReason::Manual, false, now);
        }

        // Reverse order so head-inserted newcomers end up in list
        // order.
        for (id, item) in resolved.iter().rev() {
            if self.dismissed.contains(id) {
                continue;
            }
            let duration = resolve_duration(item.kind, item.duration, &self.config);
            if let Some(existing) = self.active.iter_mut().find(|t| &t.id == id) {
                if existing.phase == Phase::Leaving {
                    continue;
                }
                existing.kind = item.kind;
                existing.title = item.title.clone();
                existing.message = item.message.clone();
                existing.closable = item.closable.unwrap_or(true);
                if existing.duration != duration {
                    existing.duration = duration;
                    existing.deadline = deadline_for(duration, now);
                }
            } else {
                tracing::debug!(id = %id, kind = ?item.kind, "toast entering");
                self.active
                    .insert(0, ActiveToast::new(id.clone(), item, duration, now));
            }
        }
    }

    /// Advance lifecycle state to `now`: finish entrances, fire
    /// expired countdowns, purge toasts whose exit grace has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.active {
            if toast.phase == Phase::Entering
                && now.saturating_duration_since(toast.entered_at) >= animation::ENTRANCE
            {
                toast.phase = Phase::Visible;
            }
        }

        let expired: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| t.phase != Phase::Leaving && t.deadline.is_some_and(|d| now >= d))
            .map(|t| t.id.clone())
            .collect();
        for id in expired {
            self.begin_dismiss(&id, DismissReason::Timeout, true, now);
        }

        let purged: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| {
                t.phase == Phase::Leaving
                    && t.leaving_at.is_some_and(|at| {
                        now.saturating_duration_since(at) >= animation::EXIT_GRACE
                    })
            })
            .map(|t| t.id.clone())
            .collect();
        if purged.is_empty() {
            return;
        }

        self.active.retain(|t| !purged.contains(&t.id));
        // Survivors slide into the freed rows from wherever they were
        // last drawn.
        for toast in &self.active {
            if let Some(&row) = self.rows.get(&toast.id) {
                self.reflow
                    .entry(toast.id.clone())
                    .or_insert(ReflowMotion {
                        from_y: row,
                        started: now,
                    });
            }
        }
        for id in purged {
            tracing::trace!(id = %id, "toast purged");
            self.rows.remove(&id);
            self.acks.push(id);
        }
    }

    /// Manually dismiss a toast. Emits a [`ToastDismissal`] with
    /// reason [`DismissReason::Manual`]. No-op for unknown or already
    /// leaving ids.
    pub fn close(&mut self, id: &ToastId, now: Instant) {
        self.begin_dismiss(id, DismissReason::Manual, true, now);
    }

    fn begin_dismiss(&mut self, id: &ToastId, reason: DismissReason, emit: bool, now: Instant) {
        let Some(index) = self.active.iter().position(|t| &t.id == id) else {
            return;
        };
        if self.active[index].phase == Phase::Leaving {
            return;
        }
        {
            let toast = &mut self.active[index];
            toast.phase = Phase::Leaving;
            toast.leaving_at = Some(now);
            toast.deadline = None;
        }
        self.dismissed.insert(id.clone());
        tracing::debug!(id = %id, ?reason, emit, "toast leaving");
        if emit {
            self.events.push(ToastDismissal {
                id: id.clone(),
                reason,
                toast: self.active[index].request(),
            });
        }
    }

    /// Dismissal events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ToastDismissal> {
        std::mem::take(&mut self.events)
    }

    /// Ids purged since the last drain. In subscribed mode
    /// [`ToastHost::pump`] forwards these to the directory instead.
    pub fn drain_acknowledgements(&mut self) -> Vec<ToastId> {
        std::mem::take(&mut self.acks)
    }

    /// Toasts currently on screen, newest first. Includes leaving
    /// toasts until they are purged.
    pub fn visible(&self) -> impl Iterator<Item = &ActiveToast> {
        self.active.iter()
    }

    pub fn get(&self, id: &ToastId) -> Option<&ActiveToast> {
        self.active.iter().find(|t| &t.id == id)
    }

    /// Place the stack inside a viewport. Rows mid-reflow interpolate
    /// from their previous position.
    pub fn layout(&mut self, viewport_w: u16, viewport_h: u16, now: Instant) -> Vec<PlacedToast<'_>> {
        let anchor = self.config.anchor;
        let mut offset = 0u16;
        let mut rows = HashMap::with_capacity(self.active.len());
        let mut finished = Vec::new();
        let mut rects = Vec::with_capacity(self.active.len());

        for toast in &self.active {
            let (width, height) = layout::measure(toast, self.max_width);
            let (x, base_y) = anchor.origin(viewport_w, viewport_h, width, height, self.margin);
            let target_y = if anchor.is_bottom() {
                base_y.saturating_sub(offset)
            } else {
                base_y.saturating_add(offset)
            };
            let y = match self.reflow.get(&toast.id) {
                Some(motion) => {
                    let t = Easing::EaseOut
                        .apply(animation::progress(motion.started, now, animation::REFLOW));
                    if t >= 1.0 {
                        finished.push(toast.id.clone());
                        target_y
                    } else {
                        layout::lerp_row(motion.from_y, target_y, t)
                    }
                }
                None => target_y,
            };
            rows.insert(toast.id.clone(), y);
            rects.push(Rect::new(x, y, width, height));
            offset = offset.saturating_add(height + 1);
        }

        for id in finished {
            self.reflow.remove(&id);
        }
        self.rows = rows;

        self.active
            .iter()
            .zip(rects)
            .map(|(toast, rect)| PlacedToast {
                rect,
                opacity: toast.opacity(now),
                toast,
            })
            .collect()
    }

    /// Stable id for a request: the explicit id, or a fingerprint of
    /// the content so repeated syncs of the same anonymous toast match
    /// up.
    fn resolve_id(item: &ToastRequest) -> ToastId {
        item.id
            .clone()
            .unwrap_or_else(|| ToastId::new(format!("toast-fp-{:016x}", item.fingerprint())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toastline_core::ShowOptions;

    fn start() -> Instant {
        Instant::now()
    }

    fn request(id: &str, message: &str, duration: Duration) -> ToastRequest {
        ToastRequest::new(ToastKind::Info, message)
            .id(id)
            .duration(duration)
    }

    #[test]
    fn sync_hosts_new_toasts_entering() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "hello", Duration::from_secs(4))], t0);
        let toast = host.get(&ToastId::from("a")).expect("hosted");
        assert_eq!(toast.phase(), Phase::Entering);
        assert_eq!(toast.message, "hello");
    }

    #[test]
    fn entrance_promotes_to_visible() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::from_secs(4))], t0);
        host.tick(t0 + animation::ENTRANCE);
        assert_eq!(host.get(&ToastId::from("a")).unwrap().phase(), Phase::Visible);
    }

    #[test]
    fn order_matches_incoming_list() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("b", "newer", Duration::ZERO)], t0);
        host.sync(
            &[
                request("c", "newest", Duration::ZERO),
                request("b", "newer", Duration::ZERO),
            ],
            t0 + Duration::from_millis(10),
        );
        let ids: Vec<&str> = host.visible().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn timeout_emits_event_then_ack_at_purge() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::from_secs(1))], t0);

        host.tick(t0 + Duration::from_millis(999));
        assert!(host.drain_events().is_empty());

        let t1 = t0 + Duration::from_secs(1);
        host.tick(t1);
        let events = host.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, DismissReason::Timeout);
        assert_eq!(events[0].id.as_str(), "a");
        assert_eq!(events[0].toast.message, "x");
        assert_eq!(host.get(&ToastId::from("a")).unwrap().phase(), Phase::Leaving);

        // Still on screen through the exit grace, then purged.
        host.tick(t1 + animation::EXIT_GRACE - Duration::from_millis(1));
        assert_eq!(host.visible().count(), 1);
        assert!(host.drain_acknowledgements().is_empty());

        host.tick(t1 + animation::EXIT_GRACE);
        assert_eq!(host.visible().count(), 0);
        assert_eq!(
            host.drain_acknowledgements(),
            vec![ToastId::from("a")]
        );
        // The event fired exactly once.
        assert!(host.drain_events().is_empty());
    }

    #[test]
    fn zero_duration_never_times_out() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("spinner", "Loading", Duration::ZERO)], t0);
        host.tick(t0 + Duration::from_secs(3600));
        assert_eq!(
            host.get(&ToastId::from("spinner")).unwrap().phase(),
            Phase::Visible
        );
        assert!(host.drain_events().is_empty());
    }

    #[test]
    fn unchanged_duration_does_not_restart_countdown() {
        let mut host = ToastHost::new();
        let t0 = start();
        let items = [request("a", "x", Duration::from_secs(1))];
        host.sync(&items, t0);
        host.sync(&items, t0 + Duration::from_millis(500));

        // Deadline stayed anchored to the first sync.
        host.tick(t0 + Duration::from_secs(1));
        assert_eq!(host.drain_events().len(), 1);
    }

    #[test]
    fn changed_duration_restarts_countdown() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::from_secs(1))], t0);
        let t1 = t0 + Duration::from_millis(500);
        host.sync(&[request("a", "x", Duration::from_secs(2))], t1);

        host.tick(t0 + Duration::from_secs(1));
        assert!(host.drain_events().is_empty());

        host.tick(t1 + Duration::from_secs(2));
        assert_eq!(host.drain_events().len(), 1);
    }

    #[test]
    fn update_in_place_keeps_phase_and_slot() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "old", Duration::ZERO)], t0);
        host.tick(t0 + animation::ENTRANCE);
        host.sync(
            &[request("a", "new", Duration::ZERO)],
            t0 + animation::ENTRANCE,
        );

        assert_eq!(host.visible().count(), 1);
        let toast = host.get(&ToastId::from("a")).unwrap();
        assert_eq!(toast.message, "new");
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn absent_from_list_leaves_without_event() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::ZERO)], t0);
        host.sync(&[], t0 + Duration::from_millis(10));

        assert_eq!(host.get(&ToastId::from("a")).unwrap().phase(), Phase::Leaving);
        assert!(host.drain_events().is_empty());

        host.tick(t0 + Duration::from_millis(10) + animation::EXIT_GRACE);
        assert_eq!(host.drain_acknowledgements(), vec![ToastId::from("a")]);
    }

    #[test]
    fn close_emits_manual_event() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::ZERO)], t0);
        host.close(&ToastId::from("a"), t0 + Duration::from_millis(50));

        let events = host.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, DismissReason::Manual);
    }

    #[test]
    fn close_is_idempotent() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::ZERO)], t0);
        host.close(&ToastId::from("a"), t0);
        host.close(&ToastId::from("a"), t0 + Duration::from_millis(100));
        assert_eq!(host.drain_events().len(), 1);
    }

    #[test]
    fn stale_list_does_not_resurrect_leaving_toast() {
        let mut host = ToastHost::new();
        let t0 = start();
        let items = [request("a", "x", Duration::ZERO)];
        host.sync(&items, t0);
        host.close(&ToastId::from("a"), t0);

        // The source has not caught up and still publishes the toast.
        host.sync(&items, t0 + Duration::from_millis(50));
        assert_eq!(host.get(&ToastId::from("a")).unwrap().phase(), Phase::Leaving);

        host.tick(t0 + animation::EXIT_GRACE);
        assert_eq!(host.visible().count(), 0);

        // Still published, still guarded.
        host.sync(&items, t0 + animation::EXIT_GRACE + Duration::from_millis(10));
        assert_eq!(host.visible().count(), 0);
    }

    #[test]
    fn guard_clears_once_source_drops_the_id() {
        let mut host = ToastHost::new();
        let t0 = start();
        let items = [request("a", "x", Duration::ZERO)];
        host.sync(&items, t0);
        host.close(&ToastId::from("a"), t0);
        host.tick(t0 + animation::EXIT_GRACE);

        let t1 = t0 + animation::EXIT_GRACE + Duration::from_millis(10);
        host.sync(&[], t1);
        // A later list may legitimately reuse the id.
        host.sync(&items, t1 + Duration::from_millis(10));
        assert_eq!(
            host.get(&ToastId::from("a")).unwrap().phase(),
            Phase::Entering
        );
    }

    #[test]
    fn anonymous_toasts_match_by_content() {
        let mut host = ToastHost::new();
        let t0 = start();
        let item = ToastRequest::new(ToastKind::Warning, "no id").duration(Duration::ZERO);
        host.sync(std::slice::from_ref(&item), t0);
        host.sync(std::slice::from_ref(&item), t0 + Duration::from_millis(100));
        assert_eq!(host.visible().count(), 1);
    }

    #[test]
    fn detached_sync_resolves_durations_from_config() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(
            &[ToastRequest::new(ToastKind::Error, "boom").id("a")],
            t0,
        );

        // Error resolves to its configured 6s default.
        host.tick(t0 + Duration::from_millis(5999));
        assert!(host.drain_events().is_empty());
        host.tick(t0 + Duration::from_secs(6));
        assert_eq!(host.drain_events().len(), 1);
    }

    #[test]
    fn pump_round_trips_with_directory() {
        let mut directory = ToastDirectory::new();
        let mut host = ToastHost::new();
        host.attach(&mut directory);

        let t0 = start();
        let id = directory.show_with(
            ToastKind::Success,
            "saved",
            ShowOptions::duration(Duration::from_secs(1)),
        );
        host.pump(&mut directory, t0);
        assert_eq!(host.visible().count(), 1);

        // Timeout fires, then the purge is forwarded to the directory.
        host.pump(&mut directory, t0 + Duration::from_secs(1));
        assert_eq!(host.drain_events().len(), 1);
        assert_eq!(directory.toasts().len(), 1);

        host.pump(&mut directory, t0 + Duration::from_secs(1) + animation::EXIT_GRACE);
        assert_eq!(host.visible().count(), 0);
        assert!(directory.toasts().is_empty());
        assert!(directory.toasts().iter().all(|t| t.id.as_ref() != Some(&id)));
    }

    #[test]
    fn pump_follows_config_changes() {
        let mut directory = ToastDirectory::new();
        let mut host = ToastHost::new();
        host.attach(&mut directory);

        directory.configure(toastline_core::ConfigPatch::anchor(
            toastline_core::Anchor::BottomLeft,
        ));
        host.pump(&mut directory, start());
        assert_eq!(host.config().anchor, toastline_core::Anchor::BottomLeft);
    }

    #[test]
    fn display_title_falls_back_to_kind_label() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(
            &[
                ToastRequest::new(ToastKind::Neutral, "plain").id("a"),
                ToastRequest::new(ToastKind::Error, "titled")
                    .id("b")
                    .title("Upload failed"),
            ],
            t0,
        );
        assert_eq!(host.get(&ToastId::from("a")).unwrap().display_title(), "Notice");
        assert_eq!(
            host.get(&ToastId::from("b")).unwrap().display_title(),
            "Upload failed"
        );
    }

    #[test]
    fn opacity_tracks_lifecycle() {
        let mut host = ToastHost::new();
        let t0 = start();
        host.sync(&[request("a", "x", Duration::from_secs(1))], t0);

        let toast = host.get(&ToastId::from("a")).unwrap();
        assert_eq!(toast.opacity(t0), 0.0);
        assert_eq!(toast.opacity(t0 + animation::ENTRANCE), 1.0);

        host.close(&ToastId::from("a"), t0 + Duration::from_secs(1));
        let toast = host.get(&ToastId::from("a")).unwrap();
        let mid = toast.opacity(t0 + Duration::from_secs(1) + animation::EXIT_GRACE / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(
            toast.opacity(t0 + Duration::from_secs(1) + animation::EXIT_GRACE),
            0.0
        );
    }
}
