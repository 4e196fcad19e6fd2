#![forbid(unsafe_code)]

//! Toast notification subsystem: directory service + renderer host.
//!
//! Two collaborating halves:
//!
//! - [`ToastDirectory`] — process-wide source of truth for "which
//!   toasts should be visible" and "how they are displayed". Callers
//!   enqueue with [`ToastDirectory::show`]; every mutation republishes
//!   the full list to subscribers with replay-latest semantics.
//! - [`ToastHost`] — turns a declarative request list (pushed in
//!   detached mode, or pulled from a directory subscription) into live
//!   toasts, each progressing through entering → visible → leaving,
//!   with per-toast countdown deadlines and dismissal events.
//!
//! The subsystem is synchronous and tick-driven: all time-dependent
//! methods take an explicit `Instant`, so behavior is deterministic
//! under test.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use toastline::{ToastDirectory, ToastHost};
//! use toastline_core::ToastKind;
//!
//! let mut directory = ToastDirectory::new();
//! let mut host = ToastHost::new();
//! host.attach(&mut directory);
//!
//! directory.show(ToastKind::Success, "Your changes have been saved.");
//! host.pump(&mut directory, Instant::now());
//! assert_eq!(host.visible().count(), 1);
//! ```

pub mod animation;
pub mod directory;
pub mod host;
pub mod layout;

pub use directory::{ConfigSubscription, ListSubscription, ToastDirectory};
pub use host::{ActiveToast, DismissReason, Phase, ToastDismissal, ToastHost};
pub use layout::{PlacedToast, Rect};
