#![forbid(unsafe_code)]

//! Core data model for the toastline notification subsystem.
//!
//! This crate holds the pure, I/O-free types shared by the directory
//! service and the renderer host: toast kinds, requests, ids, display
//! configuration, and screen anchor math. Everything time- or
//! channel-related lives in the `toastline` crate.

pub mod anchor;
pub mod config;
pub mod kind;
pub mod request;

pub use anchor::Anchor;
pub use config::{ConfigPatch, DisplayConfig, duration_from_millis, resolve_duration};
pub use kind::ToastKind;
pub use request::{ShowOptions, ToastId, ToastRequest};
