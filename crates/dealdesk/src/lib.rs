//! Core library for the dealdesk loan trading operations backend.
//!
//! The `desk` module carries the priority triage engine, the domain
//! configurations that rank trades, trade detail reviews, and settlements,
//! and the service/router layer that exposes the desk inboxes. The
//! remaining modules supply configuration, telemetry, and error plumbing
//! shared by every binary built on top of this crate.

pub mod config;
pub mod desk;
pub mod error;
pub mod telemetry;
