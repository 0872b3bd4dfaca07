//! tabdeck — a browser-tab-like workspace session layer for record dashboards.
//!
//! The crate owns the canonical in-memory model of open tabs (active tab,
//! groups, closed-tab history, split view, saved workspaces) and applies
//! state transitions for every user action. Around that core sit:
//!
//! - [`router`]: bidirectional synchronization between the active tab and the
//!   navigational address, without feedback loops.
//! - [`persistence`]: debounced durable snapshots and startup hydration.
//! - [`workspaces`]: named saved tab sets, restorable later.
//! - [`tab_strip`]: translation of gestures (clicks, drags, shortcuts,
//!   context menu) into state-machine actions.
//!
//! Rendering of the underlying record screens, authentication, and network
//! transport are external collaborators; the crate touches them only through
//! the [`router::Navigator`] and [`persistence::store::StateStore`] seams.

/// Crate version, for embedding in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod persistence;
pub mod router;
pub mod routes;
pub mod tab;
pub mod tab_strip;
pub mod workspaces;
