//! Input adapters for the explorer.
//!
//! Adapters translate events from a windowing source into the per-frame
//! input snapshots the interaction controller polls.

#[cfg(feature = "gui")]
pub mod gui;
