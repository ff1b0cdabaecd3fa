//! Persistent history output
//!
//! This module contains everything that mutates durable state: the
//! [`HistoryWriter`] collaborator interface over the external `git` binary and
//! the append-only [`ContributionLog`] text file. The rest of the crate only
//! decides *what* to write; this module is the sole writer.

pub mod log;
pub mod writer;

// Re-export all public types for convenience
pub use log::*;
pub use writer::*;
