//! The skill-matching and aggregation engine.
//!
//! Everything here is synchronous, pure, and free of I/O apart from the
//! one-time vocabulary/catalog load. The vocabulary and role catalog are
//! constructed in `main` and injected through `AppState`; demand counting
//! and resume matching operate on plain text already materialized by their
//! callers, allocate fresh outputs, and are safe to call from concurrent
//! handlers.

pub mod demand;
pub mod guidance;
pub mod resume;
pub mod vocabulary;
