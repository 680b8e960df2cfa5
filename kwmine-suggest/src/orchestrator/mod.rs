//! Mining orchestrator: task planning, bounded fan-out, dedup.
//!
//! This module expands seeds into tasks, drives them through a fixed-size
//! worker pool, and funnels every successful fetch into a single
//! deduplicating result set.

pub mod aggregate;
pub mod pool;
pub mod run;
