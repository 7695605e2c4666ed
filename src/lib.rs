//! Randomized draw and group-allocation engine for lottery and team-split tools.
//!
//! Two independent, pure computational components form the core:
//!
//! - [`Allocator`] — partitions a member list into N groups with balanced
//!   sizes and a fair, independently-randomized spread of leftover members.
//! - [`DrawEngine`] — produces per-slot randomized picks from shared or
//!   per-slot pools under configurable replacement and repetition rules,
//!   carrying exhaustion state across rounds.
//!
//! ## Core Types
//!
//! - [`Group`] — one allocated team, produced fresh on every run
//! - [`Pool`] / [`Pools`] — ordered option lists, shared or per-slot
//! - [`Slot`] — one independent draw position (a "rotator" wheel)
//! - [`DrawConfig`] — replacement mode and duplicate policy for a session
//! - [`Outcome`] — a drawn value or the `"?"` exhaustion sentinel
//! - [`Capacity`] — how many further picks a session can sustain
//! - [`Project`] — the stored configuration exchanged with the UI layer
//!
//! ## Failure Semantics
//!
//! Malformed configurations are rejected up front with
//! [`InvalidConfiguration`]; every variant is caller-recoverable and
//! user-displayable. Pool exhaustion is never an error — it surfaces as
//! [`Outcome::Exhausted`], a first-class display state.
//!
//! Both components are synchronous and session-local: no I/O, no globals,
//! no cross-session sharing. Persistence, rendering, and authentication
//! are external collaborators.
mod allocator;
mod config;
mod engine;
mod error;
mod group;
mod pool;
mod project;
mod slot;

pub use allocator::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use group::*;
pub use pool::*;
pub use project::*;
pub use slot::*;

/// Identifier of a draw slot within one project.
pub type SlotId = usize;
