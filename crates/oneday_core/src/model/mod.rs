//! Widget domain model shared by builder, renderer and host adapters.
//!
//! # Responsibility
//! - Define the persisted snapshot shape consumed by widgets.
//! - Define typed task rows and the per-variant view models.
//!
//! # Invariants
//! - Models are immutable values; a render pass never mutates its input.
//! - Task order is always the order of the persisted payload.

pub mod snapshot;
pub mod task;
pub mod view;
