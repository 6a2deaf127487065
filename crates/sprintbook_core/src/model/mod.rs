//! Domain model for sprint/backlog planning data.
//!
//! # Responsibility
//! - Define the canonical records for backlog items and sprint tasks.
//! - Keep the backlog/task join key typed and validated.
//!
//! # Invariants
//! - Backlog items are always addressed by a non-empty [`key::ItemKey`].
//! - Hour fields are plain `f64` values; consistency between them is checked
//!   by the validator, never enforced at construction.
//!
//! # See also
//! - crate::validate

pub mod backlog;
pub(crate) mod hours;
pub mod key;
pub mod sprint;
