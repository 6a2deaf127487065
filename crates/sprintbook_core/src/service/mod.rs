//! Use-case services over the planning data.
//!
//! # Responsibility
//! - Provide stable entry points that tie loading, validation and formatting
//!   together for callers that work from dataset files.
//!
//! # Invariants
//! - Services never bypass the validator's purity: file access happens before
//!   validation, never inside it.

pub mod audit;
