//! # Engine Module
//!
//! The search pipeline and everything it needs to run: validated configuration, error
//! types, and progress reporting.
//!
//! ## Pipeline
//!
//! For each structure the hierarchy is flattened once ([`indexer`]). Then, for every
//! occurrence of the target group:
//!
//! 1. a cutoff-padded bounding box is computed around the target's atoms
//!    ([`crate::core::utils::geometry`]),
//! 2. groups with an atom inside the box become candidates ([`filter`]),
//! 3. each candidate's exact minimum distance to the target is checked against the cutoff
//!    ([`refine`]),
//! 4. accepted pairs are labelled and emitted as records ([`assemble`]).
//!
//! ## Supporting Modules
//!
//! - **Configuration** ([`config`]) - Target group, cutoff and candidate strategy
//! - **Progress Monitoring** ([`progress`]) - Progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error type

pub mod assemble;
pub mod config;
pub(crate) mod context;
pub mod error;
pub mod filter;
pub mod indexer;
pub mod progress;
pub mod refine;
