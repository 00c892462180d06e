//! # Workflows Module
//!
//! The public entry points of the library.
//!
//! - **Single structure** ([`interactions`]) - Find every residue near each occurrence of
//!   a target residue type in one structure.
//! - **Many structures** ([`batch`]) - The same search over a slice of structures, run in
//!   parallel when the `parallel` feature is enabled.

pub mod batch;
pub mod interactions;
