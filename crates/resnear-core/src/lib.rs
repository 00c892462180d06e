//! # resnear Core Library
//!
//! Finds the residues of a molecular structure that lie within a distance cutoff of every
//! occurrence of a target residue type, and reports the nearest atom-to-atom distance for
//! each interacting pair.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Read-only data models (the [`StructureSource`](core::models::structure::StructureSource)
//!   input contract, coordinate views, output records), geometric primitives, and I/O helpers.
//!
//! - **[`engine`]: The Logic Core.** Validated configuration, error types, progress reporting,
//!   and the search pipeline itself: group indexing, candidate filtering, distance refinement,
//!   and result assembly.
//!
//! - **[`workflows`]: The Public API.** Entry points that run the pipeline over one structure
//!   or over many structures at once.
//!
//! Every entry point is a pure function of its inputs: nothing is cached or shared between
//! calls, so independent structures can be processed concurrently without coordination.

pub mod core;
pub mod engine;
pub mod workflows;
