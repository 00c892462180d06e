//! # Core Module
//!
//! The foundation of the library: the molecular data the search reads, the geometric
//! primitives it is built on, and the I/O helpers used to move data in and out.
//!
//! - **Molecular Representation** ([`models`]) - The structure input contract, coordinate
//!   views and interaction records
//! - **Geometry** ([`utils`]) - Bounding boxes and distance helpers
//! - **File I/O** ([`io`]) - Reading decoded structures from JSON and writing records as CSV

pub mod io;
pub mod models;
pub mod utils;
