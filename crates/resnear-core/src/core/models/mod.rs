//! # Core Models Module
//!
//! Data structures describing the input structure and the output of a search.
//!
//! ## Key Components
//!
//! - [`structure`] - The [`StructureSource`](structure::StructureSource) trait and the owned
//!   [`Structure`](structure::Structure) implementation
//! - [`coords`] - A borrowed view over the parallel coordinate arrays
//! - [`record`] - The `Res1`/`Res2`/`Dist` output record
//!
//! ```ignore
//! use resnear::core::models::structure::Structure;
//!
//! let structure = Structure::builder()
//!     .group_type("ALA", 1)
//!     .chain(&[0])
//!     .coords(vec![0.0], vec![0.0], vec![0.0])
//!     .build();
//! ```

pub mod coords;
pub mod record;
pub mod structure;
