//! Geometric helpers shared by the search engine.

pub mod geometry;
