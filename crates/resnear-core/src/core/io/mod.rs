//! Input and output helpers.
//!
//! Structures arrive already decoded, as flat arrays serialized to JSON ([`json`]); results
//! leave as CSV tables with a `Res1,Res2,Dist` header ([`records`]).

pub mod json;
pub mod records;
pub mod traits;
