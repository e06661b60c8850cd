//! Library for `cgpacalc`
//!
//! Computes semester (SGPA) and cumulative (CGPA) grade point averages over an
//! editable curriculum. Presentation layers talk to [`core::gradebook::Gradebook`].

pub mod config;
pub mod core;

pub use crate::core::get_version;
pub use crate::core::gradebook::Gradebook;
