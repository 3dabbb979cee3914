//! CLI command implementations
//!
//! Each module contains the argument definitions and execution logic
//! for one group of operations.

pub mod generate;
pub mod recover;
pub mod seed;
