//! Game implementations.

pub mod levels;
