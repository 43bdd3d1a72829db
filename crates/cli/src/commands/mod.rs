//! Command implementations.

pub mod category;
pub mod link;
pub mod seed;
