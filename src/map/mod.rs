//! This module contains the concurrent hash map implementation.

mod chain;
mod striped_map;

pub use striped_map::StripedMap;
