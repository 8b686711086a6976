//! A fixed-capacity, thread-safe hash map for integer keys and values.
//!
//! This crate exports a [`StripedMap`] that shards its entries across a
//! fixed number of buckets, each guarded by its own mutex. Operations on
//! different buckets proceed fully in parallel; operations on the same
//! bucket are serialized by that bucket's lock. No operation ever holds
//! more than one lock at a time, so the map cannot deadlock against itself.
//!
//! The bucket count is fixed at construction and the map never rehashes.
//! Chains grow without bound as the load factor rises; use
//! [`StripedMap::load_factor`] to pick a capacity that fits the workload.
//!
//! ```
//! use tsmap::StripedMap;
//!
//! let map = StripedMap::with_capacity(16)?;
//! assert_eq!(map.put(1, 100), None);
//! assert_eq!(map.get(1), Some(100));
//! assert_eq!(map.remove(1), Some(100));
//! # Ok::<_, tsmap::Error>(())
//! ```

mod error;
pub mod map;

pub use error::{Error, Result};
pub use map::StripedMap;
