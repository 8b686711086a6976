use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crossbeam::utils::CachePadded;

use super::chain::Chain;
use crate::error::{Error, Result};

/// A fixed-capacity concurrent hash map with one lock per bucket.
///
/// Every key hashes to the bucket at index `(key as u64) % capacity`, so
/// negative keys wrap through the unsigned cast and always land in
/// `[0, capacity)`. Each bucket owns its chain and the mutex guarding it;
/// both live exactly as long as the map.
///
/// Operations lock a single bucket for their whole critical section and
/// never touch a second one. The entry count is kept in an atomic counter
/// independent of the bucket locks, so concurrent inserts into different
/// buckets cannot lose updates.
pub struct StripedMap {
    buckets: Box<[CachePadded<Mutex<Chain>>]>,
    size: CachePadded<AtomicUsize>,
}

impl StripedMap {
    /// Creates a map with the given number of buckets.
    ///
    /// The bucket count is fixed for the lifetime of the map; there is no
    /// rehashing. Fails with [`Error::InvalidCapacity`] if `capacity` is
    /// zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        log::debug!("creating striped map with {capacity} buckets");

        Ok(Self {
            buckets: (0..capacity)
                .map(|_| CachePadded::new(Mutex::new(Chain::default())))
                .collect(),
            size: CachePadded::new(AtomicUsize::new(0)),
        })
    }

    fn bucket_index(&self, key: i64) -> usize {
        ((key as u64) % (self.buckets.len() as u64)) as usize
    }

    fn lock_bucket(&self, index: usize) -> MutexGuard<'_, Chain> {
        self.buckets[index].lock().unwrap()
    }

    /// Returns the value associated with `key`, if any.
    pub fn get(&self, key: i64) -> Option<i64> {
        self.lock_bucket(self.bucket_index(key)).get(key)
    }

    /// Checks whether the map contains a value mapped to the given key.
    pub fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Associates `value` with `key`.
    ///
    /// Returns the previously stored value, or `None` if the key was new.
    pub fn put(&self, key: i64, value: i64) -> Option<i64> {
        let mut chain = self.lock_bucket(self.bucket_index(key));
        let previous = chain.insert(key, value);
        if previous.is_none() {
            self.size.fetch_add(1, Ordering::Relaxed);
        }
        previous
    }

    /// Removes the entry for `key`, returning its value, or `None` if the
    /// key was absent.
    pub fn remove(&self, key: i64) -> Option<i64> {
        let mut chain = self.lock_bucket(self.bucket_index(key));
        let removed = chain.remove(key);
        if removed.is_some() {
            self.size.fetch_sub(1, Ordering::Relaxed);
        }
        removed
    }

    /// Count of live entries across all buckets.
    ///
    /// Exact once all writers have finished; while mutations are in flight
    /// this is a best-effort snapshot.
    pub fn len(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The fixed number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of stored entries to bucket count.
    ///
    /// A congestion indicator, not a resize trigger; like [`Self::len`] it
    /// is approximate while writers are active.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

/// Formats every bucket's chain as `[index] -> (key,value) -> ...`.
///
/// Each bucket's lock is held while that bucket is visited, so dumping a
/// live map sees a consistent snapshot of each chain (though not of the
/// map as a whole).
impl fmt::Display for StripedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            let chain = bucket.lock().unwrap();
            write!(f, "[{index}]")?;
            for (key, value) in chain.iter() {
                write!(f, " -> ({key},{value})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
