//! A key-sharded map with one lock per shard.
//!
//! Keys are integers and the owning shard is `key mod shard_count`. Each
//! access locks only that shard, so threads updating keys in different shards
//! never wait on each other. Parallel relevance accumulation relies on this:
//! every posting-list scan adds into the running total of one document at a
//! time.
//!
//! # Examples
//!
//! ```
//! use lectern::concurrent::ShardedMap;
//!
//! let relevance: ShardedMap<i32, f64> = ShardedMap::new(4);
//! *relevance.access(7) += 0.5;
//! *relevance.access(7) += 0.25;
//! *relevance.access(2) += 1.0;
//!
//! assert_eq!(relevance.len(), 2);
//! let ordered = relevance.into_ordinary_map();
//! assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![(2, 1.0), (7, 0.75)]);
//! ```

use std::collections::BTreeMap;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

/// Integral key types that can select a shard.
pub trait ShardKey: Copy + Ord + Send {
    /// Index of the shard owning this key.
    fn shard_index(self, shard_count: usize) -> usize;
}

macro_rules! impl_shard_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShardKey for $ty {
                #[inline]
                fn shard_index(self, shard_count: usize) -> usize {
                    // Negative keys wrap consistently, which is all shard selection needs.
                    (self as u64 % shard_count as u64) as usize
                }
            }
        )*
    };
}

impl_shard_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Mutable access to one value; the shard stays locked until this is dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Associative container partitioned into independently locked shards.
#[derive(Debug)]
pub struct ShardedMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K: ShardKey, V> ShardedMap<K, V> {
    /// Create a map with `shard_count` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "ShardedMap needs at least one shard");
        let shards = (0..shard_count)
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        ShardedMap { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Lock the shard owning `key` and return its value, inserting the default
    /// if the key is new.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let shard = self.shards[key.shard_index(self.shards.len())].lock();
        MutexGuard::map(shard, |map| map.entry(key).or_default())
    }

    /// Total number of entries.
    ///
    /// Each shard is counted under its own lock; under concurrent inserts the
    /// sum is not a snapshot of a single instant.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Move every entry into one ordered map, draining the shards one by one.
    pub fn drain_into_ordinary_map(&self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let mut entries = shard.lock();
            result.append(&mut entries);
        }
        result
    }

    /// Consume the map and return its entries as one ordered map.
    pub fn into_ordinary_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in self.shards {
            let mut entries = shard.into_inner();
            result.append(&mut entries);
        }
        result
    }
}
