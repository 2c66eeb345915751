//! Concurrency primitives used by the parallel execution paths.

pub mod sharded_map;

pub use sharded_map::{Access, ShardKey, ShardedMap};
