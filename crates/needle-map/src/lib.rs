//! In-memory needle map for an append-only volume.
//!
//! The map answers one question on every read and write to a volume: where
//! does the latest record for this needle live, and how big is it? It keeps a
//! single small fixed-size value per needle id so that hundreds of millions
//! of entries fit in memory.
//!
//! # Key Types
//!
//! - [`CompactMap`] -- the `HashMap`-backed index behind one `RwLock`
//! - [`NeedleIndex`] -- the operation surface loaders and compactors call
//! - [`NeedleValue`] -- `(key, offset, size)` materialized for callers
//! - [`CompactOffset`] / [`CompactNeedleValue`] -- the stored per-key form
//! - [`CompactMapConfig`] / [`VisitMode`] -- sizing and traversal locking
//! - [`MapStats`] -- live/tombstone accounting for compaction decisions
//!
//! # Rules
//!
//! 1. A key has at most one value. `set` overwrites unconditionally.
//! 2. `delete` negates the stored size; the slot is never removed.
//! 3. Reads take the lock shared, mutations take it exclusive.
//! 4. Ascending traversal visits keys in strictly increasing numeric order.
//! 5. Nothing in this crate touches the filesystem.

pub mod compact;
pub mod config;
pub mod error;
pub mod map;
pub mod replay;
pub mod stats;
pub mod traits;
pub mod value;

pub use compact::{CompactNeedleValue, CompactOffset};
pub use config::{CompactMapConfig, VisitMode};
pub use error::{MapError, MapResult};
pub use map::CompactMap;
pub use replay::{replay, ReplayStats};
pub use stats::MapStats;
pub use traits::NeedleIndex;
pub use value::NeedleValue;
