//! Platform abstraction layer
//!
//! Handles native/browser differences for:
//! - Wall-clock time (invincibility window, sprite flicker)
//! - Key-value storage (best scores, settings)

pub mod storage;
pub mod time;

pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use time::{Clock, ManualClock, SystemClock};
