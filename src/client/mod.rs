//! Dashboard-facing data layer: a typed API client and a freeze-mode
//! cache for holding a stable snapshot while exploring the data.

pub mod api;
pub mod freeze;

pub use api::{ApiClientError, HubClient};
pub use freeze::{FileStore, FreezeCache, KvStore, MemoryStore};
