//! Caching subsystem.
//!
//! - [`response::ResponseCache`]: LRU + TTL memo of showcase responses,
//!   owned by the client session and consulted before every network call.
//!   See [`response`] module docs for expiry and eviction rules.

pub mod response;

pub use response::{CacheConfig, ResponseCache};
