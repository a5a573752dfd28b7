//! Keyspace Explorer - A paginated browser over the secp256k1 key space
//!
//! Derives addresses for sequential private key exponents and reports their
//! balances through a time-bounded cache.

pub mod api;
pub mod balance;
pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod page;

pub use api::AppState;
pub use config::Config;
pub use page::PageAssembler;
