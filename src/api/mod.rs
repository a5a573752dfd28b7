//! API Module
//!
//! HTTP handlers and routing for the explorer REST API.
//!
//! # Endpoints
//! - `GET /key/:exponent` - Derive one key and report its balance
//! - `GET /page/:page` - One page of keys with balances
//! - `GET /gen_pair` - Random key pair
//! - `GET /stats` - Balance cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
