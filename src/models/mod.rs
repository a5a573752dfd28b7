//! Response models for the explorer API
//!
//! This module defines the DTOs (Data Transfer Objects) serialized into
//! HTTP response bodies. Error bodies are produced by `ApiError`.

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, KeyResponse, PageResponse, PairResponse, StatsResponse};
