//! Artwork catalog API client and types.
//!
//! This module provides the interface for communicating with the Art
//! Institute of Chicago public API.

mod client;
pub mod error;
pub mod types;

pub use client::ArticClient;
pub use error::ApiError;
