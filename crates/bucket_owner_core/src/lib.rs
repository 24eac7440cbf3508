//! Shared bucket-owner aggregation primitives.
//!
//! This crate owns the response contract, owner resolution, and configuration
//! parsing. It intentionally excludes AWS SDK and Lambda runtime concerns.
//! See `crates/bucket_owner_core/README.md` for ownership boundaries.

pub mod config;
pub mod contract;
pub mod owner;
pub mod response;
