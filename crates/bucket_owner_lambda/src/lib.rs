//! AWS-oriented adapters and handlers for the bucket owner widget endpoint.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! bounded tag-lookup fan-out, and structured logging) on top of the
//! AWS-free primitives in `bucket_owner_core`.
//! See `crates/bucket_owner_lambda/README.md` for ownership boundaries.

pub mod adapters;
pub mod handlers;
pub mod logging;
