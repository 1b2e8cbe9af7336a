//! HTTP routes
//!
//! - `health` - liveness probe and fallback route
//! - `demo` - endpoints raising each failure category

pub mod demo;
pub mod health;
