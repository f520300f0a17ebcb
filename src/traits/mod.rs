//! Trait definitions for Battle.net resources.
//!
//! Each resource type implements the traits it supports, encapsulating
//! the path layout of its endpoint.

mod get;

pub use get::Get;
