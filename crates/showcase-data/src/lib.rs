//! Data access for the page shell.
//!
//! This crate provides:
//! - `FetchClient` - Outbound JSON fetch through the Spin host
//! - `ListingSource` - Where the page gets its product listing from
//! - `load_listing` - Fetch with fallback to an in-process provider

mod client;
mod source;

pub use client::*;
pub use source::*;
