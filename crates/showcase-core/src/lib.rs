//! Core abstractions for the product card showcase.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `RequestContext` - Typed request parameters and headers
//! - `LifecyclePhase` / `TimingContext` - Request lifecycle tracking
//! - `WorkloadManifest` / `WorkloadError` - Component routes and failures
//! - `ShowcaseConfig` - TOML configuration
//! - `ListingEndpoint` - Absolute address of the listing endpoint

mod config;
mod context;
mod endpoint;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use endpoint::*;
pub use lifecycle::*;
pub use workload::*;
