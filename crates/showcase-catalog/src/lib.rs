//! Catalog types for the product card showcase.
//!
//! - **Records**: `ProductRecord` as served by the listing endpoint
//! - **Money**: price formatting with a pluggable `CurrencyFormatter`
//! - **Listing**: `ListingProvider` and the in-memory `StaticListing`

pub mod error;
pub mod ids;
pub mod listing;
pub mod money;
pub mod product;

pub use error::CatalogError;
pub use ids::ProductId;
pub use listing::{ListingProvider, ListingResponse, StaticListing};
pub use money::{format_price, format_price_with, Currency, CurrencyFormatter, EnUsFormatter};
pub use product::ProductRecord;
