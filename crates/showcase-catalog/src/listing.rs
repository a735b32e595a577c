//! Product listing.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::product::ProductRecord;

/// Source of the product listing.
///
/// Implementations are deterministic and side-effect free; the order of the
/// returned records is the display order.
pub trait ListingProvider {
    fn list_products(&self) -> Vec<ProductRecord>;
}

/// The fixed demo catalog, built fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticListing;

const IMAGE_PARAMS: &str = "?w=800&h=600&fit=crop&crop=center";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}{}", photo, IMAGE_PARAMS)
}

impl ListingProvider for StaticListing {
    fn list_products(&self) -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("p1", "Minimal Chair", 129.99, unsplash("photo-1518051870910-a46e30d9db16"))
                .with_description("Modern, ergonomic chair for your workspace.")
                .on_sale(109.99)
                .with_discount(15.0),
            ProductRecord::new("p2", "Wireless Headphones", 199.0, unsplash("photo-1505740420928-5e560c06d30e"))
                .with_description("Crystal clear sound with active noise cancellation."),
            ProductRecord::new("p3", "Classic Watch", 249.99, unsplash("photo-1524592094714-0f0654e20314"))
                .with_description("Timeless design with premium leather strap.")
                .out_of_stock(),
            ProductRecord::new("p4", "Lightweight Sneakers", 89.99, unsplash("photo-1549298916-b41d501d3772"))
                .with_description("Breathable and comfortable for daily wear.")
                .on_sale(74.99)
                .with_discount(17.0),
            ProductRecord::new("p5", "Mirrorless Camera", 999.0, unsplash("photo-1516035069371-29a1b244cc32"))
                .with_description("Compact body with powerful image performance."),
            ProductRecord::new("p6", "Leather Backpack", 149.5, unsplash("photo-1553062407-98eeb64c6a62"))
                .with_description("Durable and stylish with multiple compartments."),
            ProductRecord::new("p7", "Desk Lamp", 59.99, unsplash("photo-1507473885765-e6ed057f782c"))
                .with_description("Adjustable brightness with a minimal silhouette."),
            ProductRecord::new("p8", "Utility Knife", 39.99, unsplash("photo-1622810917846-719511f8e618"))
                .with_description("Precision craftsmanship for everyday carry.")
                .out_of_stock(),
            ProductRecord::new("p9", "Scented Candle", 24.0, unsplash("photo-1646143612220-45f02eade445"))
                .with_description("Warm, calming fragrance for cozy nights.")
                .on_sale(19.99)
                .with_discount(17.0),
            ProductRecord::new("p10", "Ceramic Mug", 18.5, unsplash("photo-1695142258472-0cf0c8599499"))
                .with_description("Hand-glazed stoneware mug for daily coffee."),
        ]
    }
}

/// Payload of the listing endpoint: `{"products": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub products: Vec<ProductRecord>,
}

impl ListingResponse {
    pub fn from_provider(provider: &dyn ListingProvider) -> Self {
        Self {
            products: provider.list_products(),
        }
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(body: &[u8]) -> Result<Self, CatalogError> {
        Ok(serde_json::from_slice(body)?)
    }
}
