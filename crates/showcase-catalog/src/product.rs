//! Product records.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ProductId;

/// One product as served by the listing endpoint.
///
/// Field names on the wire are camelCase. `inStock` defaults to `true` and
/// `isOnSale` to `false` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base price, two-decimal currency semantics.
    pub price: f64,
    pub image_url: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_on_sale: bool,
    /// Only meaningful when `is_on_sale` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Explicit override for the discount badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
}

fn default_in_stock() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ProductRecord {
    /// An in-stock, full-price record.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            price,
            image_url: image_url.into(),
            in_stock: true,
            is_on_sale: false,
            sale_price: None,
            discount_percentage: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the record on sale at `sale_price`.
    pub fn on_sale(mut self, sale_price: f64) -> Self {
        self.is_on_sale = true;
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_discount(mut self, percentage: f64) -> Self {
        self.discount_percentage = Some(percentage);
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Sale flag set, sale price present and strictly below the base price.
    ///
    /// A record failing any of these is displayed at full price.
    pub fn is_effectively_on_sale(&self) -> bool {
        self.effective_sale_price().is_some()
    }

    /// The sale price, if the record is effectively on sale.
    pub fn effective_sale_price(&self) -> Option<f64> {
        if !self.is_on_sale {
            return None;
        }
        self.sale_price.filter(|sale| *sale < self.price)
    }

    /// Check the data rules of a listing entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(invalid("empty id"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("empty title"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid("price must be a finite, non-negative number"));
        }
        if let Some(sale) = self.sale_price {
            if !sale.is_finite() || sale < 0.0 {
                return Err(invalid("sale price must be a finite, non-negative number"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> ProductRecord {
        ProductRecord::new("p1", "Minimal Chair", 129.99, "https://img/chair.jpg")
    }

    #[test]
    fn test_effective_sale_requires_flag_and_lower_price() {
        assert!(chair().on_sale(109.99).is_effectively_on_sale());

        let mut flag_only = chair();
        flag_only.is_on_sale = true;
        assert!(!flag_only.is_effectively_on_sale());

        let mut price_only = chair();
        price_only.sale_price = Some(99.0);
        assert!(!price_only.is_effectively_on_sale());

        assert!(!chair().on_sale(129.99).is_effectively_on_sale());
        assert!(!chair().on_sale(150.0).is_effectively_on_sale());
    }

    #[test]
    fn test_wire_defaults() {
        let json = r#"{"id":"p2","title":"Wireless Headphones","price":199.0,"imageUrl":"x"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert!(record.in_stock);
        assert!(!record.is_on_sale);
        assert_eq!(record.description, None);
        assert_eq!(record.discount_percentage, None);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let record = chair().on_sale(109.99).with_discount(15.0).out_of_stock();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["imageUrl"], "https://img/chair.jpg");
        assert_eq!(value["inStock"], false);
        assert_eq!(value["isOnSale"], true);
        assert_eq!(value["salePrice"], 109.99);
        assert_eq!(value["discountPercentage"], 15.0);
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_validate() {
        assert!(chair().validate().is_ok());

        let mut nameless = chair();
        nameless.title = "  ".to_string();
        assert!(matches!(
            nameless.validate(),
            Err(CatalogError::InvalidRecord { id, .. }) if id == "p1"
        ));

        let mut negative = chair();
        negative.price = -1.0;
        assert!(negative.validate().is_err());

        assert!(chair().on_sale(f64::NAN).validate().is_err());
    }
}
