//! Card presenter: derives everything a product card displays.
//!
//! `present` is pure. It never fails and never mutates the record: an
//! inconsistent sale (sale price missing or not below the base price) is
//! displayed as a full-price item, and a currency the formatter rejects
//! falls back to `{currency}{amount:.2}`.

use showcase_catalog::{format_price, ProductId, ProductRecord};
use showcase_core::CardConfig;

pub const DEFAULT_CURRENCY: &str = "$";
pub const DEFAULT_CTA_LABEL: &str = "Add to Cart";

pub const SALE_BADGE_TEXT: &str = "Sale";
pub const SALE_BADGE_LABEL: &str = "This item is on sale";
pub const OUT_OF_STOCK_BADGE_TEXT: &str = "Out of Stock";
pub const OUT_OF_STOCK_BADGE_LABEL: &str = "This item is out of stock";

pub const SALE_PRICE_LABEL: &str = "Sale price";
pub const ORIGINAL_PRICE_LABEL: &str = "Original price";
pub const PRODUCT_PRICE_LABEL: &str = "Product price";

/// Id of the hidden element explaining why the CTA is disabled.
pub const OUT_OF_STOCK_NOTICE_ID: &str = "out-of-stock-notice";
pub const OUT_OF_STOCK_NOTICE: &str =
    "This item is currently out of stock and cannot be added to cart.";

/// Per-card presentation overrides.
///
/// Unset fields take the defaults. An empty `currency` or `cta_label` is
/// used as given; an empty `image_alt` takes the default alt text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardOverrides {
    pub image_alt: Option<String>,
    /// `"$"` or an ISO 4217 code.
    pub currency: Option<String>,
    pub cta_label: Option<String>,
    /// Extra CSS class on the card container.
    pub class_name: Option<String>,
}

impl CardOverrides {
    /// Grid-wide overrides from configuration.
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            currency: Some(config.currency.clone()),
            cta_label: Some(config.cta_label.clone()),
            ..Default::default()
        }
    }

    pub fn with_image_alt(mut self, alt: impl Into<String>) -> Self {
        self.image_alt = Some(alt.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_cta_label(mut self, label: impl Into<String>) -> Self {
        self.cta_label = Some(label.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Accessible names and ids of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleLabels {
    /// Heading id; the card container is labelled by it.
    pub heading_id: String,
    pub cta: String,
    /// `"{N}% off"`, present with the discount badge.
    pub discount: Option<String>,
    pub sale_badge: Option<&'static str>,
    pub stock_badge: Option<&'static str>,
    /// `aria-describedby` of the CTA.
    pub cta_described_by: Option<&'static str>,
}

/// Display state of one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCardState {
    pub id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub image_alt: String,
    pub display_price: String,
    pub is_effectively_on_sale: bool,
    pub display_sale_price: Option<String>,
    /// Whole percent shown as `"{N}% OFF"`.
    pub discount_badge: Option<u32>,
    pub is_disabled: bool,
    pub image_desaturated: bool,
    pub cta_label: String,
    pub class_name: Option<String>,
    pub labels: AccessibleLabels,
}

impl RenderedCardState {
    pub fn discount_text(&self) -> Option<String> {
        self.discount_badge.map(|pct| format!("{}% OFF", pct))
    }
}

/// Derive the display state of `record`.
pub fn present(record: &ProductRecord, overrides: &CardOverrides) -> RenderedCardState {
    let currency = overrides.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    let sale_price = record.effective_sale_price();
    let is_disabled = !record.in_stock;
    let discount_badge = compute_discount(record);

    let labels = AccessibleLabels {
        heading_id: heading_id(&record.title),
        cta: cta_aria_label(&record.title, is_disabled),
        discount: discount_badge.map(|pct| format!("{}% off", pct)),
        sale_badge: sale_price.map(|_| SALE_BADGE_LABEL),
        stock_badge: is_disabled.then_some(OUT_OF_STOCK_BADGE_LABEL),
        cta_described_by: is_disabled.then_some(OUT_OF_STOCK_NOTICE_ID),
    };

    RenderedCardState {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone().filter(|d| !d.is_empty()),
        image_url: record.image_url.clone(),
        image_alt: non_empty(&overrides.image_alt)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} product image", record.title)),
        display_price: format_price(record.price, currency),
        is_effectively_on_sale: sale_price.is_some(),
        display_sale_price: sale_price.map(|sale| format_price(sale, currency)),
        discount_badge,
        is_disabled,
        image_desaturated: is_disabled,
        cta_label: overrides
            .cta_label
            .as_deref()
            .unwrap_or(DEFAULT_CTA_LABEL)
            .to_string(),
        class_name: non_empty(&overrides.class_name).map(str::to_string),
        labels,
    }
}

/// Discount badge value, if any.
///
/// An explicit percentage wins and is rounded; a negative or NaN one shows
/// no badge. Otherwise an effective sale shows the rounded saving when it
/// is above zero.
pub fn compute_discount(record: &ProductRecord) -> Option<u32> {
    if let Some(explicit) = record.discount_percentage {
        if explicit.is_nan() || explicit < 0.0 {
            return None;
        }
        return Some(explicit.round() as u32);
    }

    let sale = record.effective_sale_price()?;
    if record.price <= 0.0 {
        return None;
    }

    let pct = (100.0 - sale / record.price * 100.0).round();
    (pct > 0.0).then_some(pct as u32)
}

/// `"product-title-"` + title with whitespace runs as `-`, lowercased.
///
/// Whitespace is the JavaScript regex `\s` set: Unicode `White_Space` plus
/// U+FEFF, without U+0085.
pub fn heading_id(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;

    for c in title.chars() {
        if is_id_separator(c) {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }

    format!("product-title-{}", slug.to_lowercase())
}

fn is_id_separator(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

fn cta_aria_label(title: &str, disabled: bool) -> String {
    if disabled {
        format!("Cannot add {} to cart - item is out of stock", title)
    } else {
        format!("Add {} to cart", title)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> ProductRecord {
        ProductRecord::new("p1", "Minimal Chair", 129.99, "https://img/chair.jpg")
            .with_description("Modern, ergonomic chair for your workspace.")
    }

    #[test]
    fn test_full_price_card() {
        let state = present(&chair(), &CardOverrides::default());

        assert_eq!(state.display_price, "$129.99");
        assert!(!state.is_effectively_on_sale);
        assert_eq!(state.display_sale_price, None);
        assert_eq!(state.discount_badge, None);
        assert!(!state.is_disabled);
        assert!(!state.image_desaturated);
        assert_eq!(state.cta_label, "Add to Cart");
        assert_eq!(state.image_alt, "Minimal Chair product image");
        assert_eq!(state.labels.cta, "Add Minimal Chair to cart");
        assert_eq!(state.labels.sale_badge, None);
        assert_eq!(state.labels.cta_described_by, None);

        let free = ProductRecord::new("p", "Sticker", 0.0, "x");
        assert_eq!(present(&free, &CardOverrides::default()).display_price, "$0.00");
        let pricey = ProductRecord::new("p", "Sofa", 9999.99, "x");
        assert_eq!(present(&pricey, &CardOverrides::default()).display_price, "$9999.99");
    }

    #[test]
    fn test_sale_with_computed_discount() {
        let quarter_off = ProductRecord::new("p", "Stool", 100.0, "x").on_sale(75.0);
        let state = present(&quarter_off, &CardOverrides::default());
        assert_eq!(state.discount_text().as_deref(), Some("25% OFF"));
        assert_eq!(state.labels.discount.as_deref(), Some("25% off"));

        let state = present(&chair().on_sale(109.99), &CardOverrides::default());

        assert!(state.is_effectively_on_sale);
        assert_eq!(state.display_sale_price.as_deref(), Some("$109.99"));
        assert_eq!(state.display_price, "$129.99");
        assert_eq!(state.discount_badge, Some(15));
        assert_eq!(state.discount_text().as_deref(), Some("15% OFF"));
        assert_eq!(state.labels.discount.as_deref(), Some("15% off"));
        assert_eq!(state.labels.sale_badge, Some("This item is on sale"));
    }

    #[test]
    fn test_sale_price_not_below_price_is_full_price() {
        for sale in [129.99, 150.0] {
            let state = present(&chair().on_sale(sale), &CardOverrides::default());
            assert!(!state.is_effectively_on_sale);
            assert_eq!(state.display_sale_price, None);
            assert_eq!(state.discount_badge, None);
            assert_eq!(state.labels.sale_badge, None);
        }

        let mut flag_without_price = chair();
        flag_without_price.is_on_sale = true;
        assert!(!present(&flag_without_price, &CardOverrides::default()).is_effectively_on_sale);
    }

    #[test]
    fn test_explicit_discount_wins() {
        let record = chair().on_sale(109.99).with_discount(20.0);
        assert_eq!(present(&record, &CardOverrides::default()).discount_badge, Some(20));

        let record = chair().with_discount(12.6);
        assert_eq!(compute_discount(&record), Some(13));
    }

    #[test]
    fn test_explicit_zero_is_shown_negative_is_not() {
        assert_eq!(compute_discount(&chair().with_discount(0.0)), Some(0));
        assert_eq!(compute_discount(&chair().on_sale(100.0).with_discount(-5.0)), None);
        assert_eq!(compute_discount(&chair().with_discount(f64::NAN)), None);
    }

    #[test]
    fn test_explicit_discount_not_clamped() {
        assert_eq!(compute_discount(&chair().with_discount(150.0)), Some(150));
    }

    #[test]
    fn test_tiny_saving_rounds_to_no_badge() {
        let record = ProductRecord::new("p", "Pen", 100.0, "x").on_sale(99.9);
        assert!(record.is_effectively_on_sale());
        assert_eq!(compute_discount(&record), None);
    }

    #[test]
    fn test_zero_price_has_no_computed_discount() {
        let record = ProductRecord::new("p", "Free", 0.0, "x").on_sale(-1.0);
        assert!(record.is_effectively_on_sale());
        assert_eq!(compute_discount(&record), None);
    }

    #[test]
    fn test_out_of_stock() {
        let state = present(&chair().out_of_stock(), &CardOverrides::default());

        assert!(state.is_disabled);
        assert!(state.image_desaturated);
        assert_eq!(
            state.labels.cta,
            "Cannot add Minimal Chair to cart - item is out of stock"
        );
        assert_eq!(state.labels.stock_badge, Some("This item is out of stock"));
        assert_eq!(state.labels.cta_described_by, Some("out-of-stock-notice"));
    }

    #[test]
    fn test_heading_id_slug() {
        assert_eq!(heading_id("Minimal Chair"), "product-title-minimal-chair");
        assert_eq!(heading_id("Big   Blue\tMug"), "product-title-big-blue-mug");
        assert_eq!(heading_id("AirPods"), "product-title-airpods");
        assert_eq!(heading_id("Desk\u{a0}Lamp"), "product-title-desk-lamp");
    }

    #[test]
    fn test_heading_id_separator_edges() {
        assert_eq!(heading_id("Desk\u{feff}Lamp"), "product-title-desk-lamp");
        assert_eq!(heading_id("Desk\u{85}Lamp"), "product-title-desk\u{85}lamp");
    }

    #[test]
    fn test_overrides() {
        let overrides = CardOverrides::default()
            .with_image_alt("A wooden chair")
            .with_currency("EUR")
            .with_cta_label("Buy now")
            .with_class_name("featured");
        let state = present(&chair().on_sale(109.99), &overrides);

        assert_eq!(state.image_alt, "A wooden chair");
        assert_eq!(state.display_price, "\u{20ac}129.99");
        assert_eq!(state.display_sale_price.as_deref(), Some("\u{20ac}109.99"));
        assert_eq!(state.cta_label, "Buy now");
        assert_eq!(state.class_name.as_deref(), Some("featured"));
    }

    #[test]
    fn test_empty_overrides() {
        let overrides = CardOverrides::default()
            .with_image_alt("")
            .with_cta_label("")
            .with_currency("");
        let state = present(&chair().on_sale(109.99), &overrides);

        assert_eq!(state.image_alt, "Minimal Chair product image");
        assert_eq!(state.cta_label, "");
        assert_eq!(state.display_price, "129.99");
        assert_eq!(state.display_sale_price.as_deref(), Some("109.99"));
    }

    #[test]
    fn test_invalid_currency_falls_back() {
        let state = present(&chair(), &CardOverrides::default().with_currency("\u{20ac}"));
        assert_eq!(state.display_price, "\u{20ac}129.99");
    }

    #[test]
    fn test_from_config() {
        let overrides = CardOverrides::from_config(&CardConfig::default());
        assert_eq!(overrides.currency.as_deref(), Some("$"));
        assert_eq!(overrides.cta_label.as_deref(), Some("Add to Cart"));
        assert_eq!(overrides.image_alt, None);
    }
}
