use showcase_catalog::{ListingProvider, StaticListing};
use showcase_core::{CardConfig, SiteConfig};
use showcase_ui::{present, render_page, CardOverrides, ProductCard};

fn page() -> String {
    let site = SiteConfig::default();
    let overrides = CardOverrides::from_config(&CardConfig::default());
    render_page(&site, 2024, &StaticListing.list_products(), &overrides)
}

#[test]
fn test_static_listing_page() {
    let html = page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<article").count(), 10);
    assert_eq!(html.matches(r#"aria-label="This item is on sale">Sale</span>"#).count(), 3);
    assert_eq!(html.matches(r#"aria-label="This item is out of stock">Out of Stock</span>"#).count(), 2);
    assert_eq!(html.matches(" disabled aria-describedby=\"out-of-stock-notice\"").count(), 2);
    assert_eq!(html.matches(r#"aria-label="15% off">15% OFF</span>"#).count(), 1);
    assert_eq!(html.matches(r#"aria-label="17% off">17% OFF</span>"#).count(), 2);

    let chair = html.find("product-title-minimal-chair").unwrap();
    let mug = html.find("product-title-ceramic-mug").unwrap();
    let footer = html.find("role=\"contentinfo\"").unwrap();
    assert!(chair < mug && mug < footer);
}

#[test]
fn test_static_listing_prices() {
    let html = page();

    assert!(html.contains(r#"aria-label="Sale price">$109.99</span>"#));
    assert!(html.contains(r#"aria-label="Original price">$129.99</span>"#));
    assert!(html.contains(r#"aria-label="Product price">$199.00</span>"#));
    assert!(html.contains(r#"aria-label="Product price">$18.50</span>"#));
    assert!(html.contains(r#"aria-label="Sale price">$19.99</span>"#));
}

#[test]
fn test_static_listing_states() {
    let states: Vec<_> = StaticListing
        .list_products()
        .iter()
        .map(|record| present(record, &CardOverrides::default()))
        .collect();

    let watch = states.iter().find(|s| s.id.as_str() == "p3").unwrap();
    assert!(watch.is_disabled);
    assert_eq!(watch.display_price, "$249.99");
    assert_eq!(watch.discount_badge, None);

    let sneakers = states.iter().find(|s| s.id.as_str() == "p4").unwrap();
    assert_eq!(sneakers.display_sale_price.as_deref(), Some("$74.99"));
    assert_eq!(sneakers.discount_badge, Some(17));
}

#[test]
fn test_card_from_listing_in_euros() {
    let camera = StaticListing
        .list_products()
        .into_iter()
        .find(|p| p.id.as_str() == "p5")
        .unwrap();
    let card = ProductCard::new(camera).with_overrides(CardOverrides::default().with_currency("EUR"));

    assert!(card.render().contains(r#"aria-label="Product price">€999.00</span>"#));
}
