//! Page assembly.
//!
//! The page streams as three parts: the shell (head, navbar, heading), the
//! `products` section (the card grid) and the closing chrome (footer).

use showcase_catalog::ProductRecord;
use showcase_core::SiteConfig;
use showcase_streaming::{HeadContent, Shell};

use crate::card::render_card;
use crate::html::html_escape;
use crate::layout::{render_footer, render_navbar};
use crate::presenter::{present, CardOverrides};
use crate::styles::SHOWCASE_STYLES;
use crate::theme::{ThemeState, THEME_SCRIPT};

/// Name of the streamed grid section.
pub const PRODUCTS_SECTION: &str = "products";

pub const EMPTY_LISTING_MESSAGE: &str = "No products are available right now.";

const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 max-w-7xl mx-auto py-10";

/// Page shell for `site`.
///
/// The theme is always unsettled here; the head script settles it.
pub fn build_shell(site: &SiteConfig, year: i32) -> Shell {
    let head = HeadContent::new(site.page_title.as_str())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("color-scheme", "light dark")
        .with_style(SHOWCASE_STYLES)
        .with_script(THEME_SCRIPT);

    Shell::new(head)
        .with_body_start(format!(
            r#"<body>
<div class="w-full min-h-screen flex flex-col items-center justify-start gap-10">
{navbar}<div class="container mx-auto px-4 flex-1">
<h1 class="text-3xl font-bold text-center mb-8 text-foreground">{heading}</h1>
"#,
            navbar = render_navbar(site, ThemeState::Unsettled),
            heading = html_escape(&site.heading),
        ))
        .with_body_end(format!(
            "</div>\n{footer}</div>\n</body>\n</html>",
            footer = render_footer(site, year),
        ))
}

/// Card grid in listing order, or the empty-state message.
pub fn render_grid(products: &[ProductRecord], overrides: &CardOverrides) -> String {
    let body = if products.is_empty() {
        format!(
            r#"<p class="text-center text-muted-foreground" role="status">{}</p>"#,
            EMPTY_LISTING_MESSAGE
        )
    } else {
        products
            .iter()
            .map(|record| render_card(&present(record, overrides)))
            .collect()
    };

    format!(
        r#"<section class="{class}" aria-label="Products" data-section="{section}">
{body}</section>
"#,
        class = GRID_CLASS,
        section = PRODUCTS_SECTION,
        body = body,
    )
}

/// Render the whole page in one string.
pub fn render_page(
    site: &SiteConfig,
    year: i32,
    products: &[ProductRecord],
    overrides: &CardOverrides,
) -> String {
    let grid = render_grid(products, overrides);
    build_shell(site, year).render_document(&[grid.as_str()])
}
