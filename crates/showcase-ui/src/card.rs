//! Product card markup.

use showcase_catalog::{ProductId, ProductRecord};

use crate::html::{class_list, html_escape};
use crate::presenter::{
    present, CardOverrides, RenderedCardState, ORIGINAL_PRICE_LABEL, OUT_OF_STOCK_BADGE_TEXT,
    OUT_OF_STOCK_NOTICE, PRODUCT_PRICE_LABEL, SALE_BADGE_TEXT, SALE_PRICE_LABEL,
};

const ARTICLE_CLASS: &str = "group relative flex h-full flex-col overflow-hidden rounded-lg border border-border bg-card text-card-foreground shadow-sm hover:shadow-lg";
const FIGURE_CLASS: &str = "relative w-full aspect-[4/3]";
const CTA_CLASS: &str = "inline-flex w-full items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2";
const IMAGE_SIZES: &str = "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 25vw";

/// Callback invoked with the product id when the CTA is activated.
pub type CtaHandler = Box<dyn Fn(&ProductId)>;

/// A record plus everything needed to render and drive its card.
pub struct ProductCard {
    record: ProductRecord,
    overrides: CardOverrides,
    on_cta_click: Option<CtaHandler>,
}

impl ProductCard {
    pub fn new(record: ProductRecord) -> Self {
        Self {
            record,
            overrides: CardOverrides::default(),
            on_cta_click: None,
        }
    }

    pub fn with_overrides(mut self, overrides: CardOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn on_cta_click(mut self, handler: impl Fn(&ProductId) + 'static) -> Self {
        self.on_cta_click = Some(Box::new(handler));
        self
    }

    pub fn record(&self) -> &ProductRecord {
        &self.record
    }

    pub fn state(&self) -> RenderedCardState {
        present(&self.record, &self.overrides)
    }

    pub fn render(&self) -> String {
        render_card(&self.state())
    }

    /// Activate the CTA. Returns whether the handler ran.
    ///
    /// Out-of-stock cards never invoke the handler.
    pub fn click(&self) -> bool {
        if !self.record.in_stock {
            return false;
        }
        match &self.on_cta_click {
            Some(handler) => {
                handler(&self.record.id);
                true
            }
            None => false,
        }
    }
}

/// Render a card from its display state.
pub fn render_card(state: &RenderedCardState) -> String {
    let labels = &state.labels;

    let article_class = class_list(&[
        ARTICLE_CLASS,
        if state.is_disabled { "opacity-90" } else { "" },
        state.class_name.as_deref().unwrap_or(""),
    ]);
    let figure_class = class_list(&[
        FIGURE_CLASS,
        if state.image_desaturated { "grayscale" } else { "" },
    ]);
    let cta_class = class_list(&[
        CTA_CLASS,
        if state.is_disabled { "cursor-not-allowed opacity-60" } else { "" },
    ]);

    let title = html_escape(&state.title);
    let caption = match &state.description {
        Some(description) => format!("{} - {}", title, html_escape(description)),
        None => title.clone(),
    };
    let description = state
        .description
        .as_ref()
        .map(|d| {
            format!(
                r#"<p class="mt-2 text-left text-sm text-muted-foreground">{}</p>"#,
                html_escape(d)
            )
        })
        .unwrap_or_default();

    let mut badges = String::new();
    if let Some(label) = labels.sale_badge {
        badges.push_str(&format!(
            r#"<span class="rounded-full bg-accent px-2.5 py-1 text-xs font-medium text-accent-foreground/90 shadow-sm" aria-label="{}">{}</span>"#,
            label, SALE_BADGE_TEXT
        ));
    }
    if let Some(label) = labels.stock_badge {
        badges.push_str(&format!(
            r#"<span class="rounded-full bg-destructive px-2.5 py-1 text-xs font-medium text-destructive-foreground shadow-sm" aria-label="{}">{}</span>"#,
            label, OUT_OF_STOCK_BADGE_TEXT
        ));
    }

    let prices = match &state.display_sale_price {
        Some(sale) => format!(
            r#"<span class="text-base font-semibold text-primary" aria-label="{}">{}</span><span class="text-sm text-muted-foreground line-through" aria-label="{}">{}</span>"#,
            SALE_PRICE_LABEL,
            html_escape(sale),
            ORIGINAL_PRICE_LABEL,
            html_escape(&state.display_price)
        ),
        None => format!(
            r#"<span class="text-base font-semibold" aria-label="{}">{}</span>"#,
            PRODUCT_PRICE_LABEL,
            html_escape(&state.display_price)
        ),
    };
    let discount = match (state.discount_text(), &labels.discount) {
        (Some(text), Some(label)) => format!(
            r#"<span class="ml-1 rounded bg-yellow-200 px-2.5 py-0.5 text-xs font-semibold text-yellow-800" aria-label="{}">{}</span>"#,
            label, text
        ),
        _ => String::new(),
    };

    let (disabled, described_by, notice) = match labels.cta_described_by {
        Some(id) => (
            " disabled",
            format!(r#" aria-describedby="{}""#, id),
            format!(r#"<div id="{}" class="sr-only">{}</div>"#, id, OUT_OF_STOCK_NOTICE),
        ),
        None => ("", String::new(), String::new()),
    };

    format!(
        r#"<article class="{article_class}" aria-labelledby="{heading_id}" data-product-id="{id}">
<figure class="{figure_class}">
<img src="{image_url}" alt="{image_alt}" sizes="{sizes}" class="object-cover" loading="lazy">
<figcaption class="sr-only">{caption}</figcaption>
<div class="pointer-events-none absolute left-3 top-3 flex flex-wrap items-center gap-2" role="status" aria-live="polite">{badges}</div>
</figure>
<div class="flex flex-1 flex-col p-4">
<header>
<h3 id="{heading_id}" class="text-left text-lg font-semibold md:text-xl">{title}</h3>
{description}
</header>
<div class="mt-3 flex items-center justify-start gap-3" role="text" aria-label="{price_row}">{prices}{discount}</div>
<footer class="mt-auto pt-4">
<button type="button" class="{cta_class}" aria-label="{cta_aria}" data-product-id="{id}"{disabled}{described_by}>{cta_label}</button>
{notice}
</footer>
</div>
</article>
"#,
        article_class = html_escape(&article_class),
        heading_id = html_escape(&labels.heading_id),
        id = html_escape(state.id.as_str()),
        figure_class = figure_class,
        image_url = html_escape(&state.image_url),
        image_alt = html_escape(&state.image_alt),
        sizes = IMAGE_SIZES,
        caption = caption,
        badges = badges,
        title = title,
        description = description,
        price_row = PRODUCT_PRICE_LABEL,
        prices = prices,
        discount = discount,
        cta_class = cta_class,
        cta_aria = html_escape(&labels.cta),
        disabled = disabled,
        described_by = described_by,
        cta_label = html_escape(&state.cta_label),
        notice = notice,
    )
}
