//! Navbar and footer.

use chrono::Datelike;
use showcase_core::{ProfileLink, SiteConfig};

use crate::html::html_escape;
use crate::theme::{render_theme_toggle, ThemeState};

const LINKEDIN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="currentColor" aria-hidden="true"><path d="M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13zM7.12 20.45H3.56V9h3.56v11.45zM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0z"/></svg>"#;
const GITHUB_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="currentColor" aria-hidden="true"><path d="M12 .3a12 12 0 0 0-3.8 23.38c.6.12.82-.26.82-.58v-2.03c-3.34.73-4.04-1.6-4.04-1.6-.55-1.4-1.34-1.77-1.34-1.77-1.08-.74.09-.73.09-.73 1.2.09 1.83 1.24 1.83 1.24 1.07 1.83 2.81 1.3 3.5 1 .1-.78.42-1.31.76-1.61-2.66-.3-5.47-1.33-5.47-5.93 0-1.31.47-2.38 1.24-3.22-.14-.3-.54-1.52.1-3.18 0 0 1-.32 3.3 1.23a11.5 11.5 0 0 1 6 0c2.28-1.55 3.29-1.23 3.29-1.23.64 1.66.24 2.88.12 3.18.77.84 1.23 1.91 1.23 3.22 0 4.61-2.81 5.62-5.48 5.92.42.36.81 1.1.81 2.22v3.29c0 .32.22.7.82.58A12 12 0 0 0 12 .3z"/></svg>"#;
const LINK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M10 13a5 5 0 0 0 7.07 0l3-3a5 5 0 0 0-7.07-7.07l-1.5 1.5"/><path d="M14 11a5 5 0 0 0-7.07 0l-3 3a5 5 0 0 0 7.07 7.07l1.5-1.5"/></svg>"#;

/// Top navigation: brand link and theme toggle.
pub fn render_navbar(site: &SiteConfig, theme: ThemeState) -> String {
    format!(
        r#"<nav class="shadow-sm w-full">
<div class="container mx-auto px-4 py-4">
<div class="flex items-center justify-between">
<div class="text-2xl font-bold"><a href="/" class="hover:text-primary transition-colors">{brand}</a></div>
<div class="flex items-center gap-6">{toggle}</div>
</div>
</div>
</nav>
"#,
        brand = html_escape(&site.brand),
        toggle = render_theme_toggle(theme),
    )
}

/// Configured copyright year, or the current UTC year.
pub fn copyright_year(site: &SiteConfig) -> i32 {
    site.copyright_year
        .unwrap_or_else(|| chrono::Utc::now().year())
}

/// Page footer: copyright, author credit and profile links.
pub fn render_footer(site: &SiteConfig, year: i32) -> String {
    let owner = html_escape(&site.owner);
    let credit = match site.profiles.first() {
        Some(profile) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="font-medium hover:text-primary">{}</a>"#,
            html_escape(&profile.url),
            owner
        ),
        None => owner,
    };

    let links: String = site
        .profiles
        .iter()
        .map(|profile| render_profile_link(&site.owner, profile))
        .collect();

    format!(
        r#"<footer role="contentinfo" class="w-full border-t border-border py-6">
<div class="container mx-auto px-4 flex flex-col items-center justify-between gap-4 sm:flex-row">
<p class="text-sm text-muted-foreground">© {year} {app_name}. Created with ❤️ by {credit}</p>
<div class="flex items-center gap-4">{links}</div>
</div>
</footer>
"#,
        year = year,
        app_name = html_escape(&site.app_name),
        credit = credit,
        links = links,
    )
}

fn render_profile_link(owner: &str, profile: &ProfileLink) -> String {
    let icon = match profile.network.to_ascii_lowercase().as_str() {
        "linkedin" => LINKEDIN_ICON,
        "github" => GITHUB_ICON,
        _ => LINK_ICON,
    };

    format!(
        r#"<a href="{url}" target="_blank" rel="noopener noreferrer" class="text-muted-foreground hover:text-primary transition-colors" aria-label="Visit {owner}'s {network} profile">{icon}</a>"#,
        url = html_escape(&profile.url),
        owner = html_escape(owner),
        network = html_escape(&profile.network),
        icon = icon,
    )
}
