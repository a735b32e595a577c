//! Route and showcase configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a single route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exact path this route answers (e.g. "/api/products").
    pub pattern: String,
    /// Handler name.
    pub handler: String,
    /// Alternative paths served by the same handler.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            aliases: Vec::new(),
            methods: default_methods(),
        }
    }

    /// Serve the same handler under another path.
    pub fn with_alias(mut self, path: impl Into<String>) -> Self {
        self.aliases.push(path.into());
        self
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Whether this route answers `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern == path || self.aliases.iter().any(|a| a == path)
    }

    /// Whether this route accepts `method` (case-insensitive).
    pub fn allows(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level showcase configuration.
///
/// Every section is optional in the TOML source; missing sections and keys
/// take the defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub site: SiteConfig,
    pub endpoint: EndpointConfig,
    pub card: CardConfig,
    pub logging: LoggingConfig,
}

impl ShowcaseConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Page chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the navbar.
    pub brand: String,
    /// Document `<title>`.
    pub page_title: String,
    /// Heading above the product grid.
    pub heading: String,
    /// Application name in the copyright line.
    pub app_name: String,
    /// Copyright year. The current year is used when unset.
    pub copyright_year: Option<i32>,
    /// Author credited in the footer.
    pub owner: String,
    /// Footer profile links, in display order.
    pub profiles: Vec<ProfileLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "ProductCard".to_string(),
            page_title: "Product Cards Showcase".to_string(),
            heading: "Product Cards Showcase".to_string(),
            app_name: "Product Card App".to_string(),
            copyright_year: None,
            owner: "Manish Rana".to_string(),
            profiles: vec![
                ProfileLink::new("LinkedIn", "https://www.linkedin.com/in/manishraana/"),
                ProfileLink::new("GitHub", "https://github.com/manish-raana"),
            ],
        }
    }
}

/// A footer link to an external profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileLink {
    /// Network name (e.g. "GitHub").
    pub network: String,
    pub url: String,
}

impl ProfileLink {
    pub fn new(network: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            url: url.into(),
        }
    }
}

/// Where the listing endpoint lives and how to address it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Path of the JSON listing route.
    pub listing_path: String,
    /// Host used when the request carries no `host` header.
    pub default_host: String,
    /// Protocol used when the request carries no `x-forwarded-proto` header.
    pub default_protocol: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            listing_path: "/api/products".to_string(),
            default_host: "localhost:3000".to_string(),
            default_protocol: "http".to_string(),
        }
    }
}

/// Card presentation defaults applied to every card in the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    /// Currency symbol or ISO code.
    pub currency: String,
    /// Call-to-action label.
    pub cta_label: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            cta_label: "Add to Cart".to_string(),
        }
    }
}

/// Logger settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// "json", "human" or "tracing".
    pub format: String,
    /// "trace", "debug", "info", "warn" or "error".
    pub min_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            min_level: "info".to_string(),
        }
    }
}
