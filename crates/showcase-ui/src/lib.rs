//! Server-rendered UI for the product card showcase.
//!
//! - `present` / `ProductCard` - Card display state and markup
//! - `ThemeSession` - Light/dark theme that settles once per session
//! - `render_navbar` / `render_footer` - Page chrome
//! - `build_shell` / `render_grid` - Page assembly for streaming

mod card;
mod html;
mod layout;
mod page;
mod presenter;
mod styles;
mod theme;

pub use card::*;
pub use html::html_escape;
pub use layout::*;
pub use page::*;
pub use presenter::*;
pub use styles::SHOWCASE_STYLES;
pub use theme::*;
