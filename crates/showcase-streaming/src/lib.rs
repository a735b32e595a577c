//! Streaming primitives for shell-first SSR.
//!
//! - `Shell` / `HeadContent` - Document head and the chrome around sections
//! - `StreamingSink` - Sink wrapper that enforces shell-first ordering
//! - `html_escape` - Escaping shared by the shell and the page markup

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
