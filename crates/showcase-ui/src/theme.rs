//! Light/dark theme state.
//!
//! The server cannot know the visitor's theme, so every page is rendered
//! with the theme unsettled. `THEME_SCRIPT` settles it in the browser from
//! `localStorage` or `prefers-color-scheme` and wires the toggle.

use std::fmt;

use thiserror::Error;

/// Concrete theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle while in this mode.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme as known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    /// Not yet known; theme-dependent content shows a placeholder.
    #[default]
    Unsettled,
    Settled(ThemeMode),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Theme already settled to {0}")]
    AlreadySettled(ThemeMode),

    #[error("Theme is not settled yet")]
    Unsettled,
}

/// Theme of one display session. Starts unsettled and settles once.
#[derive(Debug, Clone, Default)]
pub struct ThemeSession {
    state: ThemeState,
}

impl ThemeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        match self.state {
            ThemeState::Settled(mode) => Some(mode),
            ThemeState::Unsettled => None,
        }
    }

    pub fn settle(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        if let ThemeState::Settled(current) = self.state {
            return Err(ThemeError::AlreadySettled(current));
        }
        self.state = ThemeState::Settled(mode);
        Ok(())
    }

    /// Flip the settled mode and return the new one.
    pub fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        let mode = self.mode().ok_or(ThemeError::Unsettled)?.toggled();
        self.state = ThemeState::Settled(mode);
        Ok(mode)
    }
}

/// Theme toggle button for `state`.
pub fn render_theme_toggle(state: ThemeState) -> String {
    match state {
        ThemeState::Unsettled => r#"<button type="button" class="p-2 rounded-md" data-theme-toggle disabled><span class="w-6 h-6 block"></span></button>"#.to_string(),
        ThemeState::Settled(mode) => format!(
            r#"<button type="button" class="p-2 rounded-md" data-theme-toggle aria-label="Switch to {} mode">{}</button>"#,
            mode.toggled(),
            mode.icon()
        ),
    }
}

/// Settles the theme in the browser. Must run in `<head>`.
pub const THEME_SCRIPT: &str = r#"(function () {
  var root = document.documentElement;
  var stored = null;
  try { stored = localStorage.getItem('theme'); } catch (e) {}
  var mode = stored === 'light' || stored === 'dark'
    ? stored
    : (window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light');

  function apply(next) {
    mode = next;
    root.classList.toggle('dark', mode === 'dark');
    root.style.colorScheme = mode;
    var button = document.querySelector('[data-theme-toggle]');
    if (!button) return;
    var other = mode === 'dark' ? 'light' : 'dark';
    button.disabled = false;
    button.setAttribute('aria-label', 'Switch to ' + other + ' mode');
    button.textContent = mode === 'dark' ? '☀️' : '🌙';
  }

  root.classList.toggle('dark', mode === 'dark');
  document.addEventListener('DOMContentLoaded', function () {
    apply(mode);
    var button = document.querySelector('[data-theme-toggle]');
    if (!button) return;
    button.addEventListener('click', function () {
      var next = mode === 'dark' ? 'light' : 'dark';
      try { localStorage.setItem('theme', next); } catch (e) {}
      apply(next);
    });
  });
})();"#;
