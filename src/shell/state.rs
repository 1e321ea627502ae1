//! Desktop shell state: theme mode and open windows

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colour scheme of the desktop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Foreground colour for menu bar icons drawn on this theme
    pub fn icon_fill(self) -> &'static str {
        match self {
            ThemeMode::Light => "black",
            ThemeMode::Dark => "white",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme mode: {0:?} (expected light or dark)")]
pub struct ParseThemeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Identifier of a desktop window, e.g. `about-this-site`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The "About This Site" panel opened from the menu bar logo
    pub fn about_this_site() -> Self {
        Self::new("about-this-site")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One immutable snapshot of the shell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub theme: ThemeMode,
    /// Open windows, oldest first
    pub windows: IndexSet<WindowId>,
}

impl ShellState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            windows: IndexSet::new(),
        }
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.windows.contains(id)
    }

    /// Open windows in the order they were opened
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowId> {
        self.windows.iter()
    }

    /// Most recently opened window
    pub fn frontmost(&self) -> Option<&WindowId> {
        self.windows.last()
    }
}
