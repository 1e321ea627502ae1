//! Shell actions and the reducer that applies them

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use super::state::{ParseThemeError, ShellState, ThemeMode, WindowId};

/// Actions accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Mark a window open; no-op if it already is
    OpenWindow(WindowId),
    /// Close a window; no-op if it is not open
    CloseWindow(WindowId),
    /// Open a closed window or close an open one
    ToggleWindow(WindowId),
    /// Flip between light and dark
    ToggleTheme,
    /// Set the theme explicitly
    SetTheme(ThemeMode),
}

/// Result of applying an action
#[derive(Debug, Clone)]
pub struct Transition {
    /// Snapshot after the action
    pub state: Arc<ShellState>,
    /// False when the action left the state as it was
    pub changed: bool,
}

impl Transition {
    fn unchanged(state: &Arc<ShellState>) -> Self {
        Self {
            state: Arc::clone(state),
            changed: false,
        }
    }

    fn to(state: ShellState) -> Self {
        Self {
            state: Arc::new(state),
            changed: true,
        }
    }
}

/// Apply `action` to `state`, producing the next snapshot
///
/// `state` is never modified. When nothing changes the returned
/// snapshot is the same allocation as the input.
pub fn reduce(state: &Arc<ShellState>, action: &ShellAction) -> Transition {
    match action {
        ShellAction::OpenWindow(id) => {
            if state.is_open(id) {
                return Transition::unchanged(state);
            }
            let mut next = ShellState::clone(state);
            next.windows.insert(id.clone());
            Transition::to(next)
        }
        ShellAction::CloseWindow(id) => {
            if !state.is_open(id) {
                return Transition::unchanged(state);
            }
            let mut next = ShellState::clone(state);
            next.windows.shift_remove(id);
            Transition::to(next)
        }
        ShellAction::ToggleWindow(id) => {
            let action = if state.is_open(id) {
                ShellAction::CloseWindow(id.clone())
            } else {
                ShellAction::OpenWindow(id.clone())
            };
            reduce(state, &action)
        }
        ShellAction::ToggleTheme => reduce(state, &ShellAction::SetTheme(state.theme.toggled())),
        ShellAction::SetTheme(theme) => {
            if state.theme == *theme {
                return Transition::unchanged(state);
            }
            Transition::to(ShellState {
                theme: *theme,
                windows: state.windows.clone(),
            })
        }
    }
}

/// Errors from parsing a textual action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("Unknown action: {0:?}. Available: open:<id>, close:<id>, toggle:<id>, toggle-theme, theme:<light|dark>")]
    Unknown(String),

    #[error("Missing window id in {0:?}")]
    MissingWindow(String),

    #[error(transparent)]
    Theme(#[from] ParseThemeError),
}

impl FromStr for ShellAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "toggle-theme" {
            return Ok(ShellAction::ToggleTheme);
        }

        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| ParseActionError::Unknown(s.to_string()))?;
        let arg = arg.trim();

        if verb == "theme" {
            return Ok(ShellAction::SetTheme(arg.parse()?));
        }

        if arg.is_empty() {
            return Err(ParseActionError::MissingWindow(s.to_string()));
        }
        let id = WindowId::new(arg);

        match verb {
            "open" => Ok(ShellAction::OpenWindow(id)),
            "close" => Ok(ShellAction::CloseWindow(id)),
            "toggle" => Ok(ShellAction::ToggleWindow(id)),
            _ => Err(ParseActionError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellAction::OpenWindow(id) => write!(f, "open:{}", id),
            ShellAction::CloseWindow(id) => write!(f, "close:{}", id),
            ShellAction::ToggleWindow(id) => write!(f, "toggle:{}", id),
            ShellAction::ToggleTheme => f.write_str("toggle-theme"),
            ShellAction::SetTheme(theme) => write!(f, "theme:{}", theme),
        }
    }
}
