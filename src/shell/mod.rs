//! Desktop shell state - theme mode and window registry
//!
//! State lives in immutable [`ShellState`] snapshots. Changes go through
//! [`reduce`], either directly or via a [`ShellStore`] that keeps the
//! current snapshot and notifies subscribers.

mod reducer;
mod state;
mod store;

pub use reducer::{reduce, ParseActionError, ShellAction, Transition};
pub use state::{ParseThemeError, ShellState, ThemeMode, WindowId};
pub use store::{ShellStore, SubscriptionId};

use crate::config::ShellConfig;

impl From<&ShellConfig> for ShellState {
    fn from(config: &ShellConfig) -> Self {
        let mut state = ShellState::new(config.theme);
        state.windows.extend(config.open_windows.iter().cloned());
        state
    }
}
