//! Replay shell actions and print the resulting state

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::shell::{ShellAction, ShellState};
use crate::Site;

/// Parse each action and dispatch it against the configured initial state
pub fn replay<S: AsRef<str>>(site: &Site, actions: &[S]) -> Result<Arc<ShellState>> {
    let actions = actions
        .iter()
        .map(|a| {
            a.as_ref()
                .parse::<ShellAction>()
                .with_context(|| format!("Invalid action {:?}", a.as_ref()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut store = site.shell();
    for action in actions {
        let changed = store.dispatch(action.clone());
        tracing::info!("{} ({})", action, if changed { "changed" } else { "no-op" });
    }

    Ok(store.state())
}

/// Run the shell command
pub fn run<S: AsRef<str>>(site: &Site, actions: &[S]) -> Result<()> {
    let state = replay(site, actions)?;
    println!("{}", serde_json::to_string_pretty(&*state)?);
    Ok(())
}
