//! Shell store - owns the current snapshot and notifies subscribers

use std::sync::Arc;

use super::reducer::{reduce, ShellAction};
use super::state::{ShellState, ThemeMode, WindowId};

/// Handle returned by [`ShellStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<ShellState>)>;

/// Single-threaded store for desktop shell state
///
/// Every dispatched action goes through [`reduce`]; subscribers only hear
/// about actions that actually changed the state.
pub struct ShellStore {
    state: Arc<ShellState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ShellStore {
    pub fn new(initial: ShellState) -> Self {
        Self {
            state: Arc::new(initial),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<ShellState> {
        Arc::clone(&self.state)
    }

    /// Apply an action; returns whether the state changed
    pub fn dispatch(&mut self, action: ShellAction) -> bool {
        let transition = reduce(&self.state, &action);
        if !transition.changed {
            tracing::debug!("Action {} left shell state unchanged", action);
            return false;
        }

        tracing::debug!("Action {} applied", action);
        self.state = transition.state;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }

    /// Call `listener` with each new snapshot
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<ShellState>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Stop notifying a subscriber; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn open_window(&mut self, id: WindowId) -> bool {
        self.dispatch(ShellAction::OpenWindow(id))
    }

    pub fn close_window(&mut self, id: WindowId) -> bool {
        self.dispatch(ShellAction::CloseWindow(id))
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dispatch(ShellAction::ToggleTheme)
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> bool {
        self.dispatch(ShellAction::SetTheme(theme))
    }
}

impl Default for ShellStore {
    fn default() -> Self {
        Self::new(ShellState::default())
    }
}

impl std::fmt::Debug for ShellStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn open_window_twice_leaves_one_entry() {
        let mut store = ShellStore::default();
        assert!(store.open_window(WindowId::about_this_site()));
        assert!(!store.open_window(WindowId::about_this_site()));
        assert_eq!(store.state().windows.len(), 1);
    }

    #[test]
    fn subscribers_see_changes_only() {
        let mut store = ShellStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.theme));

        store.toggle_theme();
        store.set_theme(ThemeMode::Dark);
        store.toggle_theme();

        assert_eq!(*seen.borrow(), [ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = ShellStore::default();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.open_window(WindowId::about_this_site());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.close_window(WindowId::about_this_site());

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn old_snapshots_stay_valid() {
        let mut store = ShellStore::default();
        let before = store.state();
        store.open_window(WindowId::about_this_site());
        assert!(before.windows.is_empty());
        assert!(store.state().is_open(&WindowId::about_this_site()));
    }
}
