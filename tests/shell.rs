use std::cell::Cell;
use std::rc::Rc;

use deskfolio::shell::{ShellAction, ThemeMode, WindowId};
use deskfolio::Site;

#[test]
fn menu_bar_logo_opens_about_panel_once() {
    let tmp = tempfile::tempdir().unwrap();
    let site = Site::new(tmp.path()).unwrap();
    let mut store = site.shell();

    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    store.dispatch(ShellAction::OpenWindow(WindowId::about_this_site()));
    store.dispatch(ShellAction::OpenWindow(WindowId::about_this_site()));

    let state = store.state();
    assert_eq!(
        state.open_windows().collect::<Vec<_>>(),
        vec![&WindowId::about_this_site()]
    );
    assert_eq!(renders.get(), 1);
}

#[test]
fn icon_colour_follows_theme() {
    let tmp = tempfile::tempdir().unwrap();
    let site = Site::new(tmp.path()).unwrap();
    let mut store = site.shell();

    assert_eq!(store.state().theme.icon_fill(), "black");
    store.toggle_theme();
    assert_eq!(store.state().theme, ThemeMode::Dark);
    assert_eq!(store.state().theme.icon_fill(), "white");
}
