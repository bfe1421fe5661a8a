//! Keyboard input dispatch — overlays → global keys → navigator → page keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Overlay};
use crate::dialog::{verification_dialog, DialogEvent};
use crate::nav::{NavAction, Page};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Dialog(dialog) => {
            if let Some(DialogEvent::Close) = dialog.handle_key(key) {
                app.close_overlay();
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Quit.
    if key.code == KeyCode::Char('q') {
        app.running = false;
        return;
    }

    // 3. Navigator keys (global).
    match app.nav.handle_key(key, app.current_page) {
        Some(NavAction::Navigate(page)) => {
            app.navigate(page);
            return;
        }
        Some(NavAction::MenuUpdated) => return,
        None => {}
    }

    // 4. Page-specific keys.
    match app.current_page {
        Page::Dashboard => {} // display only
        Page::Timeline => handle_timeline_key(app, key),
        Page::Table => handle_table_key(app, key),
        Page::Drafting => handle_drafting_key(app, key),
    }
}

fn handle_timeline_key(app: &mut AppState, key: KeyEvent) {
    let count = app.data.milestones.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.timeline.scroll + 1 < count {
                app.timeline.scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.timeline.scroll = app.timeline.scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    let count = app.data.records.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.table.cursor + 1 < count {
                app.table.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table.cursor = app.table.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(record) = app.data.records.get(app.table.cursor) {
                app.open_dialog(verification_dialog(record));
            }
        }
        _ => {}
    }
}

fn handle_drafting_key(app: &mut AppState, key: KeyEvent) {
    let count = app.data.drafts.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.drafting.cursor + 1 < count {
                app.drafting.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.drafting.cursor = app.drafting.cursor.saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use taskdeck_model::{sample_project, ProjectData};

    fn app() -> AppState {
        AppState::new(sample_project(), PathBuf::from("."))
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn digit_switches_page() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_page, Page::Timeline);
    }

    #[test]
    fn welcome_dismisses_on_any_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.overlay, Overlay::None);
        // The key is consumed by the overlay, not forwarded.
        assert_eq!(app.current_page, Page::Dashboard);
    }

    #[test]
    fn table_enter_opens_verification_dialog_for_cursor_row() {
        let mut app = app();
        app.navigate(Page::Table);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        let expected = app.data.records[1].name.clone();
        match &app.overlay {
            Overlay::Dialog(d) => {
                assert_eq!(d.title, "Verify Identity");
                assert_eq!(d.fields[0].value, expected);
            }
            other => panic!("expected dialog, got {other:?}"),
        }
    }

    #[test]
    fn dialog_esc_closes_and_consumes() {
        let mut app = app();
        app.navigate(Page::Table);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.overlay, Overlay::Dialog(_)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
        // Still on the Table page; Esc only dismissed the dialog.
        assert_eq!(app.current_page, Page::Table);
    }

    #[test]
    fn dialog_swallows_navigation_keys() {
        let mut app = app();
        app.navigate(Page::Table);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));
        // Key went to the dialog (ignored), not the navigator.
        assert_eq!(app.current_page, Page::Table);
        assert!(matches!(app.overlay, Overlay::Dialog(_)));
    }

    #[test]
    fn enter_on_empty_table_opens_nothing() {
        let mut app = AppState::new(
            ProjectData {
                records: Vec::new(),
                ..sample_project()
            },
            PathBuf::from("."),
        );
        app.navigate(Page::Table);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn cursors_clamp_to_data_bounds() {
        let mut app = app();
        app.navigate(Page::Table);
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.table.cursor, app.data.records.len() - 1);
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('k'));
        }
        assert_eq!(app.table.cursor, 0);
    }

    #[test]
    fn expanded_menu_enter_navigates_without_opening_dialog() {
        let mut app = app();
        app.navigate(Page::Table);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        // Menu consumed Enter: we navigated, no dialog opened, menu stays up.
        assert_eq!(app.current_page, Page::Timeline);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.nav.menu_expanded());
    }
}
