//! Top-level UI layout — navigation bar, active page, status bar, overlays.

pub mod dashboard_page;
pub mod drafting_page;
pub mod nav_bar;
pub mod overlays;
pub mod status_bar;
pub mod table_page;
pub mod timeline_page;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::nav::Page;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: nav bar + page area + 1-line status bar. The nav area grows to
    // hold the quick menu while it is expanded.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_bar::height(&app.nav)),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let nav_area = chunks[0];
    let page_area = chunks[1];
    let status_area = chunks[2];

    nav_bar::render(f, nav_area, app);
    draw_page(f, page_area, app);
    status_bar::render(f, status_area, app);

    // Draw overlays on top. `Overlay::None` draws nothing: a closed dialog
    // has zero footprint.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, page_area),
        Overlay::Dialog(dialog) => overlays::render_dialog(f, page_area, dialog),
        Overlay::None => {}
    }
}

/// Draw the active page with its border.
fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    let page = app.current_page;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {} [{}] ", page.label(), page.index() + 1))
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match page {
        Page::Dashboard => dashboard_page::render(f, inner, app),
        Page::Timeline => timeline_page::render(f, inner, app),
        Page::Table => table_page::render(f, inner, app),
        Page::Drafting => drafting_page::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
