//! Top navigation — page entries with active highlight, plus the quick menu.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::nav::{entries, PageNavigator, PAGE_COUNT};
use crate::theme;

/// Rows the nav area needs: the bordered bar, plus one row per entry while
/// the quick menu is expanded.
pub fn height(nav: &PageNavigator) -> u16 {
    if nav.menu_expanded() {
        3 + PAGE_COUNT as u16
    } else {
        3
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let (bar_area, menu_area) = if app.nav.menu_expanded() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    render_bar(f, bar_area, app);
    if let Some(menu_area) = menu_area {
        render_menu(f, menu_area, app);
    }
}

fn render_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" TaskDeck ")
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (page, is_active) in entries(app.current_page) {
        spans.push(Span::styled(
            format!(" {}:{} ", page.index() + 1, page.label()),
            theme::nav_entry(is_active),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  [m]enu [q]uit", theme::muted()));

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Compact entry list for the expanded quick menu. Same entries, same
/// active-marking rule; Enter selects the cursor row.
fn render_menu(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, (page, is_active)) in entries(app.current_page).enumerate() {
        let is_cursor = i == app.nav.menu_cursor();
        let base = theme::nav_entry(is_active);
        let style = if is_cursor {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        };
        let pointer = if is_cursor { "▸" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("  {pointer} "), theme::accent()),
            Span::styled(format!("{}. {}", i + 1, page.label()), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
