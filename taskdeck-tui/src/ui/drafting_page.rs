//! Page 4 — Drafting: document drafts with stage badges.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let drafts = &app.data.drafts;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(format!("{} drafts ", drafts.len()), theme::accent()),
        Span::styled(" [j/k]move", theme::muted()),
    ]));
    lines.push(Line::from(""));

    if drafts.is_empty() {
        lines.push(Line::from(Span::styled(
            "No drafts in progress.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    for (i, draft) in drafts.iter().enumerate() {
        let is_cursor = i == app.drafting.cursor;
        let title_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::accent()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(" [{:<9}] ", draft.stage.label()),
                theme::stage_style(draft.stage),
            ),
            Span::styled(draft.title.clone(), title_style),
            Span::styled(
                format!("  {} · {}", draft.author, draft.updated.format("%b %d %Y")),
                theme::muted(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
