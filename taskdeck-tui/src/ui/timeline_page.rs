//! Page 2 — Timeline: chronological milestones with status markers.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let milestones = &app.data.milestones;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("[j/k]scroll", theme::muted())));
    lines.push(Line::from(""));

    if milestones.is_empty() {
        lines.push(Line::from(Span::styled(
            "No milestones recorded.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    let start = app.timeline.scroll.min(milestones.len().saturating_sub(1));
    let end = (start + visible_height).min(milestones.len());

    for milestone in &milestones[start..end] {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", milestone.status.marker()),
                theme::milestone_style(milestone.status),
            ),
            Span::styled(
                format!("{}  ", milestone.date.format("%b %d %Y")),
                theme::muted(),
            ),
            Span::styled(milestone.title.clone(), theme::accent()),
            Span::styled(format!("  — {}", milestone.owner), theme::muted()),
            Span::styled(
                format!("  [{}]", milestone.status.label()),
                theme::milestone_style(milestone.status),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
