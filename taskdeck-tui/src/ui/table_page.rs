//! Page 3 — Table: assessment roster with cursor; Enter opens verification.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let records = &app.data.records;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(format!("{} members ", records.len()), theme::accent()),
        Span::styled(" [j/k]move [Enter]verify", theme::muted()),
    ]));
    lines.push(Line::from(""));

    if records.is_empty() {
        lines.push(Line::from(Span::styled(
            "No assessment records.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            "{:>7}  {:<18} {:<20} {:<9} {:>3} {:>6}  {:<8}",
            "ID", "Name", "Role", "Region", "Yrs", "Score", "Status"
        ),
        theme::accent_bold(),
    )));

    // Visible rows, keeping the cursor on screen.
    let visible_height = area.height.saturating_sub(3) as usize;
    let start = if visible_height > 0 && app.table.cursor >= visible_height {
        app.table.cursor + 1 - visible_height
    } else {
        0
    };
    let end = (start + visible_height.max(1)).min(records.len());

    for (i, record) in records.iter().enumerate().take(end).skip(start) {
        let is_cursor = i == app.table.cursor;

        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let score_style = if is_cursor {
            style
        } else {
            theme::score_style(record.score)
        };
        let status_style = if is_cursor {
            style
        } else {
            theme::verified_style(record.verified)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>7}  ", record.member_id), style),
            Span::styled(format!("{:<18} ", truncate(&record.name, 18)), style),
            Span::styled(format!("{:<20} ", truncate(&record.role, 20)), style),
            Span::styled(format!("{:<9} ", truncate(&record.region, 9)), style),
            Span::styled(format!("{:>3} ", record.years_experience), style),
            Span::styled(format!("{:>6.1}  ", record.score), score_style),
            Span::styled(format!("{:<8}", record.status_label()), status_style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("Jane", 18), "Jane");
    }

    #[test]
    fn truncate_marks_long_strings() {
        assert_eq!(truncate("abcdefgh", 5), "abcd.");
    }
}
