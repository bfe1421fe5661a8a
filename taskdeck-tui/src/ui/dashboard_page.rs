//! Page 1 — Dashboard: project details card, completion gauge, activity
//! sparkline, team list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Sparkline};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_details_card(f, cards[0], app);
    render_progress_card(f, cards[1], app);
    render_team(f, rows[1], app);
}

fn render_details_card(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" Project ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let p = &app.data.project;
    let mut lines: Vec<Line> = Vec::new();
    detail_line(&mut lines, "Name", &p.name);
    detail_line(&mut lines, "Client", &p.client);
    detail_line(&mut lines, "Lead", &p.lead);
    detail_line(&mut lines, "Phase", &p.phase);
    detail_line(&mut lines, "Start", &p.start_date.format("%b %d %Y").to_string());
    detail_line(&mut lines, "Due", &p.due_date.format("%b %d %Y").to_string());

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_progress_card(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let completion = app.data.project.completion.clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border())
                .title(" Completion ")
                .title_style(theme::accent_bold()),
        )
        .gauge_style(theme::positive())
        .ratio(completion)
        .label(format!("{:.0}%", completion * 100.0));
    f.render_widget(gauge, chunks[0]);

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border())
                .title(" Weekly Activity ")
                .title_style(theme::accent_bold()),
        )
        .style(theme::accent())
        .data(&app.data.activity);
    f.render_widget(sparkline, chunks[1]);
}

fn render_team(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" Team ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.data.records.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No team records.", theme::muted())),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for record in &app.data.records {
        lines.push(Line::from(vec![
            Span::styled(format!(" [{:<2}] ", record.initials()), theme::neutral()),
            Span::styled(record.name.clone(), theme::accent()),
            Span::styled(
                format!(" — {} ({})", record.role, record.region),
                theme::muted(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn detail_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>8}: ", label), theme::muted()),
        Span::styled(value.to_string(), theme::accent()),
    ]));
}
