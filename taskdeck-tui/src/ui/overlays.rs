//! Overlay widgets — welcome panel and the key/value dialog.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::dialog::OverlayDialog;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to TaskDeck ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Switch pages with 1-4 or Tab",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Press m for the quick menu",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. On the Table page, press Enter to verify a member",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// The overlay dialog: centered panel with a titled header carrying the
/// dismiss hint, one row per field in insertion order, and a footer dismiss
/// control. Host decor overrides the computed title/styles where set.
pub fn render_dialog(f: &mut Frame, area: Rect, dialog: &OverlayDialog) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(dialog.decor.border_style_or(theme::accent()))
        .title(format!(" {} [Esc]close ", dialog.decor.title_or(&dialog.title)))
        .title_style(dialog.decor.title_style_or(theme::accent_bold()));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for field in &dialog.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>12}: ", field.label), theme::muted()),
            Span::styled(field.value.clone(), theme::accent()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  [Enter] Close", theme::muted())));

    f.render_widget(Paragraph::new(lines), inner);
}
