//! Theme tokens for the TaskDeck TUI.
//!
//! Harbor palette: cool accents on a dark terminal background. Style choices
//! are pure functions of component state so every call site composes the same
//! way: pick a selector, get a `Style`.

use ratatui::style::{Color, Modifier, Style};

use taskdeck_model::{DraftStage, MilestoneStatus};

/// Sea-glass teal: focus, highlights, values.
pub const ACCENT: Color = Color::Rgb(64, 224, 208);
/// Spring green: verified, done, healthy.
pub const POSITIVE: Color = Color::Rgb(80, 250, 123);
/// Coral red: attention-negative states.
pub const NEGATIVE: Color = Color::Rgb(255, 85, 85);
/// Amber: pending, warnings.
pub const WARNING: Color = Color::Rgb(255, 184, 108);
/// Soft violet: secondary info.
pub const NEUTRAL: Color = Color::Rgb(189, 147, 249);
/// Slate blue: hints, labels, disabled.
pub const MUTED: Color = Color::Rgb(98, 114, 164);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Style for a navigation entry given whether it is the active page.
pub fn nav_entry(active: bool) -> Style {
    if active {
        accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        muted()
    }
}

/// Border style for the page frame.
pub fn panel_border() -> Style {
    muted()
}

/// Title style for the page frame.
pub fn panel_title() -> Style {
    accent_bold()
}

/// Marker/label style for a milestone status.
pub fn milestone_style(status: MilestoneStatus) -> Style {
    match status {
        MilestoneStatus::Done => positive(),
        MilestoneStatus::Active => accent(),
        MilestoneStatus::Planned => muted(),
    }
}

/// Badge style for a draft stage.
pub fn stage_style(stage: DraftStage) -> Style {
    match stage {
        DraftStage::Outline => muted(),
        DraftStage::InReview => warning(),
        DraftStage::Approved => positive(),
    }
}

/// Banded style for an assessment score (0–10 display scale).
pub fn score_style(score: f64) -> Style {
    match score {
        s if s >= 9.0 => positive(),
        s if s >= 7.5 => accent(),
        s if s >= 6.0 => neutral(),
        s if s >= 4.0 => muted(),
        _ => warning(),
    }
}

/// Style for a verification status flag.
pub fn verified_style(verified: bool) -> Style {
    if verified {
        positive()
    } else {
        warning()
    }
}

/// Optional presentation attributes a host may pass through to a component's
/// root block. Unset entries fall back to the component's own computed
/// attributes; the component applies whatever the host supplied unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelDecor {
    pub title: Option<String>,
    pub border_style: Option<Style>,
    pub title_style: Option<Style>,
}

impl PanelDecor {
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(default)
    }

    pub fn border_style_or(&self, default: Style) -> Style {
        self.border_style.unwrap_or(default)
    }

    pub fn title_style_or(&self, default: Style) -> Style {
        self.title_style.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entry_active_is_distinct() {
        assert_ne!(nav_entry(true), nav_entry(false));
        assert!(nav_entry(true).add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn score_bands() {
        assert_eq!(score_style(9.4), positive());
        assert_eq!(score_style(8.0), accent());
        assert_eq!(score_style(6.5), neutral());
        assert_eq!(score_style(5.0), muted());
        assert_eq!(score_style(2.0), warning());
    }

    #[test]
    fn stage_styles() {
        assert_eq!(stage_style(DraftStage::Approved), positive());
        assert_eq!(stage_style(DraftStage::InReview), warning());
        assert_eq!(stage_style(DraftStage::Outline), muted());
    }

    #[test]
    fn decor_defaults_pass_through() {
        let decor = PanelDecor::default();
        assert_eq!(decor.title_or("Verify Identity"), "Verify Identity");
        assert_eq!(decor.border_style_or(accent()), accent());
        assert_eq!(decor.title_style_or(accent_bold()), accent_bold());
    }

    #[test]
    fn decor_overrides_win() {
        let decor = PanelDecor {
            title: Some("Custom".into()),
            border_style: Some(negative()),
            title_style: Some(warning()),
        };
        assert_eq!(decor.title_or("Verify Identity"), "Custom");
        assert_eq!(decor.border_style_or(accent()), negative());
        assert_eq!(decor.title_style_or(accent_bold()), warning());
    }
}
