//! Project display records — the data the dashboard pages render.
//!
//! All fields are supplied by the data source (sample set or TOML file) and
//! displayed as-is. Empty collections are valid and render as empty lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Root of the display data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    pub project: ProjectSummary,
    /// Weekly activity counts, oldest first (sparkline input).
    #[serde(default)]
    pub activity: Vec<u64>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub records: Vec<AssessmentRecord>,
    #[serde(default)]
    pub drafts: Vec<Draft>,
}

/// Headline facts shown on the Dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub client: String,
    pub lead: String,
    pub phase: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Completion fraction in 0.0..=1.0, supplied (not computed here).
    pub completion: f64,
}

/// A single timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub date: NaiveDate,
    pub title: String,
    pub owner: String,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Done,
    Active,
    Planned,
}

impl MilestoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "Done",
            MilestoneStatus::Active => "Active",
            MilestoneStatus::Planned => "Planned",
        }
    }

    /// Single-cell marker for timeline rows.
    pub fn marker(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "●",
            MilestoneStatus::Active => "◆",
            MilestoneStatus::Planned => "○",
        }
    }
}

/// One roster row on the Table page; also the source of the verification
/// dialog's fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub member_id: String,
    pub name: String,
    pub role: String,
    pub region: String,
    pub years_experience: u8,
    pub score: f64,
    pub verified: bool,
}

impl AssessmentRecord {
    pub fn status_label(&self) -> &'static str {
        if self.verified {
            "Verified"
        } else {
            "Pending"
        }
    }

    /// Up-to-two-letter initials badge, e.g. "Jane Doe" → "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// One document row on the Drafting page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub stage: DraftStage,
    pub updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStage {
    Outline,
    InReview,
    Approved,
}

impl DraftStage {
    pub fn label(self) -> &'static str {
        match self {
            DraftStage::Outline => "Outline",
            DraftStage::InReview => "In Review",
            DraftStage::Approved => "Approved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> AssessmentRecord {
        AssessmentRecord {
            member_id: "m-1".into(),
            name: name.into(),
            role: "Analyst".into(),
            region: "EMEA".into(),
            years_experience: 4,
            score: 7.5,
            verified: false,
        }
    }

    #[test]
    fn initials_two_words() {
        assert_eq!(record("Jane Doe").initials(), "JD");
    }

    #[test]
    fn initials_single_word() {
        assert_eq!(record("Cher").initials(), "C");
    }

    #[test]
    fn initials_extra_words_truncate_to_two() {
        assert_eq!(record("Ana Maria Silva").initials(), "AM");
    }

    #[test]
    fn initials_empty_name() {
        assert_eq!(record("").initials(), "");
    }

    #[test]
    fn status_label_tracks_verified() {
        let mut r = record("Jane Doe");
        assert_eq!(r.status_label(), "Pending");
        r.verified = true;
        assert_eq!(r.status_label(), "Verified");
    }

    #[test]
    fn stage_labels() {
        assert_eq!(DraftStage::Outline.label(), "Outline");
        assert_eq!(DraftStage::InReview.label(), "In Review");
        assert_eq!(DraftStage::Approved.label(), "Approved");
    }
}
