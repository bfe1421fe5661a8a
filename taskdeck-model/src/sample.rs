//! Embedded sample workspace so the dashboard runs with no data file.

use chrono::NaiveDate;

use crate::project::{
    AssessmentRecord, Draft, DraftStage, Milestone, MilestoneStatus, ProjectData, ProjectSummary,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Demo project: a mid-flight infrastructure assessment engagement.
pub fn sample_project() -> ProjectData {
    ProjectData {
        project: ProjectSummary {
            name: "Harbor District Revamp".into(),
            client: "Northwind Municipal".into(),
            lead: "Jane Doe".into(),
            phase: "Execution".into(),
            start_date: ymd(2026, 1, 12),
            due_date: ymd(2026, 9, 30),
            completion: 0.42,
        },
        activity: vec![2, 4, 3, 6, 5, 9, 7, 8, 6, 10, 9, 12],
        milestones: vec![
            Milestone {
                date: ymd(2026, 1, 19),
                title: "Kickoff & scope sign-off".into(),
                owner: "Jane Doe".into(),
                status: MilestoneStatus::Done,
            },
            Milestone {
                date: ymd(2026, 2, 16),
                title: "Site surveys complete".into(),
                owner: "Omar Haddad".into(),
                status: MilestoneStatus::Done,
            },
            Milestone {
                date: ymd(2026, 4, 6),
                title: "Structural assessment report".into(),
                owner: "Priya Nair".into(),
                status: MilestoneStatus::Active,
            },
            Milestone {
                date: ymd(2026, 6, 1),
                title: "Draft remediation plan".into(),
                owner: "Liu Wen".into(),
                status: MilestoneStatus::Planned,
            },
            Milestone {
                date: ymd(2026, 9, 14),
                title: "Final review & handover".into(),
                owner: "Jane Doe".into(),
                status: MilestoneStatus::Planned,
            },
        ],
        records: vec![
            AssessmentRecord {
                member_id: "m-1042".into(),
                name: "Jane Doe".into(),
                role: "Project Lead".into(),
                region: "Americas".into(),
                years_experience: 12,
                score: 9.1,
                verified: true,
            },
            AssessmentRecord {
                member_id: "m-1187".into(),
                name: "Omar Haddad".into(),
                role: "Field Surveyor".into(),
                region: "EMEA".into(),
                years_experience: 6,
                score: 8.2,
                verified: true,
            },
            AssessmentRecord {
                member_id: "m-1203".into(),
                name: "Priya Nair".into(),
                role: "Structural Engineer".into(),
                region: "APAC".into(),
                years_experience: 9,
                score: 8.8,
                verified: false,
            },
            AssessmentRecord {
                member_id: "m-1244".into(),
                name: "Liu Wen".into(),
                role: "Planning Analyst".into(),
                region: "APAC".into(),
                years_experience: 3,
                score: 6.4,
                verified: false,
            },
            AssessmentRecord {
                member_id: "m-1260".into(),
                name: "Sam Okafor".into(),
                role: "Drafting Specialist".into(),
                region: "EMEA".into(),
                years_experience: 5,
                score: 7.3,
                verified: true,
            },
        ],
        drafts: vec![
            Draft {
                title: "Quay wall survey notes".into(),
                author: "Omar Haddad".into(),
                stage: DraftStage::Approved,
                updated: ymd(2026, 2, 20),
            },
            Draft {
                title: "Load assessment — pier 4".into(),
                author: "Priya Nair".into(),
                stage: DraftStage::InReview,
                updated: ymd(2026, 3, 28),
            },
            Draft {
                title: "Remediation plan outline".into(),
                author: "Liu Wen".into(),
                stage: DraftStage::Outline,
                updated: ymd(2026, 4, 2),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_populated() {
        let data = sample_project();
        assert!(!data.activity.is_empty());
        assert!(!data.milestones.is_empty());
        assert!(!data.records.is_empty());
        assert!(!data.drafts.is_empty());
    }

    #[test]
    fn sample_milestones_are_chronological() {
        let data = sample_project();
        for pair in data.milestones.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn sample_completion_in_range() {
        let c = sample_project().project.completion;
        assert!((0.0..=1.0).contains(&c));
    }
}
