//! TaskDeck Model — display data consumed by the dashboard front end.
//!
//! Everything here is plain passed-through data: the UI renders these values
//! verbatim and never derives, scores, or recomputes them. The crate provides:
//! - Typed project/assessment display records (serde)
//! - A TOML loader for user-supplied data files
//! - An embedded sample workspace so the binary runs with no file

pub mod load;
pub mod project;
pub mod sample;

pub use load::{load, DataError};
pub use project::{
    AssessmentRecord, Draft, DraftStage, Milestone, MilestoneStatus, ProjectData, ProjectSummary,
};
pub use sample::sample_project;
