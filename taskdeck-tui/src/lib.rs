//! TaskDeck TUI — dashboard front end for a project/assessment workspace.
//!
//! Pages:
//! 1. Dashboard — project details card, completion gauge, activity sparkline, team list
//! 2. Timeline — chronological milestones with status markers
//! 3. Table — assessment roster; Enter opens the identity-verification dialog
//! 4. Drafting — document drafts with stage badges
//!
//! The interactive core is two components: [`dialog::OverlayDialog`] (blocking
//! key/value panel with a dismiss contract) and [`nav::PageNavigator`]
//! (current-page highlight plus a collapsible quick menu).

pub mod app;
pub mod dialog;
pub mod input;
pub mod nav;
pub mod persistence;
pub mod theme;
pub mod ui;
