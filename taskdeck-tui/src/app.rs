//! Application state — single-owner, main-thread only.
//!
//! All UI state lives here: the host-owned current page, the navigator's
//! local menu flag, per-page cursors, and the overlay slot. The display data
//! itself is read-only for the whole session.

use std::path::PathBuf;

use taskdeck_model::ProjectData;

use crate::dialog::OverlayDialog;
use crate::nav::{Page, PageNavigator};

/// Status message severity for the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top. A dialog is visible exactly while
/// it occupies this slot; `None` has zero render footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Dialog(OverlayDialog),
}

/// Table page state.
#[derive(Debug, Default)]
pub struct TablePageState {
    pub cursor: usize,
}

/// Timeline page state.
#[derive(Debug, Default)]
pub struct TimelinePageState {
    pub scroll: usize,
}

/// Drafting page state.
#[derive(Debug, Default)]
pub struct DraftingPageState {
    pub cursor: usize,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub current_page: Page,
    pub nav: PageNavigator,
    pub running: bool,

    // Display data (read-only)
    pub data: ProjectData,

    // Page states
    pub table: TablePageState,
    pub timeline: TimelinePageState,
    pub drafting: DraftingPageState,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(data: ProjectData, state_path: PathBuf) -> Self {
        Self {
            current_page: Page::Dashboard,
            nav: PageNavigator::new(),
            running: true,
            data,
            table: TablePageState::default(),
            timeline: TimelinePageState::default(),
            drafting: DraftingPageState::default(),
            overlay: Overlay::None,
            status_message: None,
            state_path,
        }
    }

    /// The host side of the navigator contract: apply a requested page
    /// change. Idempotent when the page is already current.
    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    /// The host side of the dialog contract: show a dialog.
    pub fn open_dialog(&mut self, dialog: OverlayDialog) {
        self.overlay = Overlay::Dialog(dialog);
    }

    /// The host side of the dialog contract: react to a close event.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
