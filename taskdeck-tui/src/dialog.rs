//! Overlay dialog — blocking key/value panel with a dismiss contract.
//!
//! The dialog is host-owned data rendered fresh every frame; it keeps no
//! state between renders and its only outward effect is the close event.

use crossterm::event::{KeyCode, KeyEvent};

use taskdeck_model::AssessmentRecord;

use crate::theme::PanelDecor;

/// One labeled row in the dialog body. Labels need not be unique; duplicates
/// render as duplicate rows in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogField {
    pub label: String,
    pub value: String,
}

impl DialogField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Event surfaced to the host; closing the dialog is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Close,
}

/// A centered overlay summarizing an ordered set of labeled values.
///
/// Shown while the host holds it in `Overlay::Dialog`; absent from that slot
/// it has zero render footprint. Empty `fields` is valid and renders an
/// empty body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayDialog {
    pub title: String,
    pub fields: Vec<DialogField>,
    /// Passthrough presentation attributes merged onto the computed block.
    pub decor: PanelDecor,
}

impl OverlayDialog {
    pub fn new(title: impl Into<String>, fields: Vec<DialogField>) -> Self {
        Self {
            title: title.into(),
            fields,
            decor: PanelDecor::default(),
        }
    }

    pub fn with_decor(mut self, decor: PanelDecor) -> Self {
        self.decor = decor;
        self
    }

    /// Dismiss contract: the header control (`Esc`) and the footer control
    /// (`Enter`) each map to exactly one [`DialogEvent::Close`]. Every other
    /// key is ignored.
    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(DialogEvent::Close),
            _ => None,
        }
    }
}

/// Build the identity-verification dialog for a roster record.
pub fn verification_dialog(record: &AssessmentRecord) -> OverlayDialog {
    OverlayDialog::new(
        "Verify Identity",
        vec![
            DialogField::new("Name", record.name.as_str()),
            DialogField::new("Member ID", record.member_id.as_str()),
            DialogField::new("Role", record.role.as_str()),
            DialogField::new("Region", record.region.as_str()),
            DialogField::new("Experience", format!("{} years", record.years_experience)),
            DialogField::new("Score", format!("{:.1}", record.score)),
            DialogField::new("Status", record.status_label()),
        ],
    )
}
