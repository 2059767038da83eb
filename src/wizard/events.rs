use crate::domain::{ClearSelection, FieldId, Step};

/// Discrete user inputs accepted by [`InquiryWizard::apply`](super::InquiryWizard::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Previous,
    FieldChange { field: FieldId, value: String },
    /// The field lost focus; from now on edits are validated immediately.
    Touch(FieldId),
    ToggleAddOn { id: String, selected: bool },
    ClearSections(ClearSelection),
}

/// Result of a step navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Validation failed; the wizard stays on `step` with errors set.
    Rejected { step: Step, errors: usize },
    /// Nothing to do (for example `previous` on the first step).
    Unchanged(Step),
    /// The last step validated; the draft may be handed to submission.
    ReadyToSubmit,
}

impl Transition {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Transition::Rejected { .. })
    }
}

/// Result of merging a single field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Value stored; `error` holds the validator message if the field is
    /// touched and invalid.
    Applied { error: Option<String> },
    /// Value could not be represented; the stored value is unchanged.
    Rejected { error: String },
}

impl FieldUpdate {
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldUpdate::Applied { error } => error.as_deref(),
            FieldUpdate::Rejected { error } => Some(error),
        }
    }
}

/// What happened to durable storage after a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Nothing,
    /// Some sections were reset and the remaining draft persisted.
    Partial,
    /// Every section was reset and the storage slot removed.
    Removed,
}

/// Combined outcome returned by [`InquiryWizard::apply`](super::InquiryWizard::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Transition(Transition),
    Field(FieldUpdate),
    AddOn { changed: bool },
    Cleared(ClearOutcome),
}
