use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DraftState;

/// Lifecycle of a booking once it reaches the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Incomplete,
    Pending,
    Complete,
    Cancelled,
}

/// The finished draft as handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquirySubmission {
    pub reference: Uuid,
    pub status: BookingStatus,
    pub submitted_at: DateTime<Utc>,
    pub draft: DraftState,
}

impl InquirySubmission {
    pub fn new(draft: DraftState) -> Self {
        Self {
            reference: Uuid::new_v4(),
            status: BookingStatus::Pending,
            submitted_at: Utc::now(),
            draft,
        }
    }

    /// Short, customer-facing form of the reference (first UUID group, upper case).
    pub fn short_reference(&self) -> String {
        self.reference
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_submission_is_pending() {
        let submission = InquirySubmission::new(DraftState::default());
        assert_eq!(submission.status, BookingStatus::Pending);
        assert_eq!(submission.short_reference().len(), 8);
    }

    #[test]
    fn status_uses_backend_spelling() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Incomplete).unwrap(),
            "\"INCOMPLETE\""
        );
    }
}
