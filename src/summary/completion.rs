use crate::{
    domain::{DraftState, InquirySubmission},
    storage::DraftStore,
};

/// Where the caller should go once an inquiry is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSignal {
    NavigateHome,
}

/// Post-submit clean-up: builds the hand-off value and clears the stored
/// draft once the user confirms.
pub struct CompletionFlow<S: DraftStore> {
    store: S,
}

impl<S: DraftStore> CompletionFlow<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Wraps the finished draft for the submission collaborator.
    pub fn submission(&self, draft: &DraftState) -> InquirySubmission {
        InquirySubmission::new(draft.clone())
    }

    /// Clears the stored draft (best-effort) and signals navigation away.
    pub fn confirm(&self) -> CompletionSignal {
        match self.store.clear() {
            Ok(()) => tracing::info!(key = self.store.key(), "inquiry completed; draft cleared"),
            Err(err) => {
                tracing::warn!(key = self.store.key(), error = %err, "could not clear draft after completion")
            }
        }
        CompletionSignal::NavigateHome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::BookingStatus, storage::MemoryDraftStore};

    #[test]
    fn confirm_clears_store_and_navigates_home() {
        let store = MemoryDraftStore::default();
        let mut draft = DraftState::default();
        draft.reservation_details.package_id = "1".into();
        store.save(&draft).unwrap();

        let flow = CompletionFlow::new(&store);
        let submission = flow.submission(&draft);
        assert_eq!(submission.draft, draft);
        assert_eq!(submission.status, BookingStatus::Pending);

        assert_eq!(flow.confirm(), CompletionSignal::NavigateHome);
        assert_eq!(store.load(), None);
        assert_eq!(flow.confirm(), CompletionSignal::NavigateHome);
    }
}
