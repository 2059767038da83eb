use std::sync::{Mutex, MutexGuard};

use crate::{domain::DraftState, errors::Result};

use super::{decode_draft, DraftStore, DEFAULT_STORAGE_KEY};

/// In-process draft slot.
///
/// Holds the serialized JSON rather than the value so that round trips go
/// through the same encoding as the file backend.
#[derive(Debug)]
pub struct MemoryDraftStore {
    key: String,
    slot: Mutex<Option<String>>,
}

impl Default for MemoryDraftStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl MemoryDraftStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: Mutex::new(None),
        }
    }

    /// Places raw content in the slot, bypassing serialization.
    pub fn put_raw(&self, raw: impl Into<String>) {
        *self.slot() = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DraftStore for MemoryDraftStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn save(&self, draft: &DraftState) -> Result<()> {
        let json = serde_json::to_string(draft)?;
        *self.slot() = Some(json);
        Ok(())
    }

    fn load(&self) -> Option<DraftState> {
        let raw = self.slot().clone()?;
        decode_draft(&self.key, &raw)
    }

    fn clear(&self) -> Result<()> {
        self.slot().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Step;

    #[test]
    fn round_trip_preserves_draft() {
        let store = MemoryDraftStore::default();
        let mut draft = DraftState::default();
        draft.customer_info.city = "Marang".into();
        draft.active_section = Step::Reservation;
        draft.other_options.alternative_date1 = Some("2026-12-02".into());
        store.save(&draft).unwrap();
        assert_eq!(store.load(), Some(draft));
    }

    #[test]
    fn partial_content_is_absent() {
        let store = MemoryDraftStore::default();
        store.put_raw(r#"{"activeSection":1}"#);
        assert_eq!(store.load(), None);
        store.put_raw(r#"{"customerInfo":{},"activeSection":9}"#);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn out_of_range_passenger_count_is_absent() {
        let store = MemoryDraftStore::default();
        let mut draft = DraftState::default();
        draft.reservation_details.passenger_count = 4;
        store.save(&draft).unwrap();
        let Some(raw) = store.raw() else {
            panic!("slot should hold the saved draft");
        };

        for count in ["0", "21", "255"] {
            store.put_raw(raw.replace("\"passengerCount\":4", &format!("\"passengerCount\":{count}")));
            assert_eq!(store.load(), None, "passengerCount {count} should not load");
        }
        store.put_raw(raw.replace("\"passengerCount\":4", "\"passengerCount\":20"));
        assert_eq!(store.load().map(|d| d.reservation_details.passenger_count), Some(20));
    }

    #[test]
    fn slot_is_shared_across_threads() {
        let store = MemoryDraftStore::default();
        std::thread::scope(|scope| {
            scope.spawn(|| {
                let mut draft = DraftState::default();
                draft.customer_info.city = "Kuala Terengganu".into();
                store.save(&draft).unwrap();
            });
        });
        assert_eq!(
            store.load().map(|d| d.customer_info.city),
            Some("Kuala Terengganu".to_string())
        );
    }

    #[test]
    fn clear_twice_leaves_slot_empty() {
        let store = MemoryDraftStore::new("k");
        store.save(&DraftState::default()).unwrap();
        store.clear().unwrap();
        assert!(store.raw().is_none());
        store.clear().unwrap();
        assert!(store.raw().is_none());
        assert_eq!(store.load(), None);
    }
}
