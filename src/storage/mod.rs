pub mod json_backend;
pub mod memory;

use crate::{domain::DraftState, errors::Result};

/// Storage key used by the inquiry form unless configuration overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "rhumuda_inquiry_form";

/// Whether `key` is made only of ASCII letters, digits, `_` and `-`.
///
/// The key names the slot file as-is, so anything else is refused rather
/// than rewritten and two distinct keys never share a slot.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub(crate) fn invalid_key_message(key: &str) -> String {
    format!("storage key `{key}` may only contain letters, digits, `_` and `-`")
}

/// Durable slot holding the wizard's in-progress draft.
///
/// This is the only seam through which drafts reach storage. `load` never
/// fails: absent or unreadable content is reported as `None`.
pub trait DraftStore: Send + Sync {
    /// Key identifying the slot.
    fn key(&self) -> &str;

    /// Overwrites the slot with `draft`.
    fn save(&self, draft: &DraftState) -> Result<()>;

    /// Reads the slot, treating missing or malformed content as absent.
    fn load(&self) -> Option<DraftState>;

    /// Removes the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<()>;

    /// Whether the slot currently holds a readable draft.
    fn has_draft(&self) -> bool {
        self.load().is_some()
    }
}

impl<T: DraftStore + ?Sized> DraftStore for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn save(&self, draft: &DraftState) -> Result<()> {
        (**self).save(draft)
    }

    fn load(&self) -> Option<DraftState> {
        (**self).load()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

impl<T: DraftStore + ?Sized> DraftStore for Box<T> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn save(&self, draft: &DraftState) -> Result<()> {
        (**self).save(draft)
    }

    fn load(&self) -> Option<DraftState> {
        (**self).load()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Parses slot content, logging and discarding anything unreadable.
pub(crate) fn decode_draft(key: &str, raw: &str) -> Option<DraftState> {
    match serde_json::from_str::<DraftState>(raw) {
        Ok(draft) => Some(draft),
        Err(err) => {
            tracing::warn!(key, error = %err, "stored draft is unreadable; starting fresh");
            None
        }
    }
}

pub use json_backend::JsonDraftStore;
pub use memory::MemoryDraftStore;
