use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    domain::DraftState,
    errors::{InquiryError, Result},
    utils::paths::{ensure_dir, tmp_path, write_atomic, PathResolver},
};

use super::{
    decode_draft, invalid_key_message, is_valid_storage_key, DraftStore, DEFAULT_STORAGE_KEY,
};

const DRAFT_EXTENSION: &str = "json";

/// Filesystem-backed draft slot: one JSON file per storage key under
/// `<base>/drafts/`.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    key: String,
    path: PathBuf,
}

impl JsonDraftStore {
    /// Opens the slot for `key` below `root` (or the resolved data directory).
    ///
    /// A blank key selects the default slot. Keys outside `[A-Za-z0-9_-]` are
    /// refused.
    pub fn new(root: Option<PathBuf>, key: Option<&str>) -> Result<Self> {
        let key = key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY)
            .to_string();
        if !is_valid_storage_key(&key) {
            return Err(InquiryError::Storage(invalid_key_message(&key)));
        }
        let base = PathResolver::resolve_base(root);
        let drafts_dir = PathResolver::drafts_dir_in(&base);
        ensure_dir(&drafts_dir)?;
        let path = drafts_dir.join(format!("{key}.{DRAFT_EXTENSION}"));
        Ok(Self { key, path })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for JsonDraftStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn save(&self, draft: &DraftState) -> Result<()> {
        let json = serde_json::to_string_pretty(draft)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(key = %self.key, step = draft.active_section.index(), "draft saved");
        Ok(())
    }

    fn load(&self) -> Option<DraftState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "draft slot unreadable");
                return None;
            }
        };
        decode_draft(&self.key, &raw)
    }

    fn clear(&self) -> Result<()> {
        for path in [self.path.clone(), tmp_path(&self.path)] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        tracing::debug!(key = %self.key, "draft cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Step;

    fn store_in(dir: &Path) -> JsonDraftStore {
        JsonDraftStore::new(Some(dir.to_path_buf()), None).unwrap()
    }

    #[test]
    fn slot_file_is_named_after_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.key(), DEFAULT_STORAGE_KEY);
        assert_eq!(
            store.path(),
            dir.path().join("drafts").join("rhumuda_inquiry_form.json")
        );
    }

    #[test]
    fn unsafe_keys_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        for key in ["../evil key", "a?b", "drafts/other"] {
            let opened = JsonDraftStore::new(Some(dir.path().to_path_buf()), Some(key));
            assert!(opened.is_err(), "`{key}` should be refused");
        }
        let blank = JsonDraftStore::new(Some(dir.path().to_path_buf()), Some("  ")).unwrap();
        assert_eq!(blank.key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn lookalike_keys_get_separate_slots() {
        let dir = tempfile::tempdir().unwrap();
        let dashed = JsonDraftStore::new(Some(dir.path().to_path_buf()), Some("a-b")).unwrap();
        let underscored = JsonDraftStore::new(Some(dir.path().to_path_buf()), Some(" a_b ")).unwrap();
        assert_eq!(underscored.key(), "a_b");
        assert_ne!(dashed.path(), underscored.path());
        assert_eq!(
            dashed.path().file_name().and_then(|name| name.to_str()),
            Some("a-b.json")
        );
    }

    #[test]
    fn save_then_load_returns_same_draft() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut draft = DraftState::default();
        draft.active_section = Step::OtherOptions;
        draft.reservation_details.add_on_ids.insert("2".into());
        store.save(&draft).unwrap();
        assert_eq!(store.load(), Some(draft));
        assert!(!tmp_path(store.path()).exists());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "{\"customerInfo\": 42").unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.has_draft());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&DraftState::default()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }
}
