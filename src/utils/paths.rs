use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "CHARTER_INQUIRY_HOME";

const DEFAULT_DIR_NAME: &str = "charter-inquiry";
const FALLBACK_DIR_NAME: &str = ".charter-inquiry";
const DRAFTS_DIR: &str = "drafts";
const CONFIG_DIR: &str = "config";
const OUTBOX_DIR: &str = "outbox";
const CATALOG_FILE: &str = "catalog.json";

/// Resolves the on-disk layout below a single base directory.
pub struct PathResolver;

impl PathResolver {
    /// Base directory: `$CHARTER_INQUIRY_HOME`, then the platform data dir,
    /// then `./.charter-inquiry`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::data_dir()
            .map(|dir| dir.join(DEFAULT_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR_NAME))
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn drafts_dir_in(base: &Path) -> PathBuf {
        base.join(DRAFTS_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn outbox_dir_in(base: &Path) -> PathBuf {
        base.join(OUTBOX_DIR)
    }

    pub fn catalog_file_in(base: &Path) -> PathBuf {
        base.join(CATALOG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Path used to stage a write before it is renamed over `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.tmp"),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` next to `path` and renames it into place.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_keeps_original_extension() {
        let path = Path::new("/data/drafts/form.json");
        assert_eq!(tmp_path(path), PathBuf::from("/data/drafts/form.json.tmp"));
        assert_eq!(tmp_path(Path::new("state")), PathBuf::from("state.tmp"));
    }

    #[test]
    fn write_atomic_creates_parent_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("value.json");
        write_atomic(&target, "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert!(!tmp_path(&target).exists());
    }

    #[test]
    fn resolver_layout_is_relative_to_base() {
        let base = Path::new("/srv/inquiry");
        assert_eq!(PathResolver::drafts_dir_in(base), base.join("drafts"));
        assert_eq!(PathResolver::outbox_dir_in(base), base.join("outbox"));
        assert_eq!(
            PathResolver::catalog_file_in(base),
            base.join("catalog.json")
        );
    }
}
