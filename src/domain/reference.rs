use std::{fmt, fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use super::common::{Displayable, Identified, NamedEntity};
use crate::errors::Result;

/// A jetty point, package, or add-on fetched from the booking backend.
/// Used only to turn identifiers into names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntity {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub name: String,
}

/// The backend emits numeric ids; hand-written catalogs tend to quote them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl ReferenceEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Identified for ReferenceEntity {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for ReferenceEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for ReferenceEntity {
    fn display_label(&self) -> String {
        format!("[{}] {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    JettyPoint,
    Package,
    AddOn,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReferenceKind::JettyPoint => "jetty point",
            ReferenceKind::Package => "package",
            ReferenceKind::AddOn => "add-on",
        };
        f.write_str(label)
    }
}

/// Read-only lookup tables supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCatalog {
    #[serde(default)]
    pub jetty_points: Vec<ReferenceEntity>,
    #[serde(default)]
    pub packages: Vec<ReferenceEntity>,
    #[serde(default)]
    pub add_ons: Vec<ReferenceEntity>,
}

impl ReferenceCatalog {
    /// Catalog used when no catalog file has been provided.
    pub fn builtin() -> Self {
        Self {
            jetty_points: vec![
                ReferenceEntity::new("1", "Marang Jetty"),
                ReferenceEntity::new("2", "Kuala Terengganu Jetty"),
            ],
            packages: vec![
                ReferenceEntity::new("1", "Private Boat Charter"),
                ReferenceEntity::new("2", "Sharing Boat Charter"),
            ],
            add_ons: vec![
                ReferenceEntity::new("1", "Life jacket & Safety equipment"),
                ReferenceEntity::new("2", "Snorkeling in water garden"),
                ReferenceEntity::new("3", "Boat tour around Pulau Kapas"),
            ],
        }
    }

    /// Loads a catalog from `path`, falling back to [`ReferenceCatalog::builtin`]
    /// when the file does not exist.
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "catalog file missing; using built-in catalog");
            return Ok(Self::builtin());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn entries(&self, kind: ReferenceKind) -> &[ReferenceEntity] {
        match kind {
            ReferenceKind::JettyPoint => &self.jetty_points,
            ReferenceKind::Package => &self.packages,
            ReferenceKind::AddOn => &self.add_ons,
        }
    }

    pub fn find(&self, kind: ReferenceKind, id: &str) -> Option<&ReferenceEntity> {
        let id = id.trim();
        self.entries(kind).iter().find(|entity| entity.id == id)
    }

    /// Resolves an identifier to its display name, or `None` if unknown.
    pub fn name_of(&self, kind: ReferenceKind, id: &str) -> Option<&str> {
        self.find(kind, id).map(|entity| entity.name.as_str())
    }

    pub fn contains(&self, kind: ReferenceKind, id: &str) -> bool {
        self.find(kind, id).is_some()
    }
}
