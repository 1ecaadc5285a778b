//! Skill vocabulary and per-role skill checklists, loaded once at startup.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a vocabulary or role-catalog source cannot be read or parsed.
/// Fatal at startup: starting with a silently empty vocabulary would degrade
/// every downstream match without anyone noticing.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("cannot read skill source '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed skill source '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The ordered set of tracked skills.
///
/// Entries are lowercased and deduplicated on load, preserving first
/// occurrence. Order does not affect counting but does give callers a
/// stable tie-break when they sort demand counts.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Loads the vocabulary from a JSON array of strings.
    /// An empty array is a valid (degenerate) vocabulary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let raw: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                VocabularyError::Malformed {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        Ok(Self::from_raw(raw))
    }

    /// Builds a vocabulary from raw entries. Used directly by tests that
    /// need a custom vocabulary without touching the filesystem.
    pub fn from_raw(raw: Vec<String>) -> Self {
        Self {
            skills: normalize_skills(raw),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// One role's fixed, ordered skill checklist. Static configuration data,
/// never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSkillSet {
    pub role: String,
    pub skills: Vec<String>,
}

/// All configured roles, in catalog order.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleSkillSet>,
}

impl RoleCatalog {
    /// Loads the catalog from a JSON array of `{role, skills}` objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let raw: Vec<RoleSkillSet> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                VocabularyError::Malformed {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_raw(roles: Vec<RoleSkillSet>) -> Self {
        let roles = roles
            .into_iter()
            .map(|r| RoleSkillSet {
                role: r.role,
                skills: normalize_skills(r.skills),
            })
            .collect();
        Self { roles }
    }

    /// Case-insensitive role lookup by name.
    pub fn get(&self, role: &str) -> Option<&RoleSkillSet> {
        self.roles.iter().find(|r| r.role.eq_ignore_ascii_case(role))
    }

    pub fn roles(&self) -> &[RoleSkillSet] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Lowercases, trims, and drops duplicate entries preserving first
/// occurrence. Duplicates would double-count demand, so they are removed
/// defensively even though the seed files are expected to be clean.
fn normalize_skills(raw: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}
