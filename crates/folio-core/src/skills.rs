use crate::error::{FolioError, Result};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsDoc {
    pub categories: Vec<SkillCategory>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillsDoc {
    pub fn load(content_dir: &Path) -> Result<Self> {
        io::load_json(&paths::skills_path(content_dir))
    }

    pub fn save(&self, content_dir: &Path) -> Result<()> {
        io::save_json(&paths::skills_path(content_dir), self)
    }

    /// Append a skill to the category at `index` (1-based, matching the menu).
    /// An out-of-range index is a validation error, not a silent no-op.
    pub fn add_skill(&mut self, index: usize, name: String, level: u32) -> Result<()> {
        let count = self.categories.len();
        if index == 0 || index > count {
            return Err(FolioError::CategoryOutOfRange { index, count });
        }
        self.categories[index - 1].skills.push(Skill {
            name,
            level,
            extra: Map::new(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
