use crate::error::Result;
use crate::io;
use crate::paths;
use crate::project::split_tokens;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDoc {
    pub experiences: Vec<Experience>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: String,
}

impl ExperienceDoc {
    pub fn load(content_dir: &Path) -> Result<Self> {
        io::load_json(&paths::experience_path(content_dir))
    }

    pub fn save(&self, content_dir: &Path) -> Result<()> {
        io::save_json(&paths::experience_path(content_dir), self)
    }

    /// Insert an experience at the front of the list. The display convention
    /// is most-recent-first, so the last entry added in a session ends up
    /// first. The id is the count at insert time plus one, never reassigned.
    pub fn add(&mut self, new: NewExperience) -> &Experience {
        let experience = Experience {
            id: self.experiences.len() as u32 + 1,
            company: new.company,
            position: new.position,
            duration: new.duration,
            location: new.location,
            description: new.description,
            responsibilities: new.responsibilities,
            technologies: split_tokens(&new.technologies),
            extra: Map::new(),
        };
        self.experiences.insert(0, experience);
        &self.experiences[0]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
