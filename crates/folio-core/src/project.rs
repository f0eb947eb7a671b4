use crate::error::Result;
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

pub const DEFAULT_IMAGE: &str = "/images/project.jpg";

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// One portfolio project. Field names match the camelCase the front-end reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsDoc {
    pub projects: Vec<Project>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input for `ProjectsDoc::add`, as gathered from the prompt sequence.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: String,
}

impl ProjectsDoc {
    pub fn load(content_dir: &Path) -> Result<Self> {
        io::load_json(&paths::projects_path(content_dir))
    }

    pub fn save(&self, content_dir: &Path) -> Result<()> {
        io::save_json(&paths::projects_path(content_dir), self)
    }

    /// Append a project. The id is the 1-based position at append time; ids
    /// are never reassigned (there is no delete or reorder operation).
    pub fn add(&mut self, new: NewProject) -> &Project {
        let project = Project {
            id: self.projects.len() as u32 + 1,
            title: new.title,
            category: new.category,
            description: new.description,
            long_description: new.long_description,
            image: if new.image.is_empty() {
                DEFAULT_IMAGE.to_string()
            } else {
                new.image
            },
            technologies: split_tokens(&new.technologies),
            features: Vec::new(),
            live_url: new.live_url,
            github_url: new.github_url,
            featured: parse_flag(&new.featured),
            extra: Map::new(),
        };
        self.projects.push(project);
        self.projects.last().unwrap()
    }
}

/// Split a comma-separated field into trimmed tokens, dropping empties from
/// stray commas.
pub fn split_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A yes/no answer: case-insensitive `y` is true, anything else (including
/// blank) is false.
pub fn parse_flag(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
