use crate::error::Result;
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The singleton profile document.
///
/// The front-end stores more under `personal` (phone, avatar) and at the top
/// level (`social`, `about`) than this tool edits; flattened maps carry those
/// fields through a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One edit pass over the scalar profile fields. `None` keeps the existing
/// value; `Some` replaces it.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl Profile {
    pub fn load(content_dir: &Path) -> Result<Self> {
        io::load_json(&paths::profile_path(content_dir))
    }

    pub fn save(&self, content_dir: &Path) -> Result<()> {
        io::save_json(&paths::profile_path(content_dir), self)
    }

    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.personal.name = name;
        }
        if let Some(title) = update.title {
            self.personal.title = title;
        }
        if let Some(email) = update.email {
            self.personal.email = email;
        }
        if let Some(location) = update.location {
            self.personal.location = location;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
