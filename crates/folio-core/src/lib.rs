pub mod backup;
pub mod error;
pub mod experience;
pub mod inventory;
pub mod io;
pub mod paths;
pub mod profile;
pub mod project;
pub mod skills;

pub use error::{FolioError, Result};
