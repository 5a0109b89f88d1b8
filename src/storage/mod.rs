pub mod json;
pub mod memory;
pub mod port;

use crate::prelude::{AppError, ContactRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Contact records keyed by their exact, case-sensitive name.
pub type Contacts = BTreeMap<String, ContactRecord>;

/// A medium the whole contact book can be read from and written to.
///
/// `save` always replaces the medium's previous content in full.
pub trait ContactStorage {
    fn load(&self) -> Result<Contacts, AppError>;

    fn save(&self, contacts: &Contacts) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
