use super::*;

use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const EXPORT_FILE_NAME: &str = "exported.csv";

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    name: String,
    phone: String,
    #[serde(default)]
    email: String,
}

/// `name,phone,email` spreadsheet used to import and export contacts.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    /// A directory resolves to `exported.csv` inside it; any extension other
    /// than `.csv` is rejected.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let mut path = path.into();

        if path.is_dir() {
            path = path.join(EXPORT_FILE_NAME);
        } else if path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation("File must be a .csv file".to_string()));
        }

        Ok(Self {
            medium: "csv".to_string(),
            path,
        })
    }
}

impl ContactStorage for CsvStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        // short rows fall back to the serde defaults instead of failing the file
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let mut contacts = Contacts::new();

        for result in reader.deserialize() {
            let row: CsvRow = result?;
            contacts.insert(
                row.name.trim().to_string(),
                ContactRecord::new(&row.phone, &row.email),
            );
        }

        debug!(path = %self.path.display(), rows = contacts.len(), "csv read");
        Ok(contacts)
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = Writer::from_path(&self.path)?;

        for (name, record) in contacts {
            writer.serialize(CsvRow {
                name: name.clone(),
                phone: record.phone().to_string(),
                email: record.editable_email().to_string(),
            })?;
        }

        writer.flush()?;

        debug!(path = %self.path.display(), rows = contacts.len(), "csv written");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
