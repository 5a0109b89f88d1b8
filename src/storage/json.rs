use super::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;

/// The persisted contact document: one JSON object mapping each name to
/// its `{"phone", "email"}` record.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStorage for JsonStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contact document yet");
                return Ok(Contacts::new());
            }
            Err(e) => return Err(e.into()),
        };

        // serde_json will give an error if data is empty
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Contacts::new());
        }

        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = to_pretty_json(contacts)?;
        replace_with(&self.path, |file| {
            file.write_all(&data)?;
            Ok(())
        })?;

        debug!(path = %self.path.display(), contacts = contacts.len(), "contact document written");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Writes a sibling temp file and renames it over `path`, so readers only
/// ever see the previous document or the complete new one. A failed write
/// drops the temp file and leaves `path` untouched.
fn replace_with<F>(path: &Path, write: F) -> Result<(), AppError>
where
    F: FnOnce(&mut NamedTempFile) -> Result<(), AppError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    write(&mut file)?;
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    data.push(b'\n');
    Ok(data)
}
