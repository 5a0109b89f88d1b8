use crate::prelude::{AppError, ContactStorage, JsonStorage, MemStorage};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Json,
    Mem,
}

impl StorageMedium {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMedium::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }
}

impl FromStr for StorageMedium {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMedium::Json),
            "mem" => Ok(StorageMedium::Mem),
            other => Err(AppError::Config(format!(
                "'{other}' is not a recognized storage medium (json, mem)"
            ))),
        }
    }
}

/// Where the contact book lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub medium: StorageMedium,
    pub path: PathBuf,
}

impl Config {
    pub fn new(medium: &str, path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            medium: medium.parse()?,
            path: path.into(),
        })
    }

    pub fn open_storage(&self) -> Box<dyn ContactStorage> {
        match self.medium {
            StorageMedium::Json => Box::new(JsonStorage::new(&self.path)),
            StorageMedium::Mem => Box::new(MemStorage::new()),
        }
    }
}
