pub use crate::cli::{command, run_app};
pub use crate::config::{Config, DEFAULT_CONTACTS_FILE, StorageMedium};
pub use crate::domain::{
    contact::{self, ContactRecord, EMAIL_PLACEHOLDER},
    search::fuzzy_suggestions,
    store::{ContactStore, ImportSummary},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStorage, Contacts, json::JsonStorage, memory::MemStorage, port::CsvStorage,
};
