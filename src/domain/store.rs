use crate::domain::contact::{ContactRecord, validate_required};
use crate::domain::search::{fuzzy_suggestions, name_contains};
use crate::errors::AppError;
use crate::storage::{ContactStorage, Contacts};
use tracing::{debug, info, warn};

/// In-memory contact book mirrored to a storage medium after every change.
pub struct ContactStore {
    mem: Contacts,
    storage: Box<dyn ContactStorage>,
}

/// Outcome of a bulk import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl ContactStore {
    /// Loads the contact book from `storage`.
    ///
    /// A missing or malformed document yields an empty book. Entries without
    /// a name or phone are dropped. Only failures to read the medium at all
    /// are returned.
    pub fn open(storage: Box<dyn ContactStorage>) -> Result<Self, AppError> {
        let mem = match storage.load() {
            Ok(contacts) => retain_valid(contacts, storage.get_medium()),
            Err(AppError::Json(err)) => {
                warn!(
                    medium = storage.get_medium(),
                    error = %err,
                    "contact document is malformed, starting with an empty contact book"
                );
                Contacts::new()
            }
            Err(err) => return Err(err),
        };

        info!(
            medium = storage.get_medium(),
            contacts = mem.len(),
            "contacts loaded"
        );

        Ok(Self { mem, storage })
    }

    /// Writes the whole contact book to storage.
    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    /// Inserts `name`, replacing any contact already stored under it.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<(), AppError> {
        validate_required(name, phone)?;

        let name = name.trim().to_string();
        let previous = self
            .mem
            .insert(name.clone(), ContactRecord::new(phone, email));
        let replaced = previous.is_some();

        let key = name.clone();
        self.persist_or_undo(move |mem| restore(mem, key, previous))?;

        debug!(name = %name, replaced, "contact added");
        Ok(())
    }

    /// Rewrites the contact selected as `old_name`, renaming it when
    /// `new_name` differs.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        phone: &str,
        email: &str,
    ) -> Result<(), AppError> {
        if old_name.trim().is_empty() {
            return Err(AppError::NoSelection);
        }
        if !self.mem.contains_key(old_name) {
            return Err(not_found(old_name));
        }
        validate_required(new_name, phone)?;

        let new_name = new_name.trim().to_string();
        let renamed = new_name != old_name;

        let old_record = if renamed {
            self.mem.remove(old_name)
        } else {
            None
        };
        let displaced = self
            .mem
            .insert(new_name.clone(), ContactRecord::new(phone, email));

        let old_key = old_name.to_string();
        let new_key = new_name.clone();
        self.persist_or_undo(move |mem| {
            restore(mem, new_key, displaced);
            if let Some(record) = old_record {
                mem.insert(old_key, record);
            }
        })?;

        debug!(old_name, new_name = %new_name, renamed, "contact updated");
        Ok(())
    }

    /// Removes `name` and returns the record it held.
    pub fn delete(&mut self, name: &str) -> Result<ContactRecord, AppError> {
        let removed = self.mem.remove(name).ok_or_else(|| not_found(name))?;

        let key = name.to_string();
        let undo = removed.clone();
        self.persist_or_undo(move |mem| {
            mem.insert(key, undo);
        })?;

        debug!(name, "contact deleted");
        Ok(removed)
    }

    pub fn find(&self, name: &str) -> Result<&ContactRecord, AppError> {
        self.mem.get(name).ok_or_else(|| not_found(name))
    }

    /// Names containing `query`, ignoring case, in ascending order. An empty
    /// query yields every name.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let needle = query.to_lowercase();
        self.mem
            .keys()
            .map(String::as_str)
            .filter(move |name| name_contains(name, &needle))
    }

    /// Every name in ascending lexicographic order.
    pub fn list_names(&self) -> Vec<&str> {
        self.mem.keys().map(String::as_str).collect()
    }

    /// Stored names resembling `name`, closest first.
    pub fn suggest(&self, name: &str) -> Vec<&str> {
        fuzzy_suggestions(name, self.mem.keys().map(String::as_str))
    }

    /// Merges every valid contact from `source` into the book, saving once.
    pub fn import_from(&mut self, source: &dyn ContactStorage) -> Result<ImportSummary, AppError> {
        let incoming = source.load()?;
        let snapshot = self.mem.clone();
        let mut summary = ImportSummary::default();

        for (name, record) in incoming {
            if validate_required(&name, record.phone()).is_err() {
                summary.skipped += 1;
                continue;
            }
            self.mem.insert(name.trim().to_string(), record);
            summary.imported += 1;
        }

        if summary.imported > 0 {
            self.persist_or_undo(move |mem| *mem = snapshot)?;
        }

        info!(
            medium = source.get_medium(),
            imported = summary.imported,
            skipped = summary.skipped,
            "contacts imported"
        );
        Ok(summary)
    }

    /// Writes the whole book to `target` and returns how many contacts it holds.
    pub fn export_to(&self, target: &dyn ContactStorage) -> Result<usize, AppError> {
        target.save(&self.mem)?;

        info!(
            medium = target.get_medium(),
            contacts = self.mem.len(),
            "contacts exported"
        );
        Ok(self.mem.len())
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> {
        self.mem.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn storage(&self) -> &dyn ContactStorage {
        self.storage.as_ref()
    }

    // Memory must never run ahead of what storage confirmed.
    fn persist_or_undo<F>(&mut self, undo: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Contacts),
    {
        if let Err(err) = self.save() {
            undo(&mut self.mem);
            return Err(err);
        }
        Ok(())
    }
}

fn restore(mem: &mut Contacts, name: String, previous: Option<ContactRecord>) {
    match previous {
        Some(record) => {
            mem.insert(name, record);
        }
        None => {
            mem.remove(&name);
        }
    }
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Contact '{name}'"))
}

fn retain_valid(mut contacts: Contacts, medium: &str) -> Contacts {
    contacts.retain(|name, record| {
        let keep = !name.trim().is_empty() && record.has_phone();
        if !keep {
            warn!(medium, name = %name, "dropping stored contact without a name or phone");
        }
        keep
    });
    contacts
}
