use super::*;
use std::cell::RefCell;

/// Keeps the last saved contact book in process memory only.
#[derive(Debug, Default)]
pub struct MemStorage {
    data: RefCell<Contacts>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Contacts) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStorage for MemStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
