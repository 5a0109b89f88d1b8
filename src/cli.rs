pub mod command;
pub mod run;

pub use run::run_app;

use crate::prelude::{AppError, ContactRecord, ContactStore};

pub fn display_contact(name: &str, record: &ContactRecord) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}",
        name,
        record.phone(),
        record.email()
    )
}

pub fn listing_line(position: usize, name: &str, record: &ContactRecord) -> String {
    format!(
        "{position:>3}. {:<20} {:15} {:^30}",
        name,
        record.phone(),
        record.email()
    )
}

/// Prints close matches to stderr before a not-found error is reported.
pub fn hint_similar(store: &ContactStore, name: &str, err: AppError) -> AppError {
    if matches!(err, AppError::NotFound(_)) {
        let similar = store.suggest(name);
        if !similar.is_empty() {
            eprintln!("Did you mean: {}?", similar.join(", "));
        }
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_contact_details() {
        let record = ContactRecord::new("555-0142", "");

        assert_eq!(
            display_contact("Bob", &record),
            "Name: Bob\nPhone: 555-0142\nEmail: —"
        );
    }

    #[test]
    fn listing_line_is_numbered_and_aligned() {
        let record = ContactRecord::new("555-0100", "a@x.com");
        let line = listing_line(1, "Alice", &record);

        assert!(line.starts_with("  1. Alice"));
        assert!(line.contains("555-0100"));
        assert!(line.contains("a@x.com"));
    }
}
