use crate::{
    cli::{display_contact, hint_similar, listing_line},
    prelude::{
        AppError, Config, ContactStore, CsvStorage,
        command::{Cli, Commands},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // .env may provide STORAGE_CHOICE / CONTACTS_FILE for clap's env fallbacks
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::new(&cli.storage_choice, &cli.file)?;

    debug!(
        medium = config.medium.is_which(),
        path = %config.path.display(),
        "opening contact book"
    );

    if config.medium.is_mem() {
        eprintln!("Note: in-memory storage, changes are discarded on exit");
    }

    let mut store = ContactStore::open(config.open_storage())?;

    match cli.command {
        Commands::Add { name, phone, email } => {
            store.add(&name, &phone, &email.unwrap_or_default())?;

            println!("Contact '{}' added successfully", name.trim());
            Ok(())
        }

        // Omitted fields keep their current value
        Commands::Edit {
            name,
            new_name,
            phone,
            email,
        } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::NoSelection);
            }

            let current = store
                .find(name)
                .map_err(|e| hint_similar(&store, name, e))?
                .clone();

            let new_name = new_name.unwrap_or_else(|| name.to_string());
            let phone = phone.unwrap_or_else(|| current.phone().to_string());
            let email = email.unwrap_or_else(|| current.editable_email().to_string());

            store.update(name, &new_name, &phone, &email)?;

            println!("Contact '{}' updated successfully", new_name.trim());
            Ok(())
        }

        Commands::Delete { name } => {
            let name = name.trim();
            store
                .delete(name)
                .map_err(|e| hint_similar(&store, name, e))?;

            println!("Contact '{}' deleted successfully", name);
            Ok(())
        }

        Commands::View { name } => {
            let name = name.trim();
            let record = store.find(name).map_err(|e| hint_similar(&store, name, e))?;

            println!("{}", display_contact(name, record));
            Ok(())
        }

        Commands::List => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, (name, record)) in store.iter().enumerate() {
                println!("{}", listing_line(i + 1, name, record));
            }
            Ok(())
        }

        Commands::Search { query } => {
            let query = query.unwrap_or_default();
            let names: Vec<&str> = store.search(&query).collect();

            if names.is_empty() {
                println!("No contact matches '{}'", query);
                return Ok(());
            }

            for (i, name) in names.iter().enumerate() {
                println!("{:>3}. {}", i + 1, name);
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let source = CsvStorage::new(src)?;
            let summary = store.import_from(&source)?;

            println!(
                "Successfully imported {} contacts ({} skipped) from {}.",
                summary.imported,
                summary.skipped,
                source.path.display()
            );
            Ok(())
        }

        Commands::Export { des } => {
            let target = CsvStorage::new(des)?;
            let total = store.export_to(&target)?;

            println!(
                "Successfully exported {} contacts to {}.",
                total,
                target.path.display()
            );
            Ok(())
        }
    }
}
