use crate::config::DEFAULT_CONTACTS_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(
        long = "storage",
        env = "STORAGE_CHOICE",
        default_value_t = String::from("json"),
        global = true
    )]
    pub storage_choice: String,

    /// Path of the JSON contact document
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_CONTACTS_FILE, global = true)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, replacing any contact with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Edit an existing contact
    /// Provide the current contact name followed by the fields you wish to change
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Rename the contact
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address (pass "" to clear it)
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Show one contact
    View {
        /// Name of contact to show
        #[arg(long)]
        name: String,
    },
    /// List contacts sorted by name
    List,
    /// Search contact names, ignoring case
    Search {
        /// Part of the name to look for (lists everyone when omitted)
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path (or directory) for the exported .csv file
        #[arg(short, long)]
        des: PathBuf,
    },
}
