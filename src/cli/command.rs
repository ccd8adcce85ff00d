use crate::store::STORAGE_DIR;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rusty-addressbook", version, about = "Simple Contact Address Book")]
pub struct Cli {
    /// Storage choice (mem, file) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Directory holding the file storage
    #[arg(long, env = "STORAGE_DIR", default_value_t = String::from(STORAGE_DIR))]
    pub storage_dir: String,

    /// Fail on storage errors instead of logging and carrying on
    #[arg(long, env = "STRICT_STORAGE")]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// List contacts in the order they were added
    List,
    /// Find the first contact whose name or last name contains the text
    Find {
        /// Text to look for, case is ignored
        #[arg(long)]
        name: String,
    },
    /// Edit an existing contact
    /// Provide current name, last name and number exactly as stored
    /// followed by optional arguments of as many field you wish to update
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Contact current last name
        #[arg(long)]
        last_name: String,

        /// Contact current phone number
        #[arg(long)]
        phone: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update last name
        #[arg(long)]
        new_last_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },
    /// Delete a contact
    /// Name, last name and number must match exactly
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Last name of contact to delete
        #[arg(long)]
        last_name: String,

        /// Contact number to delete
        #[arg(long)]
        phone: String,
    },
    /// Remove every contact
    Clear,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
