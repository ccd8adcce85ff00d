use crate::{
    helper,
    prelude::{
        AppError, Contact, ContactStore, ErrorPolicy,
        command::{Cli, Commands},
        store::{
            StorageMediums, parse_storage_type,
            storage_port::{export_contacts_to_csv, read_contacts_from_csv},
        },
    },
};
use clap::Parser;
use log::info;

pub fn run_app() -> Result<(), AppError> {
    helper::load_env();
    let cli = Cli::parse();

    helper::init_logger(&cli.log_level)?;

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(medium, Some(cli.storage_dir.as_str()))?;
    let policy = if cli.strict {
        ErrorPolicy::Strict
    } else {
        ErrorPolicy::Lenient
    };

    info!(
        "using {} storage at {} ({:?})",
        medium.is_which(),
        cli.storage_dir,
        policy
    );

    let mut book = ContactStore::with_policy(storage, policy);

    match cli.command {
        Commands::Add {
            name,
            last_name,
            phone,
        } => {
            book.add_contact(Contact::new(name, last_name, phone))?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts = book.get_contacts()?;

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", helper::listing_format(i + 1, c));
            }
            Ok(())
        }

        Commands::Find { name } => {
            match book.find_contact_by_name(&name)? {
                Some(c) => println!("{}", helper::listing_format(1, &c)),
                None => println!("Couldn't find a contact matching {name}"),
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            name,
            last_name,
            phone,
            new_name,
            new_last_name,
            new_phone,
        } => {
            let old = Contact::new(name, last_name, phone);
            let new = Contact::new(
                new_name.unwrap_or_else(|| old.name.clone()),
                new_last_name.unwrap_or_else(|| old.last_name.clone()),
                new_phone.unwrap_or_else(|| old.phone.clone()),
            );

            // The store trusts updates as given; the command line does not.
            new.validate()?;

            if book.update_contact(&old, &new)? {
                println!("Contact updated successfully");
            } else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
            }
            Ok(())
        }

        // Delete Contact
        Commands::Delete {
            name,
            last_name,
            phone,
        } => {
            let contact = Contact::new(name, last_name, phone);

            if book.delete_contact(&contact)? {
                println!("Contact deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
            }
            Ok(())
        }

        Commands::Clear => {
            book.clear_all_contacts()?;
            println!("All contacts cleared");
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, records) = read_contacts_from_csv(src.as_deref())?;
            let summary = book.import_contacts(records)?;

            println!(
                "Successfully imported {} contacts from {:?}.",
                summary.added, path
            );
            if summary.skipped > 0 {
                println!(
                    "Skipped {} records (missing fields or already in the book).",
                    summary.skipped
                );
            }
            Ok(())
        }

        Commands::Export { des } => {
            let contacts = book.get_contacts()?;
            let (path, total) = export_contacts_to_csv(&contacts, des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
