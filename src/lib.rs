//! Contact address book kept as a single JSON blob in a key-value store.
//!
//! ```no_run
//! use rusty_addressbook::prelude::*;
//!
//! let mut book = ContactStore::new(Box::new(MemStorage::new()));
//! book.add_contact(Contact::new("Ana".into(), "Diaz".into(), "111".into()))?;
//! assert!(book.find_contact_by_name("ana")?.is_some());
//! # Ok::<(), AppError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
pub mod store;
