use super::*;
use crate::domain::contact::{Contact, ValidationReq};
use log::{debug, error, warn};

/// Key under which the whole collection is stored.
pub const STORAGE_KEY: &str = "contacts";

/// What to do when the backend or the stored blob misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and carry on: bad reads become an empty collection,
    /// failed writes are dropped.
    #[default]
    Lenient,
    /// Hand storage and decode failures back to the caller.
    Strict,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: u64,
    pub skipped: u64,
}

/// Address book over a key-value backend.
///
/// Every call re-reads the full collection from the backend; mutating calls
/// write the full collection back. Nothing is cached between calls.
pub struct ContactStore {
    storage: Box<dyn Storage>,
    policy: ErrorPolicy,
}

impl ContactStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self::with_policy(storage, ErrorPolicy::default())
    }

    pub fn with_policy(storage: Box<dyn Storage>, policy: ErrorPolicy) -> Self {
        Self { storage, policy }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Reads and decodes the collection, surfacing every failure.
    pub fn load_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let raw = self.storage.read(STORAGE_KEY).map_err(as_storage_error)?;

        match raw {
            None => Ok(Vec::new()),
            Some(data) => serde_json::from_str::<Vec<Contact>>(&data)
                .map_err(|e| AppError::MalformedData(e.to_string())),
        }
    }

    /// Serializes and writes the whole collection.
    pub fn save_contacts(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        self.storage
            .write(STORAGE_KEY, &data)
            .map_err(as_storage_error)
    }

    pub fn get_contacts(&self) -> Result<Vec<Contact>, AppError> {
        match self.load_contacts() {
            Ok(contacts) => Ok(contacts),
            Err(e) if self.policy == ErrorPolicy::Lenient && e.is_storage_fault() => {
                warn!("reading contacts failed, using an empty list: {}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        contact.validate()?;

        let mut contacts = self.get_contacts()?;

        if contact.already_exist(&contacts) {
            return Err(AppError::Duplicate(ValidationReq::duplicate_req()));
        }

        debug!("adding contact {} {}", contact.name, contact.last_name);
        contacts.push(contact);
        self.persist(&contacts)
    }

    /// First contact, in insertion order, whose name or last name contains
    /// `name` ignoring case. An empty query finds nothing without reading.
    pub fn find_contact_by_name(&self, name: &str) -> Result<Option<Contact>, AppError> {
        if name.is_empty() {
            return Ok(None);
        }

        let query = name.to_lowercase();
        let found = self
            .get_contacts()?
            .into_iter()
            .find(|c| c.matches_query(&query));

        Ok(found)
    }

    /// Removes every entry equal to `contact`. Returns whether anything went.
    pub fn delete_contact(&mut self, contact: &Contact) -> Result<bool, AppError> {
        let contacts = self.get_contacts()?;
        let initial_len = contacts.len();

        let remaining: Vec<Contact> = contacts.into_iter().filter(|c| c != contact).collect();

        if remaining.len() < initial_len {
            debug!(
                "removing {} matching entries for {} {}",
                initial_len - remaining.len(),
                contact.name,
                contact.last_name
            );
            self.persist(&remaining)?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Replaces the first entry equal to `old` with `new`.
    /// `new` is stored as given: no field check, no duplicate check.
    pub fn update_contact(&mut self, old: &Contact, new: &Contact) -> Result<bool, AppError> {
        let mut contacts = self.get_contacts()?;

        match contacts.iter().position(|c| c == old) {
            Some(index) => {
                contacts[index] = new.clone();
                self.persist(&contacts)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear_all_contacts(&mut self) -> Result<(), AppError> {
        match self.storage.delete(STORAGE_KEY).map_err(as_storage_error) {
            Ok(()) => Ok(()),
            Err(e) if self.policy == ErrorPolicy::Lenient => {
                error!("clearing contacts failed: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Adds records one by one. Records rejected by validation or the
    /// duplicate rule are skipped; storage failures still follow the policy.
    pub fn import_contacts<I>(&mut self, records: I) -> Result<ImportSummary, AppError>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut summary = ImportSummary::default();

        for record in records {
            match self.add_contact(record) {
                Ok(()) => summary.added += 1,
                Err(e @ (AppError::Validation(_) | AppError::Duplicate(_))) => {
                    warn!("skipping imported record: {}", e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }

    fn persist(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        match self.save_contacts(contacts) {
            Ok(()) => Ok(()),
            Err(e) if self.policy == ErrorPolicy::Lenient && e.is_storage_fault() => {
                error!("saving contacts failed, changes were not stored: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

// Backends may report plain I/O errors; give them one name here.
fn as_storage_error(err: AppError) -> AppError {
    match err {
        AppError::Io(e) => AppError::Storage(e.to_string()),
        other => other,
    }
}
