use super::*;
use serde::{Deserialize, Serialize};

/// A single address book entry.
///
/// Equality is structural: two contacts are the same entry only when name,
/// last name and phone all match exactly. That is what update and delete
/// use to locate an entry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub last_name: String,
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn fields_req() -> String {
        "all contact fields are required".to_string()
    }

    pub fn duplicate_req() -> String {
        "a contact with that name and last name already exists".to_string()
    }
}

impl Contact {
    pub fn new(name: String, last_name: String, phone: String) -> Self {
        Contact {
            name,
            last_name,
            phone,
        }
    }

    /// Every field must be present. Whitespace counts as present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() || self.last_name.is_empty() || self.phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::fields_req()));
        }
        Ok(())
    }

    /// Same person as far as the duplicate rule is concerned:
    /// name and last name equal, ignoring case. Phone is not compared.
    pub fn same_person(&self, other: &Contact) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.last_name.to_lowercase() == other.last_name.to_lowercase()
    }

    /// `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.last_name.to_lowercase().contains(query)
    }

    pub fn already_exist(&self, contactlist: &[Contact]) -> bool {
        contactlist.iter().any(|cont| cont.same_person(self))
    }
}
