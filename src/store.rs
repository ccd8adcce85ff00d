pub mod file;
pub mod memory;
pub mod storage_port;

use crate::errors::AppError;
use crate::prelude::Contact;
use std::fs;
use std::path::Path;

pub const STORAGE_DIR: &str = "./.instance";

/// A synchronous string-keyed store. The address book keeps its whole
/// collection under a single key.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing a key that is not there is not an error.
    fn delete(&mut self, key: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    File,
}

impl StorageMediums {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "mem" => Ok(StorageMediums::Mem),
            "file" => Ok(StorageMediums::File),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    dir: Option<&str>,
) -> Result<Box<dyn Storage>, AppError> {
    match medium {
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
        StorageMediums::File => Ok(Box::new(file::FileStorage::new(
            dir.unwrap_or(STORAGE_DIR),
        )?)),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
