use super::*;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

/// One file per key inside a directory: key `contacts` lives at
/// `<dir>/contacts.json`.
pub struct FileStorage {
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &str) -> Result<Self, AppError> {
        if dir.is_empty() {
            return Err(AppError::Validation(
                "Storage directory must not be empty".to_string(),
            ));
        }

        Ok(Self {
            dir: PathBuf::from(dir),
        })
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key == "." || key.contains("..") || key.contains(['/', '\\']) {
            return Err(AppError::Validation(format!(
                "'{}' cannot be used as a storage key",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;

        let mut file = match OpenOptions::new().read(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "reading {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let mut data = String::new();
        file.read_to_string(&mut data)
            .map_err(|e| AppError::Storage(format!("reading {}: {}", path.display(), e)))?;

        Ok(Some(data))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        create_file_parent(&path)?;

        // The real file is only ever replaced whole
        let tmp_path = path.with_extension("json.tmp");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)
            .map_err(|e| AppError::Storage(format!("writing {}: {}", tmp_path.display(), e)))?;

        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| AppError::Storage(format!("writing {}: {}", tmp_path.display(), e)))?;
        drop(file);

        fs::rename(&tmp_path, &path)
            .map_err(|e| AppError::Storage(format!("replacing {}: {}", path.display(), e)))?;

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "removing {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn get_medium(&self) -> &str {
        "file"
    }
}
