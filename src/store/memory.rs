use super::*;
use std::collections::HashMap;

/// Keeps everything in a map. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemStorage {
    pub data: HashMap<String, String>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Storage for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), AppError> {
        self.data.remove(key);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_delete() -> Result<(), AppError> {
        let mut storage = MemStorage::new();
        assert_eq!(storage.read("contacts")?, None);

        storage.write("contacts", "[]")?;
        assert_eq!(storage.read("contacts")?, Some("[]".to_string()));
        assert_eq!(storage.len(), 1);

        storage.delete("contacts")?;
        storage.delete("contacts")?;
        assert!(storage.is_empty());
        Ok(())
    }
}
