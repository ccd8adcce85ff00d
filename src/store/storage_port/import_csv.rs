use std::path::PathBuf;

use super::*;
use csv::Reader;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// Reads `name,lastName,phone` rows. Rows are returned as-is; the address
/// book decides which of them it accepts.
pub fn read_contacts_from_csv(src: Option<&str>) -> Result<(PathBuf, Vec<Contact>), AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| !ext.eq_ignore_ascii_case("csv")) {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut contacts = Vec::new();
    for result in reader.deserialize() {
        let record: Contact = result?;
        contacts.push(record);
    }

    Ok((file_path, contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let result = read_contacts_from_csv(Some("./no/such/file.csv"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn extension_check_ignores_case() -> Result<(), AppError> {
        let dir = std::env::temp_dir();
        let upper = dir.join(format!("rusty-addressbook-import-{}.CSV", std::process::id()));
        let wrong = dir.join(format!("rusty-addressbook-import-{}.txt", std::process::id()));
        fs::write(&upper, "name,lastName,phone\nAna,Diaz,111\n")?;
        fs::write(&wrong, "name,lastName,phone\nAna,Diaz,111\n")?;

        let upper_str = upper.to_string_lossy().to_string();
        let (_, contacts) = read_contacts_from_csv(Some(upper_str.as_str()))?;
        assert_eq!(contacts.len(), 1);

        let wrong_str = wrong.to_string_lossy().to_string();
        assert!(matches!(
            read_contacts_from_csv(Some(wrong_str.as_str())),
            Err(AppError::Validation(_))
        ));

        let _ = fs::remove_file(&upper);
        let _ = fs::remove_file(&wrong);
        Ok(())
    }

    #[test]
    fn reads_rows_in_order() -> Result<(), AppError> {
        let path = std::env::temp_dir().join(format!(
            "rusty-addressbook-import-{}.csv",
            std::process::id()
        ));
        fs::write(&path, "name,lastName,phone\nAna,Diaz,111\nLuis,Gomez,222\n")?;

        let path_str = path.to_string_lossy().to_string();
        let (_, contacts) = read_contacts_from_csv(Some(path_str.as_str()))?;
        assert_eq!(
            contacts,
            vec![
                Contact::new("Ana".to_string(), "Diaz".to_string(), "111".to_string()),
                Contact::new("Luis".to_string(), "Gomez".to_string(), "222".to_string()),
            ]
        );

        let _ = fs::remove_file(&path);
        Ok(())
    }
}
