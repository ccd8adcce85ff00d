use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    Duplicate(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Logger(String),
    MalformedData(String),
    NotFound(String),
    Storage(String),
    Validation(String),
}

impl AppError {
    /// Errors that come from the backend or from decoding what it returned.
    /// These are the ones an `ErrorPolicy::Lenient` store is allowed to swallow.
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_) | AppError::MalformedData(_) | AppError::Io(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<log::ParseLevelError> for AppError {
    fn from(err: log::ParseLevelError) -> Self {
        AppError::Validation(format!("Unknown log level: {}", err))
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Duplicate(msg) => {
                write!(f, "Duplicate contact: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "JSON error: {}", e)
            }
            AppError::Logger(msg) => {
                write!(f, "Logger setup failed: {}", msg)
            }
            AppError::MalformedData(msg) => {
                write!(f, "Stored contacts could not be decoded: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Storage(msg) => {
                write!(f, "Storage backend failed: {}", msg)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
