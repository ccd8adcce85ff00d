pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ValidationReq},
    manager::{ContactStore, ErrorPolicy, ImportSummary, STORAGE_KEY},
};
pub use crate::errors::AppError;
pub use crate::store::{self, Storage, StorageMediums, file::FileStorage, memory::MemStorage};
