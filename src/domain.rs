pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::store::Storage;
