//! Client-side gate for spreadsheet uploads
//!
//! Only the declared media type and the size are checked here; parsing and
//! row validation happen on the backend.

use crate::shared::file_info::{FileInfo, MIB};
use thiserror::Error;

pub const ACCEPTED_TYPES: [&str; 3] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Value of the `accept` attribute of the file input
pub const ACCEPT_ATTRIBUTE: &str = ".csv,.xls,.xlsx";

pub const MAX_BULK_FILE_SIZE: u64 = 5 * MIB;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkFileError {
    #[error("Please upload a CSV or Excel file (.csv, .xls, .xlsx)")]
    UnsupportedType { media_type: String },
    #[error("File size must be less than 5MB")]
    TooLarge { size: u64 },
    #[error("Please select a file to upload")]
    NoFileSelected,
}

/// Shared by the file input and drag-and-drop.
pub fn precheck_bulk_file(file: &FileInfo) -> Result<(), BulkFileError> {
    if !ACCEPTED_TYPES.contains(&file.media_type.as_str()) {
        return Err(BulkFileError::UnsupportedType {
            media_type: file.media_type.clone(),
        });
    }
    if file.size > MAX_BULK_FILE_SIZE {
        return Err(BulkFileError::TooLarge { size: file.size });
    }
    Ok(())
}

/// Check run on submit: a file must have been picked and accepted.
pub fn require_selected(file: Option<&FileInfo>) -> Result<&FileInfo, BulkFileError> {
    let file = file.ok_or(BulkFileError::NoFileSelected)?;
    precheck_bulk_file(file)?;
    Ok(file)
}
