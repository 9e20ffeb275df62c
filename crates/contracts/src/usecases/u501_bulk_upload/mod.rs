pub mod precheck;
pub mod response;

pub use precheck::{
    precheck_bulk_file, require_selected, BulkFileError, ACCEPTED_TYPES, ACCEPT_ATTRIBUTE,
    MAX_BULK_FILE_SIZE,
};
pub use response::{BulkUploadReport, BulkUploadResult, BulkUploadSummary, FailedProduct, SkippedRow};

use crate::usecases::common::UseCaseMetadata;

pub struct BulkUpload;

impl UseCaseMetadata for BulkUpload {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_upload"
    }

    fn display_name() -> &'static str {
        "Bulk Upload Products"
    }

    fn description() -> &'static str {
        "Create or update products from a CSV or Excel sheet, one variant per row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(BulkUpload::full_name(), "u501_bulk_upload");
    }
}
