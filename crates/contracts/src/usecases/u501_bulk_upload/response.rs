use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::null_as_default;

/// Response of `POST /products/bulk-upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkUploadResult {
    pub message: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: BulkUploadSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkUploadSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_rows: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_rows: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub inserted: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub updated: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_products: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub skipped_rows: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_product_details: Vec<FailedProduct>,
    #[serde(deserialize_with = "null_as_default")]
    pub skipped_row_details: Vec<SkippedRow>,
}

/// A product whose rows were parsed but could not be saved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailedProduct {
    #[serde(deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkippedRow {
    #[serde(deserialize_with = "null_as_default")]
    pub row: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
}

/// Lines of the result panel shown after an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkUploadReport {
    pub headline: String,
    pub counts: Vec<String>,
    /// Present only when `failedProducts > 0`
    pub failed_products: Option<Vec<String>>,
    /// Present only when `skippedRows > 0`
    pub skipped_rows: Option<Vec<String>>,
}

impl BulkUploadResult {
    pub fn report(&self) -> BulkUploadReport {
        let s = &self.summary;

        let mut counts = vec![
            format!("Total Rows: {}", s.total_rows),
            format!("Valid Rows: {}", s.valid_rows),
            format!("Products Inserted: {}", s.inserted),
            format!("Products Updated: {}", s.updated),
        ];
        if s.failed_products > 0 {
            counts.push(format!("Failed Products: {}", s.failed_products));
        }
        if s.skipped_rows > 0 {
            counts.push(format!("Skipped Rows: {}", s.skipped_rows));
        }

        let failed_products = (s.failed_products > 0).then(|| {
            s.failed_product_details
                .iter()
                .map(|f| {
                    let rows = f
                        .rows
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{} (Rows: {}) - Reason: {}", f.product, rows, f.reason)
                })
                .collect()
        });

        let skipped_rows = (s.skipped_rows > 0).then(|| {
            s.skipped_row_details
                .iter()
                .map(|r| format!("Row {}: {}", r.row, r.reason))
                .collect()
        });

        BulkUploadReport {
            headline: self
                .message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Upload completed".to_string()),
            counts,
            failed_products,
            skipped_rows,
        }
    }

    /// True when nothing was rejected or skipped
    pub fn is_clean(&self) -> bool {
        self.summary.failed_products == 0 && self.summary.skipped_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_failure_report() {
        let result: BulkUploadResult = serde_json::from_value(json!({
            "message": "Bulk upload processed",
            "summary": {
                "totalRows": 10,
                "validRows": 8,
                "inserted": 3,
                "updated": 1,
                "failedProducts": 1,
                "skippedRows": 2,
                "failedProductDetails": [
                    {"product": "Navkar 1L", "rows": [4, 5], "reason": "Duplicate size label"}
                ],
                "skippedRowDetails": [
                    {"row": 7, "reason": "Missing name"},
                    {"row": 9, "reason": "Invalid neck size"}
                ]
            }
        }))
        .unwrap();

        let report = result.report();
        assert_eq!(report.headline, "Bulk upload processed");
        assert_eq!(
            report.counts,
            vec![
                "Total Rows: 10",
                "Valid Rows: 8",
                "Products Inserted: 3",
                "Products Updated: 1",
                "Failed Products: 1",
                "Skipped Rows: 2",
            ]
        );
        assert_eq!(
            report.failed_products,
            Some(vec!["Navkar 1L (Rows: 4, 5) - Reason: Duplicate size label".to_string()])
        );
        assert_eq!(
            report.skipped_rows,
            Some(vec![
                "Row 7: Missing name".to_string(),
                "Row 9: Invalid neck size".to_string()
            ])
        );
        assert!(!result.is_clean());
    }

    #[test]
    fn test_clean_upload_hides_detail_blocks() {
        let result: BulkUploadResult =
            serde_json::from_value(json!({"summary": {"totalRows": 2, "validRows": 2, "inserted": 2}}))
                .unwrap();
        let report = result.report();
        assert_eq!(report.counts.len(), 4);
        assert_eq!(report.failed_products, None);
        assert_eq!(report.skipped_rows, None);
        assert_eq!(report.headline, "Upload completed");
        assert!(result.is_clean());
    }

    #[test]
    fn test_null_counters_read_as_zero() {
        let result: BulkUploadResult = serde_json::from_value(json!({
            "message": "Bulk upload processed",
            "summary": {
                "totalRows": 3,
                "validRows": 3,
                "inserted": 3,
                "updated": null,
                "failedProducts": null,
                "skippedRows": null,
                "failedProductDetails": null,
                "skippedRowDetails": [{"row": null, "reason": null}]
            }
        }))
        .unwrap();
        assert_eq!(result.summary.skipped_rows, 0);
        assert_eq!(result.summary.updated, 0);
        assert!(result.summary.failed_product_details.is_empty());
        assert_eq!(result.summary.skipped_row_details[0], SkippedRow::default());
        assert!(result.is_clean());
        assert_eq!(result.report().counts[3], "Products Updated: 0");

        let result: BulkUploadResult =
            serde_json::from_value(json!({"message": "ok", "summary": null})).unwrap();
        assert_eq!(result.summary, BulkUploadSummary::default());
    }

    #[test]
    fn test_missing_summary_defaults_to_zero() {
        let result: BulkUploadResult = serde_json::from_value(json!({"message": "ok"})).unwrap();
        assert_eq!(result.summary, BulkUploadSummary::default());
        assert_eq!(result.report().counts[0], "Total Rows: 0");
    }
}
