//! Metadata of a user-selected file (image or spreadsheet)

use serde::{Deserialize, Serialize};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

/// What the browser tells us about a picked file before it is sent anywhere.
///
/// `media_type` is the declared MIME type, not sniffed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    /// Size as shown in the upload widgets ("12.50 KB")
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / KIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label() {
        assert_eq!(FileInfo::new("a.csv", "text/csv", 2048).size_label(), "2.00 KB");
        assert_eq!(FileInfo::new("a.csv", "text/csv", 1536).size_label(), "1.50 KB");
    }
}
