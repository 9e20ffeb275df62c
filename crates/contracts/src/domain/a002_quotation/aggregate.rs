use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::null_as_default;

crate::string_id!(
    /// Server-assigned quotation id (`_id` on the wire)
    QuotationId
);

/// Default page size when listing quotations
pub const QUOTATION_LIST_LIMIT: u32 = 100;

/// Lifecycle status of a quotation.
///
/// Codes this client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuotationStatus {
    #[default]
    Pending,
    Sent,
    Failed,
    Accepted,
    Rejected,
    Other(String),
}

impl QuotationStatus {
    pub const FILTERABLE: [QuotationStatus; 5] = [
        QuotationStatus::Pending,
        QuotationStatus::Sent,
        QuotationStatus::Failed,
        QuotationStatus::Accepted,
        QuotationStatus::Rejected,
    ];

    /// Wire code; unknown statuses return the raw value
    pub fn code(&self) -> &str {
        match self {
            QuotationStatus::Pending => "pending",
            QuotationStatus::Sent => "sent",
            QuotationStatus::Failed => "failed",
            QuotationStatus::Accepted => "accepted",
            QuotationStatus::Rejected => "rejected",
            QuotationStatus::Other(raw) => raw.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            QuotationStatus::Pending => "Pending",
            QuotationStatus::Sent => "Sent",
            QuotationStatus::Failed => "Failed",
            QuotationStatus::Accepted => "Accepted",
            QuotationStatus::Rejected => "Rejected",
            QuotationStatus::Other(raw) => raw.as_str(),
        }
    }

    /// Parses one of the filterable codes
    pub fn from_code(code: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.code() == code)
    }
}

impl From<String> for QuotationStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code).unwrap_or(QuotationStatus::Other(code))
    }
}

impl From<QuotationStatus> for String {
    fn from(status: QuotationStatus) -> Self {
        match status {
            QuotationStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
}

/// One requested product line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotationItem {
    pub product_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    #[serde(deserialize_with = "null_as_default")]
    pub subtotal: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

/// Quotation as returned by the backend (shown as a "lead")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quotation {
    #[serde(rename = "_id", alias = "id")]
    pub id: QuotationId,
    #[serde(deserialize_with = "null_as_default")]
    pub quotation_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_details: UserDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<QuotationItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing: Pricing,
    #[serde(deserialize_with = "null_as_default")]
    pub status: QuotationStatus,
    pub pdf_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quotation {
    /// Two-letter initials of the customer name for avatars
    pub fn initials(&self) -> String {
        self.user_details
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotationListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub quotations: Vec<Quotation>,
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Query string of `GET /quotations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuotationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QuotationListQuery {
    /// The listing the dashboard keeps in memory
    pub fn dashboard() -> Self {
        Self {
            limit: Some(QUOTATION_LIST_LIMIT),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    pub user_details: UserDetails,
    pub items: Vec<QuotationItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendWhatsAppOptions {
    pub send_to_user: bool,
    pub send_to_company: bool,
}

impl Default for ResendWhatsAppOptions {
    fn default() -> Self {
        Self {
            send_to_user: true,
            send_to_company: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResendWhatsAppResult {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
}
