//! Counters shown on the overview dashboard, computed from the store

use crate::shared::date_utils::{format_datetime, format_money};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_quotation::{Quotation, QuotationStatus};

/// How many quotations the "Recent Leads" block lists
pub const RECENT_LEADS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_variants: usize,
    pub total_leads: usize,
    pub pending_leads: usize,
}

impl DashboardSummary {
    pub fn compute(products: &[Product], quotations: &[Quotation]) -> Self {
        Self {
            total_products: products.len(),
            total_variants: products.iter().map(|p| p.variants.len()).sum(),
            total_leads: quotations.len(),
            pending_leads: quotations
                .iter()
                .filter(|q| q.status == QuotationStatus::Pending)
                .count(),
        }
    }
}

/// Newest first; undated quotations go last
pub fn recent_leads(quotations: &[Quotation], limit: usize) -> Vec<Quotation> {
    let mut sorted = quotations.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Display values of one "Recent Leads" line
#[derive(Clone, Debug, PartialEq)]
pub struct RecentLead {
    pub href: String,
    pub initials: String,
    pub name: String,
    pub created_at: String,
    pub total: String,
    pub status: QuotationStatus,
}

impl From<Quotation> for RecentLead {
    fn from(q: Quotation) -> Self {
        Self {
            href: format!("/leads/{}", q.id),
            initials: q.initials(),
            created_at: format_datetime(q.created_at),
            total: format_money(q.pricing.total),
            name: q.user_details.name,
            status: q.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_product::{ProductId, Variant};
    use contracts::domain::a002_quotation::QuotationId;

    fn product(variants: usize) -> Product {
        Product {
            id: ProductId::new("p"),
            name: "Bottle".into(),
            material_of_construction: "PET".into(),
            cap_type: "Screw cap".into(),
            description: None,
            image_url: None,
            variants: vec![Variant::default(); variants],
            created_at: None,
            updated_at: None,
        }
    }

    fn quotation(id: &str, status: QuotationStatus, day: Option<u32>) -> Quotation {
        Quotation {
            id: QuotationId::new(id),
            status,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2026, 3, d, 10, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_counts() {
        let products = vec![product(2), product(3), product(0)];
        let quotations = vec![
            quotation("1", QuotationStatus::Pending, Some(1)),
            quotation("2", QuotationStatus::Sent, Some(2)),
            quotation("3", QuotationStatus::Pending, Some(3)),
        ];
        let summary = DashboardSummary::compute(&products, &quotations);
        assert_eq!(
            summary,
            DashboardSummary {
                total_products: 3,
                total_variants: 5,
                total_leads: 3,
                pending_leads: 2,
            }
        );
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(DashboardSummary::compute(&[], &[]), DashboardSummary::default());
    }

    #[test]
    fn test_recent_leads_newest_first() {
        let quotations = vec![
            quotation("old", QuotationStatus::Sent, Some(1)),
            quotation("undated", QuotationStatus::Sent, None),
            quotation("new", QuotationStatus::Sent, Some(9)),
            quotation("mid", QuotationStatus::Sent, Some(5)),
        ];
        let ids: Vec<String> = recent_leads(&quotations, 3).into_iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_recent_lead_line() {
        let mut q = quotation("q7", QuotationStatus::Other("on_hold".into()), Some(4));
        q.user_details.name = "Meera Desai".into();
        q.pricing.total = 1425.0;

        let line = RecentLead::from(q);
        assert_eq!(line.href, "/leads/q7");
        assert_eq!(line.initials, "MD");
        assert_eq!(line.name, "Meera Desai");
        assert_eq!(line.created_at, "2026-03-04 10:00");
        assert_eq!(line.total, "₹1425.00");
        assert_eq!(line.status.code(), "on_hold");
    }
}
