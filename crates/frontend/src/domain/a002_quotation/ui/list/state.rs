use crate::shared::list_utils::{contains_ci, filter_list, page_slice, total_pages, Searchable};
use chrono::{DateTime, Duration, Utc};
use contracts::domain::a002_quotation::{Quotation, QuotationStatus};

/// Value of the status dropdown that disables the filter
pub const ALL_STATUSES: &str = "all";

/// Creation-date window of the leads filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [DateRange::All, DateRange::Today, DateRange::Week, DateRange::Month];

    pub fn code(self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .unwrap_or_default()
    }

    /// Week and month are rolling 7 and 30 days; undated quotations only
    /// pass `All`.
    pub fn contains(self, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let Some(created) = created_at else {
            return self == DateRange::All;
        };
        match self {
            DateRange::All => true,
            DateRange::Today => created.date_naive() == now.date_naive(),
            DateRange::Week => now - created <= Duration::days(7),
            DateRange::Month => now - created <= Duration::days(30),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadListState {
    pub search: String,
    /// `ALL_STATUSES` or a status code
    pub status: String,
    pub range: DateRange,
    pub page: usize,
    pub page_size: usize,
}

impl Default for LeadListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: ALL_STATUSES.to_string(),
            range: DateRange::All,
            page: 0,
            page_size: 10,
        }
    }
}

/// Name and email match case-insensitively, phone as a plain substring
impl Searchable for Quotation {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.user_details.name, query)
            || contains_ci(&self.user_details.email, query)
            || self.user_details.phone.contains(query)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadPage {
    pub rows: Vec<Quotation>,
    pub total: usize,
    pub pages: usize,
    pub page: usize,
}

impl LeadListState {
    fn status_filter(&self) -> Option<QuotationStatus> {
        QuotationStatus::from_code(&self.status)
    }

    /// Rows passing every filter, in listing order
    pub fn filtered(&self, quotations: &[Quotation], now: DateTime<Utc>) -> Vec<Quotation> {
        let status = self.status_filter();
        filter_list(quotations, &self.search)
            .into_iter()
            .filter(|q| status.as_ref().map_or(true, |s| &q.status == s))
            .filter(|q| self.range.contains(q.created_at, now))
            .cloned()
            .collect()
    }

    pub fn apply(&self, quotations: &[Quotation], now: DateTime<Utc>) -> LeadPage {
        let filtered = self.filtered(quotations, now);
        let pages = total_pages(filtered.len(), self.page_size);
        let page = self.page.min(pages - 1);
        LeadPage {
            rows: page_slice(&filtered, page, self.page_size),
            total: filtered.len(),
            pages,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a002_quotation::{QuotationId, UserDetails};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn lead(id: &str, name: &str, email: &str, phone: &str, status: QuotationStatus, days_ago: i64) -> Quotation {
        Quotation {
            id: QuotationId::new(id),
            user_details: UserDetails {
                name: name.into(),
                email: email.into(),
                phone: phone.into(),
                company_name: String::new(),
            },
            status,
            created_at: Some(now() - Duration::days(days_ago)),
            ..Default::default()
        }
    }

    fn leads() -> Vec<Quotation> {
        vec![
            lead("1", "Amit Patel", "amit@example.com", "+91 98200 11111", QuotationStatus::Pending, 0),
            lead("2", "Neha Shah", "NEHA@shah.in", "+91 98200 22222", QuotationStatus::Sent, 3),
            lead("3", "Ravi Kumar", "ravi@example.com", "+91 90000 33333", QuotationStatus::Accepted, 20),
            lead("4", "Priya Mehta", "priya@mehta.co", "+91 90000 44444", QuotationStatus::Pending, 60),
        ]
    }

    #[test]
    fn test_search_name_email_case_insensitive() {
        let mut state = LeadListState::default();
        state.search = "AMIT".into();
        assert_eq!(state.apply(&leads(), now()).rows[0].id.0, "1");

        state.search = "neha@SHAH".into();
        assert_eq!(state.apply(&leads(), now()).total, 1);
    }

    #[test]
    fn test_search_phone_substring() {
        let state = LeadListState {
            search: "90000".into(),
            ..Default::default()
        };
        let ids: Vec<String> = state.apply(&leads(), now()).rows.into_iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec!["3", "4"]);
    }

    #[test]
    fn test_status_filter() {
        let state = LeadListState {
            status: "pending".into(),
            ..Default::default()
        };
        assert_eq!(state.apply(&leads(), now()).total, 2);

        let state = LeadListState {
            status: ALL_STATUSES.into(),
            ..Default::default()
        };
        assert_eq!(state.apply(&leads(), now()).total, 4);
    }

    #[test]
    fn test_unknown_status_only_under_all() {
        let mut rows = leads();
        rows.push(lead("5", "Kiran Joshi", "kiran@example.com", "+91 91111 55555", QuotationStatus::Other("on_hold".into()), 1));

        let all = LeadListState::default();
        assert_eq!(all.apply(&rows, now()).total, 5);

        for status in QuotationStatus::FILTERABLE {
            let state = LeadListState {
                status: status.code().to_string(),
                ..Default::default()
            };
            assert!(state.apply(&rows, now()).rows.iter().all(|q| q.id.0 != "5"));
        }
    }

    #[test]
    fn test_date_ranges() {
        let count = |range| {
            LeadListState {
                range,
                ..Default::default()
            }
            .apply(&leads(), now())
            .total
        };
        assert_eq!(count(DateRange::Today), 1);
        assert_eq!(count(DateRange::Week), 2);
        assert_eq!(count(DateRange::Month), 3);
        assert_eq!(count(DateRange::All), 4);
    }

    #[test]
    fn test_undated_only_in_all_time() {
        let undated = Quotation::default();
        assert!(DateRange::All.contains(undated.created_at, now()));
        assert!(!DateRange::Today.contains(undated.created_at, now()));
    }

    #[test]
    fn test_date_range_codes() {
        assert_eq!(DateRange::from_code("week"), DateRange::Week);
        assert_eq!(DateRange::from_code("bogus"), DateRange::All);
    }
}
