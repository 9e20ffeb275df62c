use crate::shared::date_utils::format_datetime;
use crate::shared::export::CsvExportable;
use contracts::domain::a002_quotation::Quotation;

impl CsvExportable for Quotation {
    fn headers() -> Vec<&'static str> {
        vec![
            "Quotation #",
            "Customer Name",
            "Email",
            "Phone",
            "Company",
            "Items Count",
            "Subtotal",
            "Tax",
            "Discount",
            "Total",
            "Status",
            "Created Date",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let user = &self.user_details;
        vec![
            self.quotation_number.clone(),
            user.name.clone(),
            user.email.clone(),
            user.phone.clone(),
            user.company_name.clone(),
            self.items.len().to_string(),
            self.pricing.subtotal.to_string(),
            self.pricing.tax_amount.to_string(),
            self.pricing.discount.to_string(),
            self.pricing.total.to_string(),
            self.status.code().to_string(),
            format_datetime(self.created_at),
        ]
    }
}
