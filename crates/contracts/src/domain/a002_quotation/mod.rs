pub mod aggregate;

pub use aggregate::{
    CreateQuotationRequest, Pagination, Pricing, Quotation, QuotationId, QuotationItem,
    QuotationListQuery, QuotationListResponse, QuotationStatus, ResendWhatsAppOptions,
    ResendWhatsAppResult, UserDetails,
};
