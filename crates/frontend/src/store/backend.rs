//! Remote catalog API
//!
//! [`CatalogBackend`] is the seam between the store and the network;
//! [`HttpBackend`] is the only production implementation.

use crate::shared::api_utils::{path_segment, ApiConfig};
use crate::shared::file_select::SelectedFile;
use crate::shared::http;
use async_trait::async_trait;
use contracts::domain::a001_product::{Product, ProductId, ProductPayload};
use contracts::domain::a002_quotation::{
    CreateQuotationRequest, Quotation, QuotationId, QuotationListQuery, QuotationListResponse,
    ResendWhatsAppOptions, ResendWhatsAppResult,
};
use contracts::domain::common::AggregateId;
use contracts::shared::api_error::{ApiError, MessageResponse};
use contracts::usecases::u501_bulk_upload::BulkUploadResult;
use gloo_net::http::Request;
use web_sys::FormData;

#[async_trait(?Send)]
pub trait CatalogBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError>;

    /// Multipart when `image` is given, JSON otherwise
    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError>;

    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
        image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError>;

    async fn delete_product(&self, id: &ProductId) -> Result<MessageResponse, ApiError>;

    async fn bulk_upload(&self, file: &SelectedFile) -> Result<BulkUploadResult, ApiError>;

    async fn list_quotations(
        &self,
        query: &QuotationListQuery,
    ) -> Result<QuotationListResponse, ApiError>;

    async fn get_quotation(&self, id: &QuotationId) -> Result<Quotation, ApiError>;

    async fn create_quotation(
        &self,
        request: &CreateQuotationRequest,
    ) -> Result<Quotation, ApiError>;

    async fn resend_whatsapp(
        &self,
        id: &QuotationId,
        options: ResendWhatsAppOptions,
    ) -> Result<ResendWhatsAppResult, ApiError>;

    async fn quotation_pdf(&self, id: &QuotationId) -> Result<Vec<u8>, ApiError>;

    /// Direct link to the generated PDF, for `<a href>`
    fn quotation_pdf_url(&self, id: &QuotationId) -> String;
}

pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    fn product_url(&self, id: &ProductId) -> String {
        self.url(&format!("/products/{}", path_segment(id.as_str())))
    }

    fn quotation_url(&self, id: &QuotationId, suffix: &str) -> String {
        self.url(&format!("/quotations/{}{}", path_segment(id.as_str()), suffix))
    }
}

fn client_error(context: &str, e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Client(format!("{}: {:?}", context, e))
}

/// Product fields as text parts plus the image as a file part
fn product_form(payload: &ProductPayload, image: &SelectedFile) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| client_error("FormData", e))?;
    let fields = payload
        .form_fields()
        .map_err(|e| ApiError::Client(e.to_string()))?;
    for (name, value) in fields {
        form.append_with_str(name, &value)
            .map_err(|e| client_error(name, e))?;
    }
    let blob = image.to_blob()?;
    form.append_with_blob_and_filename("image", &blob, image.name())
        .map_err(|e| client_error("image", e))?;
    Ok(form)
}

#[async_trait(?Send)]
impl CatalogBackend for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        http::get(&self.url("/products")).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        http::get(&self.product_url(id)).await
    }

    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError> {
        let builder = Request::post(&self.url("/products"));
        match image {
            Some(image) => http::send_form(builder, product_form(payload, image)?).await,
            None => http::send_json(builder, payload).await,
        }
    }

    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
        image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError> {
        let builder = Request::put(&self.product_url(id));
        match image {
            Some(image) => http::send_form(builder, product_form(payload, image)?).await,
            None => http::send_json(builder, payload).await,
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<MessageResponse, ApiError> {
        http::delete(&self.product_url(id)).await
    }

    async fn bulk_upload(&self, file: &SelectedFile) -> Result<BulkUploadResult, ApiError> {
        let form = FormData::new().map_err(|e| client_error("FormData", e))?;
        let blob = file.to_blob()?;
        form.append_with_blob_and_filename("file", &blob, file.name())
            .map_err(|e| client_error("file", e))?;
        http::send_form(Request::post(&self.url("/products/bulk-upload")), form).await
    }

    async fn list_quotations(
        &self,
        query: &QuotationListQuery,
    ) -> Result<QuotationListResponse, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Client(e.to_string()))?;
        let url = if qs.is_empty() {
            self.url("/quotations")
        } else {
            self.url(&format!("/quotations?{}", qs))
        };
        http::get(&url).await
    }

    async fn get_quotation(&self, id: &QuotationId) -> Result<Quotation, ApiError> {
        http::get(&self.quotation_url(id, "")).await
    }

    async fn create_quotation(
        &self,
        request: &CreateQuotationRequest,
    ) -> Result<Quotation, ApiError> {
        http::send_json(Request::post(&self.url("/quotations")), request).await
    }

    async fn resend_whatsapp(
        &self,
        id: &QuotationId,
        options: ResendWhatsAppOptions,
    ) -> Result<ResendWhatsAppResult, ApiError> {
        let url = self.quotation_url(id, "/resend-whatsapp");
        http::send_json(Request::post(&url), &options).await
    }

    async fn quotation_pdf(&self, id: &QuotationId) -> Result<Vec<u8>, ApiError> {
        http::get_bytes(&self.quotation_pdf_url(id)).await
    }

    fn quotation_pdf_url(&self, id: &QuotationId) -> String {
        self.quotation_url(id, "/pdf")
    }
}
