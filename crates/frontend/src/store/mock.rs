//! Recording backend for gateway and view-model tests

use super::backend::CatalogBackend;
use super::AppStore;
use crate::shared::file_select::SelectedFile;
use async_trait::async_trait;
use contracts::domain::a001_product::{Product, ProductId, ProductPayload};
use contracts::domain::common::AggregateId;
use contracts::domain::a002_quotation::{
    CreateQuotationRequest, Quotation, QuotationId, QuotationListQuery, QuotationListResponse,
    ResendWhatsAppOptions, ResendWhatsAppResult,
};
use contracts::shared::api_error::{ApiError, MessageResponse};
use contracts::usecases::u501_bulk_upload::{BulkUploadResult, BulkUploadSummary};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory backend that records every call.
///
/// A call can be held back with [`MockBackend::gate`] until the returned
/// sender fires, which lets tests pick the completion order.
#[derive(Default)]
pub(crate) struct MockBackend {
    pub(crate) calls: RefCell<Vec<String>>,
    pub(crate) listing: RefCell<Vec<Product>>,
    pub(crate) quotations: RefCell<Vec<Quotation>>,
    pub(crate) last_payload: RefCell<Option<ProductPayload>>,
    pub(crate) last_query: RefCell<Option<QuotationListQuery>>,
    pub(crate) fail: RefCell<Option<ApiError>>,
    pub(crate) gates: RefCell<HashMap<&'static str, oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub(crate) fn gate(&self, op: &'static str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(op, rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn enter(&self, call: &str, op: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.to_string());
        let gate = self.gates.borrow_mut().remove(op);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        match self.fail.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub(crate) fn product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        material_of_construction: "PET".into(),
        cap_type: "Screw cap".into(),
        description: None,
        image_url: Some(format!("https://cdn.example.com/{}.png", id)),
        variants: vec![],
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn product_from(id: &str, payload: &ProductPayload) -> Product {
    Product {
        id: ProductId::new(id),
        name: payload.name.clone(),
        material_of_construction: payload.material_of_construction.clone(),
        cap_type: payload.cap_type.clone(),
        description: Some(payload.description.clone()),
        image_url: payload.image_url.clone(),
        variants: payload.variants.clone(),
        created_at: None,
        updated_at: None,
    }
}

#[async_trait(?Send)]
impl CatalogBackend for MockBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.enter("list_products", "list_products").await?;
        Ok(self.listing.borrow().clone())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.enter("get_product", "get_product").await?;
        self.listing
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(ApiError::Http {
                status: 404,
                message: "Product not found".into(),
            })
    }

    async fn create_product(
        &self,
        payload: &ProductPayload,
        image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError> {
        let call = if image.is_some() {
            "create_product:multipart"
        } else {
            "create_product:json"
        };
        self.enter(call, "create_product").await?;
        *self.last_payload.borrow_mut() = Some(payload.clone());
        Ok(product_from("new", payload))
    }

    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
        _image: Option<&SelectedFile>,
    ) -> Result<Product, ApiError> {
        self.enter("update_product", "update_product").await?;
        Ok(product_from(id.as_str(), payload))
    }

    async fn delete_product(&self, _id: &ProductId) -> Result<MessageResponse, ApiError> {
        self.enter("delete_product", "delete_product").await?;
        Ok(MessageResponse {
            message: "Product deleted successfully".into(),
        })
    }

    async fn bulk_upload(&self, _file: &SelectedFile) -> Result<BulkUploadResult, ApiError> {
        self.enter("bulk_upload", "bulk_upload").await?;
        self.listing.borrow_mut().push(product("b1", "Bulk One"));
        Ok(BulkUploadResult {
            message: Some("Bulk upload completed".into()),
            summary: BulkUploadSummary {
                total_rows: 1,
                valid_rows: 1,
                inserted: 1,
                ..Default::default()
            },
        })
    }

    async fn list_quotations(
        &self,
        query: &QuotationListQuery,
    ) -> Result<QuotationListResponse, ApiError> {
        self.enter("list_quotations", "list_quotations").await?;
        *self.last_query.borrow_mut() = Some(query.clone());
        Ok(QuotationListResponse {
            quotations: self.quotations.borrow().clone(),
            ..Default::default()
        })
    }

    async fn get_quotation(&self, id: &QuotationId) -> Result<Quotation, ApiError> {
        self.enter("get_quotation", "get_quotation").await?;
        Ok(Quotation {
            id: id.clone(),
            ..Default::default()
        })
    }

    async fn create_quotation(
        &self,
        request: &CreateQuotationRequest,
    ) -> Result<Quotation, ApiError> {
        self.enter("create_quotation", "create_quotation").await?;
        let created = Quotation {
            id: QuotationId::new("q-new"),
            user_details: request.user_details.clone(),
            ..Default::default()
        };
        self.quotations.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn resend_whatsapp(
        &self,
        _id: &QuotationId,
        _options: ResendWhatsAppOptions,
    ) -> Result<ResendWhatsAppResult, ApiError> {
        self.enter("resend_whatsapp", "resend_whatsapp").await?;
        Ok(ResendWhatsAppResult {
            message: "WhatsApp sent".into(),
            success: true,
        })
    }

    async fn quotation_pdf(&self, _id: &QuotationId) -> Result<Vec<u8>, ApiError> {
        self.enter("quotation_pdf", "quotation_pdf").await?;
        Ok(b"%PDF-1.4".to_vec())
    }

    fn quotation_pdf_url(&self, id: &QuotationId) -> String {
        format!("mock://quotations/{}/pdf", id)
    }
}

/// Store wired to a fresh mock, with the mock kept for assertions
pub(crate) fn mock_store() -> (Rc<MockBackend>, AppStore) {
    let backend = Rc::new(MockBackend::default());
    let store = AppStore::new(backend.clone());
    (backend, store)
}
