//! In-memory application state and the single gateway to the backend
//!
//! Every page receives an [`AppStore`] as a prop. Reads come from its
//! signals; writes go through its methods, which call the backend and then
//! replace the affected collection wholesale.
//!
//! Mutations start from the collection as it was when the call began. Two
//! overlapping calls therefore race: whichever finishes last overwrites the
//! collection.

pub mod backend;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;

use crate::shared::file_select::SelectedFile;
use backend::CatalogBackend;
use contracts::domain::a001_product::{
    Product, ProductField, ProductId, ProductPayload, ValidationError, ValidationErrorKind,
};
use contracts::domain::a002_quotation::{
    CreateQuotationRequest, Quotation, QuotationId, QuotationListQuery, ResendWhatsAppOptions,
    ResendWhatsAppResult,
};
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_bulk_upload::BulkUploadResult;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone, Copy)]
pub struct AppStore {
    pub products: RwSignal<Vec<Product>>,
    pub quotations: RwSignal<Vec<Quotation>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub is_authenticated: RwSignal<bool>,
    backend: StoredValue<Rc<dyn CatalogBackend>, LocalStorage>,
}

impl AppStore {
    pub fn new(backend: Rc<dyn CatalogBackend>) -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            quotations: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            is_authenticated: RwSignal::new(false),
            backend: StoredValue::new_local(backend),
        }
    }

    fn backend(&self) -> Rc<dyn CatalogBackend> {
        self.backend.get_value()
    }

    fn begin(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    fn fail(&self, action: &str, err: &StoreError) {
        log::error!("Failed to {}: {}", action, err);
        self.error.set(Some(err.to_string()));
    }

    /// Runs one backend call with the loading/error bookkeeping around it.
    async fn track<T, F>(&self, action: &str, call: F) -> Result<T, StoreError>
    where
        F: std::future::Future<Output = Result<T, StoreError>>,
    {
        self.begin();
        let result = call.await;
        if let Err(err) = &result {
            self.fail(action, err);
        }
        self.loading.set(false);
        result
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Opens the dashboard and loads both collections.
    pub async fn login(&self) {
        self.is_authenticated.set(true);
        log::info!("signed in");
        self.fetch_products().await;
        self.fetch_quotations().await;
    }

    pub fn logout(&self) {
        self.is_authenticated.set(false);
        log::info!("signed out");
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Replaces the product list; failures are recorded, not returned.
    pub async fn fetch_products(&self) {
        let backend = self.backend();
        let result = self
            .track("fetch products", async {
                Ok::<_, StoreError>(backend.list_products().await?)
            })
            .await;
        if let Ok(products) = result {
            log::info!("fetched {} products", products.len());
            self.products.set(products);
        }
    }

    pub async fn get_product(&self, id: &ProductId) -> Result<Product, StoreError> {
        Ok(self.backend().get_product(id).await?)
    }

    /// Creates a product and puts it at the top of the list.
    ///
    /// Needs either an image file or an existing `imageUrl`.
    pub async fn add_product(
        &self,
        payload: ProductPayload,
        image: Option<SelectedFile>,
    ) -> Result<Product, StoreError> {
        let snapshot = self.products.get_untracked();
        let backend = self.backend();
        let created = self
            .track("add product", async {
                if image.is_none() && !payload.has_image_url() {
                    return Err(ValidationError::new(
                        ValidationErrorKind::MissingImage,
                        ProductField::Image,
                        "Product image is required",
                    )
                    .into());
                }
                Ok::<_, StoreError>(backend.create_product(&payload, image.as_ref()).await?)
            })
            .await?;

        let mut products = Vec::with_capacity(snapshot.len() + 1);
        products.push(created.clone());
        products.extend(snapshot);
        self.products.set(products);
        log::info!("created product {}", created.id);
        Ok(created)
    }

    /// Updates a product and replaces it in place.
    pub async fn update_product(
        &self,
        id: ProductId,
        payload: ProductPayload,
        image: Option<SelectedFile>,
    ) -> Result<Product, StoreError> {
        let snapshot = self.products.get_untracked();
        let backend = self.backend();
        let updated = self
            .track("update product", async {
                Ok::<_, StoreError>(backend.update_product(&id, &payload, image.as_ref()).await?)
            })
            .await?;

        let products = snapshot
            .into_iter()
            .map(|p| if p.id == id { updated.clone() } else { p })
            .collect();
        self.products.set(products);
        log::info!("updated product {}", id);
        Ok(updated)
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        let snapshot = self.products.get_untracked();
        let backend = self.backend();
        self.track("delete product", async {
            Ok::<_, StoreError>(backend.delete_product(&id).await?)
        })
        .await?;

        let products = snapshot.into_iter().filter(|p| p.id != id).collect();
        self.products.set(products);
        log::info!("deleted product {}", id);
        Ok(())
    }

    /// Sends a spreadsheet to the backend, then reloads the product list once.
    pub async fn bulk_upload(&self, file: SelectedFile) -> Result<BulkUploadResult, StoreError> {
        let backend = self.backend();
        let result = self
            .track("bulk upload products", async {
                Ok::<_, StoreError>(backend.bulk_upload(&file).await?)
            })
            .await?;
        log::info!(
            "bulk upload: {} inserted, {} updated, {} failed",
            result.summary.inserted,
            result.summary.updated,
            result.summary.failed_products
        );
        self.fetch_products().await;
        Ok(result)
    }

    // ------------------------------------------------------------------
    // Quotations
    // ------------------------------------------------------------------

    /// Replaces the quotation list with the first 100 quotations.
    pub async fn fetch_quotations(&self) {
        let backend = self.backend();
        let result = self
            .track("fetch quotations", async {
                Ok::<_, StoreError>(backend
                    .list_quotations(&QuotationListQuery::dashboard())
                    .await?)
            })
            .await;
        if let Ok(response) = result {
            log::info!("fetched {} quotations", response.quotations.len());
            self.quotations.set(response.quotations);
        }
    }

    pub async fn get_quotation(&self, id: &QuotationId) -> Result<Quotation, StoreError> {
        Ok(self.backend().get_quotation(id).await?)
    }

    pub async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
    ) -> Result<Quotation, StoreError> {
        let backend = self.backend();
        let created = self
            .track("create quotation", async {
                Ok::<_, StoreError>(backend.create_quotation(&request).await?)
            })
            .await?;
        self.fetch_quotations().await;
        Ok(created)
    }

    pub async fn resend_quotation_whatsapp(
        &self,
        id: QuotationId,
        options: ResendWhatsAppOptions,
    ) -> Result<ResendWhatsAppResult, StoreError> {
        let backend = self.backend();
        let result = self
            .track("resend WhatsApp", async {
                Ok::<_, StoreError>(backend.resend_whatsapp(&id, options).await?)
            })
            .await?;
        self.fetch_quotations().await;
        Ok(result)
    }

    pub async fn quotation_pdf(&self, id: &QuotationId) -> Result<Vec<u8>, StoreError> {
        Ok(self.backend().quotation_pdf(id).await?)
    }

    pub fn quotation_pdf_url(&self, id: &QuotationId) -> String {
        self.backend().quotation_pdf_url(id)
    }
}
