use crate::shared::file_select::{revoke_preview, SelectedFile};
use crate::store::{AppStore, StoreError};
use contracts::domain::a001_product::validation::MAX_VARIANTS;
use contracts::domain::a001_product::{
    validate_product_data, validate_product_update_data, Product, ProductDraft, ProductField,
    ProductId, ProductPayload, ValidationError, Variant, VariantField,
};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

/// ViewModel shared by the add and edit product pages
///
/// `id` is set once an existing product has been loaded; until then the form
/// creates a new product on submit.
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub id: RwSignal<Option<ProductId>>,
    pub form: RwSignal<ProductDraft>,
    pub image: RwSignal<Option<SelectedFile>, LocalStorage>,
    /// Object URL of the picked file, or the stored `imageUrl` when editing
    pub preview: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ValidationError>>,
    pub api_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
}

impl ProductFormViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(blank_draft()),
            image: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            error: RwSignal::new(None),
            api_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Fills the form from an existing product
    pub fn load(&self, product: &Product) {
        let mut draft = product.to_draft();
        if draft.variants.as_ref().map_or(true, Vec::is_empty) {
            draft.variants = Some(vec![Variant::default()]);
        }
        self.id.set(Some(product.id.clone()));
        self.preview.set(product.image_url.clone());
        self.form.set(draft);
    }

    /// Uses the product from the store when present, otherwise asks the backend
    pub fn load_if_needed(&self, store: AppStore, id: ProductId) {
        let cached = store
            .products
            .with_untracked(|products| products.iter().find(|p| p.id == id).cloned());
        if let Some(product) = cached {
            self.load(&product);
            return;
        }

        let vm = *self;
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match store.get_product(&id).await {
                Ok(product) => vm.load(&product),
                Err(e) => {
                    log::error!("Failed to load product {}: {}", id, e);
                    vm.api_error.set(Some(e.to_string()));
                }
            }
            vm.loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------

    pub fn text(&self, field: ProductField) -> String {
        self.form.with(|f| {
            let value = match field {
                ProductField::Name => &f.name,
                ProductField::MaterialOfConstruction => &f.material_of_construction,
                ProductField::CapType => &f.cap_type,
                ProductField::Description => &f.description,
                _ => return String::new(),
            };
            value.clone().unwrap_or_default()
        })
    }

    pub fn set_text(&self, field: ProductField, value: String) {
        self.form.update(|f| {
            let slot = match field {
                ProductField::Name => &mut f.name,
                ProductField::MaterialOfConstruction => &mut f.material_of_construction,
                ProductField::CapType => &mut f.cap_type,
                ProductField::Description => &mut f.description,
                _ => return,
            };
            *slot = Some(value);
        });
    }

    /// Message for `field` from the last failed validation
    pub fn field_error(&self, field: ProductField) -> Option<String> {
        self.error
            .with(|e| e.as_ref().and_then(|e| e.field_message(field)).map(str::to_string))
    }

    // ------------------------------------------------------------------
    // Variants
    // ------------------------------------------------------------------

    pub fn variant_count(&self) -> usize {
        self.form.with(|f| f.variants.as_ref().map_or(0, Vec::len))
    }

    pub fn variant_value(&self, index: usize, field: VariantField) -> String {
        self.form.with(|f| {
            f.variants
                .as_ref()
                .and_then(|v| v.get(index))
                .map(|v| v.get(field).to_string())
                .unwrap_or_default()
        })
    }

    pub fn set_variant_value(&self, index: usize, field: VariantField, value: String) {
        self.form.update(|f| {
            if let Some(variant) = f.variants.as_mut().and_then(|v| v.get_mut(index)) {
                *variant.get_mut(field) = value;
            }
        });
    }

    pub fn can_add_variant(&self) -> bool {
        self.variant_count() < MAX_VARIANTS
    }

    pub fn add_variant(&self) {
        self.form.update(|f| {
            let variants = f.variants.get_or_insert_with(Vec::new);
            if variants.len() < MAX_VARIANTS {
                variants.push(Variant::default());
            }
        });
    }

    /// Removes a row; the last remaining row is kept
    pub fn remove_variant(&self, index: usize) {
        self.form.update(|f| {
            if let Some(variants) = f.variants.as_mut() {
                if variants.len() > 1 && index < variants.len() {
                    variants.remove(index);
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Image
    // ------------------------------------------------------------------

    /// Keeps the picked file for upload; it is validated on submit
    pub fn select_image(&self, file: SelectedFile) {
        match file.preview_url() {
            Ok(url) => self.replace_preview(Some(url)),
            Err(e) => log::warn!("No preview for {}: {}", file.name(), e),
        }
        self.image.set(Some(file));
    }

    pub fn replace_preview(&self, url: Option<String>) {
        if let Some(old) = self.preview.get_untracked() {
            revoke_preview(&old);
        }
        self.preview.set(url);
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Validation the way submit runs it: an image is mandatory only when creating
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let draft = self.form.get_untracked();
        self.image.with_untracked(|image| {
            let info = image.as_ref().map(SelectedFile::info);
            if self.id.with_untracked(Option::is_some) {
                validate_product_update_data(&draft, info)
            } else {
                validate_product_data(&draft, info)
            }
        })
    }

    /// Validates, then creates or updates through the store.
    ///
    /// Nothing is sent when validation fails.
    pub async fn submit(&self, store: AppStore) -> Result<Product, StoreError> {
        self.api_error.set(None);
        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Product form rejected: {} ({})", e, e.field);
                self.error.set(Some(e.clone()));
                return Err(e.into());
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let image = self.image.get_untracked();
        let result = match self.id.get_untracked() {
            Some(id) => store.update_product(id, payload, image).await,
            None => store.add_product(payload, image).await,
        };

        self.saving.set(false);
        match &result {
            Ok(_) => {}
            Err(StoreError::Validation(e)) => self.error.set(Some(e.clone())),
            Err(StoreError::Api(e)) => self.api_error.set(Some(e.to_string())),
        }
        result
    }
}

impl Default for ProductFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_draft() -> ProductDraft {
    ProductDraft {
        name: Some(String::new()),
        material_of_construction: Some(String::new()),
        cap_type: Some(String::new()),
        description: Some(String::new()),
        image_url: None,
        variants: Some(vec![Variant::default()]),
    }
}
