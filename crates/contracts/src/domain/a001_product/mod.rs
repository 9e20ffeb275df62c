pub mod aggregate;
pub mod validation;

pub use aggregate::{Product, ProductDraft, ProductId, ProductPayload, Variant, VariantField};
pub use validation::{
    validate_product_data, validate_product_update_data, ProductField, ValidationError,
    ValidationErrorKind,
};
