//! Product form validation
//!
//! Top-level checks stop at the first failing field. The only place where
//! problems are collected is a single variant: all of its field errors are
//! reported together in one multi-line message.

use super::aggregate::{ProductDraft, ProductPayload, Variant, VariantField};
use crate::shared::file_info::{FileInfo, KIB, MIB};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub const MAX_VARIANTS: usize = 50;
pub const MAX_VARIANT_FIELD_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_IMAGE_SIZE: u64 = 10 * MIB;
pub const MIN_IMAGE_SIZE: u64 = KIB;
pub const IMAGE_MEDIA_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    TooShort,
    TooLong,
    MissingImage,
    InvalidType,
    TooLarge,
    TooSmall,
    DuplicateVariantLabel,
}

/// Which input an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    MaterialOfConstruction,
    CapType,
    Description,
    /// The variant collection as a whole (count, duplicate labels)
    Variants,
    /// A single variant row, zero-based
    Variant(usize),
    Image,
}

impl ProductField {
    /// Form key, e.g. `capType` or `variants[2]`
    pub fn key(&self) -> String {
        match self {
            ProductField::Name => "name".into(),
            ProductField::MaterialOfConstruction => "materialOfConstruction".into(),
            ProductField::CapType => "capType".into(),
            ProductField::Description => "description".into(),
            ProductField::Variants => "variants".into(),
            ProductField::Variant(index) => format!("variants[{}]", index),
            ProductField::Image => "image".into(),
        }
    }

    /// True for the collection and every row in it
    pub fn is_variants(&self) -> bool {
        matches!(self, ProductField::Variants | ProductField::Variant(_))
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: ProductField,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, field: ProductField, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }

    /// Message to render next to `field`, if this error belongs to it
    pub fn field_message(&self, field: ProductField) -> Option<&str> {
        self.is_for(field).then_some(self.message.as_str())
    }

    pub fn is_for(&self, field: ProductField) -> bool {
        self.field == field
    }
}

type Result<T> = std::result::Result<T, ValidationError>;

// ============================================================================
// Text fields
// ============================================================================

struct TextRule {
    field: ProductField,
    /// Used for "is required" / "cannot be empty"
    label: &'static str,
    /// Used for length messages
    short_label: &'static str,
    min: usize,
    max: usize,
}

const NAME: TextRule = TextRule {
    field: ProductField::Name,
    label: "Product name",
    short_label: "Product name",
    min: 3,
    max: 100,
};

const MATERIAL: TextRule = TextRule {
    field: ProductField::MaterialOfConstruction,
    label: "Material of construction",
    short_label: "Material",
    min: 2,
    max: 50,
};

const CAP_TYPE: TextRule = TextRule {
    field: ProductField::CapType,
    label: "Cap type",
    short_label: "Cap type",
    min: 2,
    max: 50,
};

fn char_len(s: &str) -> usize {
    s.chars().count()
}

impl TextRule {
    fn check(&self, value: Option<&str>) -> Result<String> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    self.field,
                    format!("{} is required", self.label),
                ))
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingField,
                self.field,
                format!("{} cannot be empty", self.label),
            ));
        }

        let len = char_len(trimmed);
        if len < self.min {
            return Err(ValidationError::new(
                ValidationErrorKind::TooShort,
                self.field,
                format!(
                    "{} must be at least {} characters long",
                    self.short_label, self.min
                ),
            ));
        }
        if len > self.max {
            return Err(ValidationError::new(
                ValidationErrorKind::TooLong,
                self.field,
                format!("{} must not exceed {} characters", self.short_label, self.max),
            ));
        }

        Ok(trimmed.to_string())
    }
}

pub fn validate_product_name(name: Option<&str>) -> Result<String> {
    NAME.check(name)
}

pub fn validate_material(material: Option<&str>) -> Result<String> {
    MATERIAL.check(material)
}

pub fn validate_cap_type(cap_type: Option<&str>) -> Result<String> {
    CAP_TYPE.check(cap_type)
}

/// Optional; absent or blank becomes an empty string.
pub fn validate_description(description: Option<&str>) -> Result<String> {
    let trimmed = description.unwrap_or_default().trim();
    if char_len(trimmed) > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            ProductField::Description,
            format!("Description must not exceed {} characters", MAX_DESCRIPTION_LEN),
        ));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Variants
// ============================================================================

/// Checks one variant row and reports every bad field at once.
pub fn validate_variant(variant: &Variant, index: usize) -> Result<Variant> {
    let mut problems: Vec<(ValidationErrorKind, String)> = Vec::new();

    for field in VariantField::ALL {
        let value = variant.get(field).trim();
        if value.is_empty() {
            problems.push((
                ValidationErrorKind::MissingField,
                format!("Variant {}: {} is required", index + 1, field.label()),
            ));
        } else if char_len(value) > MAX_VARIANT_FIELD_LEN {
            problems.push((
                ValidationErrorKind::TooLong,
                format!(
                    "Variant {}: {} must not exceed {} characters",
                    index + 1,
                    field.label(),
                    MAX_VARIANT_FIELD_LEN
                ),
            ));
        }
    }

    if let Some((kind, _)) = problems.first() {
        let message = problems
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        return Err(ValidationError::new(*kind, ProductField::Variant(index), message));
    }

    Ok(variant.trimmed())
}

/// Repeated size labels (case-insensitive), each reported once in the order
/// the repeats are first seen.
fn duplicate_size_labels(variants: &[Variant]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for variant in variants {
        let label = variant.size_label.to_lowercase();
        if !seen.insert(label.clone()) && reported.insert(label.clone()) {
            duplicates.push(label);
        }
    }
    duplicates
}

pub fn validate_variants(variants: Option<&[Variant]>) -> Result<Vec<Variant>> {
    let variants = variants.ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::MissingField,
            ProductField::Variants,
            "At least one product variant is required",
        )
    })?;

    if variants.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingField,
            ProductField::Variants,
            "Please add at least one product variant",
        ));
    }

    if variants.len() > MAX_VARIANTS {
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            ProductField::Variants,
            format!("Maximum {} variants allowed per product", MAX_VARIANTS),
        ));
    }

    let validated = variants
        .iter()
        .enumerate()
        .map(|(index, variant)| validate_variant(variant, index))
        .collect::<Result<Vec<_>>>()?;

    let duplicates = duplicate_size_labels(&validated);
    if !duplicates.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::DuplicateVariantLabel,
            ProductField::Variants,
            format!(
                "Duplicate size labels found: {}. Each variant must have a unique size label.",
                duplicates.join(", ")
            ),
        ));
    }

    Ok(validated)
}

// ============================================================================
// Image
// ============================================================================

pub fn validate_image_file(file: Option<&FileInfo>) -> Result<()> {
    let file = file.ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::MissingImage,
            ProductField::Image,
            "Product image is required. Please upload an image file.",
        )
    })?;

    if !IMAGE_MEDIA_TYPES.contains(&file.media_type.as_str()) {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidType,
            ProductField::Image,
            "Invalid image format. Please upload a JPEG, PNG, GIF, or WEBP image.",
        ));
    }

    if file.size > MAX_IMAGE_SIZE {
        return Err(ValidationError::new(
            ValidationErrorKind::TooLarge,
            ProductField::Image,
            "Image file is too large. Please upload an image smaller than 10MB.",
        ));
    }

    // Anything under 1 KiB is almost certainly a broken upload
    if file.size < MIN_IMAGE_SIZE {
        return Err(ValidationError::new(
            ValidationErrorKind::TooSmall,
            ProductField::Image,
            "Image file is too small. Please upload a valid image.",
        ));
    }

    Ok(())
}

// ============================================================================
// Whole product
// ============================================================================

fn normalize_fields(draft: &ProductDraft) -> Result<ProductPayload> {
    Ok(ProductPayload {
        name: validate_product_name(draft.name.as_deref())?,
        material_of_construction: validate_material(draft.material_of_construction.as_deref())?,
        cap_type: validate_cap_type(draft.cap_type.as_deref())?,
        description: validate_description(draft.description.as_deref())?,
        variants: validate_variants(draft.variants.as_deref())?,
        image_url: draft
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string),
    })
}

/// Validates a new product. An image is required: either a freshly picked
/// file or an existing `imageUrl` on the draft.
pub fn validate_product_data(
    draft: &ProductDraft,
    image: Option<&FileInfo>,
) -> Result<ProductPayload> {
    let payload = normalize_fields(draft)?;
    if image.is_some() || !payload.has_image_url() {
        validate_image_file(image)?;
    }
    Ok(payload)
}

/// Validates an edit. The image is optional and only checked when supplied.
pub fn validate_product_update_data(
    draft: &ProductDraft,
    image: Option<&FileInfo>,
) -> Result<ProductPayload> {
    let payload = normalize_fields(draft)?;
    if image.is_some() {
        validate_image_file(image)?;
    }
    Ok(payload)
}
