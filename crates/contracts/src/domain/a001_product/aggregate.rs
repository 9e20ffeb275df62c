use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::null_as_default;

crate::string_id!(
    /// Server-assigned product id (`_id` on the wire)
    ProductId
);

// ============================================================================
// Variant
// ============================================================================

/// One packaging configuration of a product.
///
/// All dimensions are free text as entered by the operator ("500 ml",
/// "28 mm"); the backend stores them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub size_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brimful_capacity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub neck_size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_height: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub diameter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label_height: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub standard_weight: String,
}

/// Fields of a [`Variant`], in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantField {
    SizeLabel,
    BrimfulCapacity,
    NeckSize,
    TotalHeight,
    Diameter,
    LabelHeight,
    StandardWeight,
}

impl VariantField {
    pub const ALL: [VariantField; 7] = [
        VariantField::SizeLabel,
        VariantField::BrimfulCapacity,
        VariantField::NeckSize,
        VariantField::TotalHeight,
        VariantField::Diameter,
        VariantField::LabelHeight,
        VariantField::StandardWeight,
    ];

    /// Label used in messages and column headers
    pub fn label(self) -> &'static str {
        match self {
            VariantField::SizeLabel => "Size label",
            VariantField::BrimfulCapacity => "Brimful capacity",
            VariantField::NeckSize => "Neck size",
            VariantField::TotalHeight => "Total height",
            VariantField::Diameter => "Diameter",
            VariantField::LabelHeight => "Label height",
            VariantField::StandardWeight => "Standard weight",
        }
    }

    /// Wire key (camelCase)
    pub fn key(self) -> &'static str {
        match self {
            VariantField::SizeLabel => "sizeLabel",
            VariantField::BrimfulCapacity => "brimfulCapacity",
            VariantField::NeckSize => "neckSize",
            VariantField::TotalHeight => "totalHeight",
            VariantField::Diameter => "diameter",
            VariantField::LabelHeight => "labelHeight",
            VariantField::StandardWeight => "standardWeight",
        }
    }
}

impl Variant {
    pub fn get(&self, field: VariantField) -> &str {
        match field {
            VariantField::SizeLabel => &self.size_label,
            VariantField::BrimfulCapacity => &self.brimful_capacity,
            VariantField::NeckSize => &self.neck_size,
            VariantField::TotalHeight => &self.total_height,
            VariantField::Diameter => &self.diameter,
            VariantField::LabelHeight => &self.label_height,
            VariantField::StandardWeight => &self.standard_weight,
        }
    }

    pub fn get_mut(&mut self, field: VariantField) -> &mut String {
        match field {
            VariantField::SizeLabel => &mut self.size_label,
            VariantField::BrimfulCapacity => &mut self.brimful_capacity,
            VariantField::NeckSize => &mut self.neck_size,
            VariantField::TotalHeight => &mut self.total_height,
            VariantField::Diameter => &mut self.diameter,
            VariantField::LabelHeight => &mut self.label_height,
            VariantField::StandardWeight => &mut self.standard_weight,
        }
    }

    /// Copy with every field trimmed
    pub fn trimmed(&self) -> Self {
        let mut out = Variant::default();
        for field in VariantField::ALL {
            *out.get_mut(field) = self.get(field).trim().to_string();
        }
        out
    }
}

// ============================================================================
// Product record
// ============================================================================

/// Product as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub material_of_construction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cap_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Raw form values for editing this product
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.clone()),
            material_of_construction: Some(self.material_of_construction.clone()),
            cap_type: Some(self.cap_type.clone()),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            variants: Some(self.variants.clone()),
        }
    }

    /// Comma-separated size labels for table cells
    pub fn size_labels(&self) -> String {
        self.variants
            .iter()
            .map(|v| v.size_label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================================
// Form input and normalized payload
// ============================================================================

/// Raw product form input, before validation.
///
/// `None` means the field was not supplied at all, `Some("")` means it was
/// left blank; both are rejected for required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub material_of_construction: Option<String>,
    #[serde(default)]
    pub cap_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub variants: Option<Vec<Variant>>,
}

/// Normalized product data, ready to be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub material_of_construction: String,
    pub cap_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub variants: Vec<Variant>,
}

impl ProductPayload {
    pub fn has_image_url(&self) -> bool {
        self.image_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }

    /// Text parts of a multipart request; `variants` travels as a JSON string.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("materialOfConstruction", self.material_of_construction.clone()),
            ("capType", self.cap_type.clone()),
            ("description", self.description.clone()),
        ];
        if let Some(url) = self.image_url.as_ref().filter(|u| !u.trim().is_empty()) {
            fields.push(("imageUrl", url.clone()));
        }
        fields.push(("variants", serde_json::to_string(&self.variants)?));
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(label: &str) -> Variant {
        Variant {
            size_label: label.into(),
            brimful_capacity: "520 ml".into(),
            neck_size: "28 mm".into(),
            total_height: "210 mm".into(),
            diameter: "62 mm".into(),
            label_height: "60 mm".into(),
            standard_weight: "14 g".into(),
        }
    }

    #[test]
    fn test_product_deserializes_document_id() {
        let json = r#"{
            "_id": "665f1c2a9b1e",
            "name": "Navkar Pure Water",
            "materialOfConstruction": "PET",
            "capType": "Screw",
            "imageUrl": "https://cdn.example.com/a.png",
            "variants": [{"sizeLabel": "500ml"}],
            "createdAt": "2024-12-01T10:30:00Z"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new("665f1c2a9b1e"));
        assert_eq!(p.variants[0].size_label, "500ml");
        assert_eq!(p.variants[0].neck_size, "");
        assert!(p.description.is_none());
        assert!(p.created_at.is_some());
    }

    #[test]
    fn test_product_accepts_plain_id_alias() {
        let p: Product = serde_json::from_str(r#"{"id":"7","name":"X"}"#).unwrap();
        assert_eq!(p.id.0, "7");
        assert!(p.variants.is_empty());
    }

    #[test]
    fn test_listing_tolerates_null_fields() {
        let json = r#"[
            {"_id": "1", "name": "Navkar 1L", "capType": null,
             "variants": [{"sizeLabel": "1L", "neckSize": null, "diameter": null}]},
            {"_id": "2", "name": "Navkar Jar", "materialOfConstruction": null, "variants": null}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].cap_type, "");
        assert_eq!(products[0].variants[0].size_label, "1L");
        assert_eq!(products[0].variants[0].neck_size, "");
        assert_eq!(products[0].variants[0].diameter, "");
        assert_eq!(products[1].material_of_construction, "");
        assert!(products[1].variants.is_empty());
    }

    #[test]
    fn test_variant_trimmed() {
        let v = Variant {
            size_label: "  1L ".into(),
            ..variant("x")
        };
        assert_eq!(v.trimmed().size_label, "1L");
        assert_eq!(v.trimmed().neck_size, "28 mm");
    }

    #[test]
    fn test_payload_serializes_camel_case_without_empty_image_url() {
        let payload = ProductPayload {
            name: "Navkar".into(),
            material_of_construction: "PET".into(),
            cap_type: "Flip".into(),
            description: String::new(),
            image_url: None,
            variants: vec![variant("500ml")],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["materialOfConstruction"], "PET");
        assert_eq!(value["variants"][0]["sizeLabel"], "500ml");
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_form_fields_encode_variants_as_json() {
        let payload = ProductPayload {
            name: "Navkar".into(),
            material_of_construction: "PET".into(),
            cap_type: "Flip".into(),
            description: "desc".into(),
            image_url: Some("https://cdn/x.png".into()),
            variants: vec![variant("500ml")],
        };
        let fields = payload.form_fields().unwrap();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["name", "materialOfConstruction", "capType", "description", "imageUrl", "variants"]
        );
        let variants: Vec<Variant> = serde_json::from_str(&fields[5].1).unwrap();
        assert_eq!(variants, payload.variants);
    }

    #[test]
    fn test_to_draft_and_size_labels() {
        let p = Product {
            id: ProductId::new("1"),
            name: "Navkar".into(),
            material_of_construction: "PET".into(),
            cap_type: "Flip".into(),
            description: None,
            image_url: Some("u".into()),
            variants: vec![variant("500ml"), variant("1L")],
            created_at: None,
            updated_at: None,
        };
        assert_eq!(p.size_labels(), "500ml, 1L");
        let draft = p.to_draft();
        assert_eq!(draft.name.as_deref(), Some("Navkar"));
        assert_eq!(draft.variants.unwrap().len(), 2);
    }
}
