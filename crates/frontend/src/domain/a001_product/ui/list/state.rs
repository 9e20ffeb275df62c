use crate::shared::list_utils::{contains_ci, filter_list, page_slice, total_pages, Searchable};
use contracts::domain::a001_product::Product;

pub const ALL_MATERIALS: &str = "All";

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    pub search: String,
    /// `ALL_MATERIALS` or an exact material name
    pub material: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            material: ALL_MATERIALS.to_string(),
            page: 0,
            page_size: 10,
        }
    }
}

impl Searchable for Product {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.material_of_construction, query)
            || contains_ci(&self.cap_type, query)
    }
}

/// One page of the product table plus the counts the pager needs
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPage {
    pub rows: Vec<Product>,
    pub total: usize,
    pub pages: usize,
    pub page: usize,
}

impl ProductListState {
    pub fn apply(&self, products: &[Product]) -> ProductPage {
        let filtered: Vec<Product> = filter_list(products, &self.search)
            .into_iter()
            .filter(|p| self.material == ALL_MATERIALS || p.material_of_construction == self.material)
            .cloned()
            .collect();
        let pages = total_pages(filtered.len(), self.page_size);
        let page = self.page.min(pages - 1);
        ProductPage {
            rows: page_slice(&filtered, page, self.page_size),
            total: filtered.len(),
            pages,
            page,
        }
    }
}

/// Distinct materials for the filter dropdown, sorted
pub fn material_options(products: &[Product]) -> Vec<String> {
    let mut materials: Vec<String> = products
        .iter()
        .map(|p| p.material_of_construction.clone())
        .filter(|m| !m.trim().is_empty())
        .collect();
    materials.sort();
    materials.dedup();
    materials
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;

    fn product(id: &str, name: &str, material: &str, cap: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            material_of_construction: material.into(),
            cap_type: cap.into(),
            description: None,
            image_url: None,
            variants: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Navkar Pure Water", "PET", "Screw cap"),
            product("2", "Navkar Mineral", "Glass", "Crown cap"),
            product("3", "Sparkling Soda", "PET", "Flip top"),
            product("4", "Premium Glass", "Glass", "Screw cap"),
        ]
    }

    #[test]
    fn test_search_covers_name_material_and_cap() {
        let products = catalog();
        let mut state = ProductListState::default();

        state.search = "navkar".into();
        assert_eq!(state.apply(&products).total, 2);

        state.search = "glass".into();
        assert_eq!(state.apply(&products).total, 2);

        state.search = "FLIP".into();
        let page = state.apply(&products);
        assert_eq!(page.rows[0].id.0, "3");
    }

    #[test]
    fn test_material_filter_combines_with_search() {
        let products = catalog();
        let state = ProductListState {
            search: "screw".into(),
            material: "Glass".into(),
            ..Default::default()
        };
        let page = state.apply(&products);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].id.0, "4");
    }

    #[test]
    fn test_paging_clamps_to_last_page() {
        let products: Vec<Product> = (0..23)
            .map(|i| product(&i.to_string(), "Bottle", "PET", "Screw cap"))
            .collect();
        let state = ProductListState {
            page: 7,
            ..Default::default()
        };
        let page = state.apply(&products);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn test_material_options() {
        assert_eq!(material_options(&catalog()), vec!["Glass", "PET"]);
    }
}
