//! Product add/edit form
//!
//! - view_model.rs: form state, validation and submit
//! - view.rs: add and edit pages

mod view;
mod view_model;

pub use view::{AddProductPage, EditProductPage};
pub use view_model::ProductFormViewModel;
