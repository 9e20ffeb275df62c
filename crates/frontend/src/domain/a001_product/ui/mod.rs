pub mod bulk_upload;
pub mod details;
pub mod list;
