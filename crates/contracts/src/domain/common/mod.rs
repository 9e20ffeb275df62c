//! Common types shared by all catalog records

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
