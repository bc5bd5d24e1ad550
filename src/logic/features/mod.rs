//! Feature schema and validated feature records

pub mod layout;
pub mod record;

pub use layout::{feature_index, feature_name, FEATURE_COUNT, FEATURE_SCHEMA};
pub use record::FeatureRecord;
