//! Canonical field mapping
//!
//! - `synonyms` - static synonym table and its two-phase lookup
//! - `schema` - catalog of canonical keys with labels, types and units
//! - `mapper` - maps raw records onto canonical keys

pub mod mapper;
pub mod schema;
pub mod synonyms;

pub use mapper::{ad_hoc_key, FieldMapper, MappingOutcome, HOA_ANNUAL_KEY};
pub use schema::{CanonicalField, SemanticType, Unit, CATALOG};
pub use synonyms::{normalize_field_name, SynonymTable, SYNONYMS, SYNONYM_TABLE};
