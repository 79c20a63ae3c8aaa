//! propx-recon: listing field reconciliation engine
//!
//! Turns heterogeneous raw listing extractions into canonical records and
//! resolves trustworthy values when sources disagree.
//!
//! # Pipeline
//! ```text
//! raw record ─┬─> detector (provenance label)
//!             └─> preprocess (compound fields) ─> mapping (canonical keys)
//!
//! mapped batch ─> resolver (confidence-tiered ratio value per entity)
//! ```
//!
//! The engine is synchronous and performs no I/O. Every operation is total:
//! bad input degrades to a documented fallback instead of an error.

pub mod detector;
pub mod mapping;
pub mod normalizer;
pub mod pipeline;
pub mod preprocess;
pub mod resolver;
pub mod types;

pub use detector::{detect_record_source, detect_source_kind};
pub use mapping::{FieldMapper, MappingOutcome};
pub use pipeline::{
    entity_from_record, BatchCounters, BatchOutcome, FieldReconciler, ReconciledRecord,
};
pub use preprocess::{CompoundRule, PreprocessReport, Preprocessor};
pub use resolver::{ResolverEntity, TieredResolver};
pub use types::{
    CandidateValue, FieldConfidence, MappedField, MappedRecord, MatchKind, RawFieldRecord,
    ResolutionConfidence, ResolutionMethod, ResolvedValue, SourceKind, TrustTier,
};
