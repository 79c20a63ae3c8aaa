//! Field Reconciler
//!
//! Orchestrates one document through detection, preprocessing and mapping,
//! and adapts a batch of mapped documents into resolver entities for the
//! effective tax rate.
//!
//! Detection runs on the original raw keys, before any derived key exists.

use crate::detector::detect_record_source;
use crate::mapping::{FieldMapper, MappingOutcome};
use crate::normalizer::{parse_number, parse_number_str};
use crate::preprocess::{PreprocessReport, Preprocessor};
use crate::resolver::{ResolverEntity, TieredResolver};
use crate::types::{
    CandidateValue, MappedRecord, RawFieldRecord, ResolvedValue, SourceKind, TrustTier,
};
use propx_common::ReconSettings;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// Canonical key of the ratio numerator for tax rate resolution
pub const ANNUAL_TAXES_KEY: &str = "35_annual_taxes";
/// Canonical key of the ratio denominator for tax rate resolution
pub const ASSESSED_VALUE_KEY: &str = "15_assessed_value";
/// Canonical key of a directly reported tax rate
pub const TAX_RATE_KEY: &str = "37_property_tax_rate";
/// Canonical key used as the peer locality
pub const LOCALITY_KEY: &str = "city";

/// One document after reconciliation
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledRecord {
    pub id: String,
    pub source: SourceKind,
    pub source_label: &'static str,
    /// Raw fields before preprocessing
    pub raw_field_count: usize,
    pub preprocess: PreprocessReport,
    pub mapping: MappingOutcome,
}

impl ReconciledRecord {
    pub fn fields(&self) -> &MappedRecord {
        &self.mapping.record
    }
}

/// Counters aggregated over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchCounters {
    pub documents: usize,
    pub raw_fields: usize,
    pub derived_fields: usize,
    pub mapped: usize,
    pub unmapped: usize,
}

/// Reconciled documents plus aggregate counters
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<ReconciledRecord>,
    pub counters: BatchCounters,
}

/// Detector → preprocessor → mapper for documents, plus tax rate resolution
#[derive(Debug)]
pub struct FieldReconciler {
    preprocessor: Preprocessor,
    mapper: FieldMapper,
    resolver: TieredResolver,
}

impl FieldReconciler {
    pub fn new(settings: &ReconSettings) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            mapper: FieldMapper::with_settings(settings.mapper.clone()),
            resolver: TieredResolver::new(&settings.resolver),
        }
    }

    /// Replace the compound rule set
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    pub fn resolver(&self) -> &TieredResolver {
        &self.resolver
    }

    /// Reconcile one document
    pub fn reconcile(&self, id: impl Into<String>, raw: &RawFieldRecord) -> ReconciledRecord {
        let id = id.into();
        let source = detect_record_source(raw);

        let mut record = raw.clone();
        let preprocess = self.preprocessor.apply(&mut record);
        let mapping = self.mapper.map_record(&record, source);

        debug!(
            id = %id,
            source = %source,
            raw = raw.len(),
            derived = preprocess.derived_keys().count(),
            mapped = mapping.mapped_count,
            unmapped = mapping.unmapped_count,
            "Document reconciled"
        );

        ReconciledRecord {
            id,
            source,
            source_label: source.label(),
            raw_field_count: raw.len(),
            preprocess,
            mapping,
        }
    }

    /// Reconcile every document of a batch, in input order
    pub fn reconcile_batch(&self, documents: &[(String, RawFieldRecord)]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (id, raw) in documents {
            let record = self.reconcile(id.as_str(), raw);
            let counters = &mut outcome.counters;
            counters.documents += 1;
            counters.raw_fields += record.raw_field_count;
            counters.derived_fields += record.preprocess.derived_keys().count();
            counters.mapped += record.mapping.mapped_count;
            counters.unmapped += record.mapping.unmapped_count;
            outcome.records.push(record);
        }

        info!(
            documents = outcome.counters.documents,
            mapped = outcome.counters.mapped,
            unmapped = outcome.counters.unmapped,
            "Batch reconciled"
        );
        outcome
    }

    /// Resolve the effective tax rate of every document in a batch
    pub fn resolve_tax_rates(&self, batch: &BatchOutcome) -> Vec<(String, ResolvedValue)> {
        let entities: Vec<ResolverEntity> = batch
            .records
            .iter()
            .map(|r| entity_from_record(&r.id, r.fields(), r.source.default_trust_tier()))
            .collect();
        self.resolver.resolve_all(&entities)
    }
}

impl Default for FieldReconciler {
    fn default() -> Self {
        Self::new(&ReconSettings::default())
    }
}

/// Parse a rate that may carry a trailing percent sign ("1.2%")
fn parse_rate(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => parse_number_str(s.trim().trim_end_matches('%')),
        other => parse_number(other),
    }
}

/// Tax rate resolver inputs from one mapped record
///
/// A reported rate becomes a candidate at `tier`, labeled with the field's
/// source. Missing or unparseable fields are left empty.
pub fn entity_from_record(id: &str, record: &MappedRecord, tier: TrustTier) -> ResolverEntity {
    let number = |key: &str| record.get(key).and_then(|f| parse_number(&f.value));

    let locality = record
        .get(LOCALITY_KEY)
        .and_then(|f| f.value.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();

    let mut entity = ResolverEntity::new(id, locality);
    entity.numerator = number(ANNUAL_TAXES_KEY);
    entity.denominator = number(ASSESSED_VALUE_KEY);

    if let Some(field) = record.get(TAX_RATE_KEY) {
        if let Some(rate) = parse_rate(&field.value) {
            entity
                .candidates
                .push(CandidateValue::new(rate, tier, field.source.clone()));
        }
    }
    entity
}
