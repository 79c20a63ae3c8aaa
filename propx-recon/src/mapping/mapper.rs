//! Canonical Field Mapper
//!
//! Places every non-blank raw field of one document on the canonical schema.
//!
//! # Lookup
//! 1. Exact synonym match (High)
//! 2. Normalized synonym match (High)
//! 3. Ad-hoc key synthesized from the raw key (Medium)
//!
//! # HOA annualization
//! `31_hoa_fee_annual` is stored as an annual amount. Raw keys known to carry
//! a monthly amount are multiplied by 12; the ambiguous "HOA Fee" is read as
//! monthly only when its value falls below the configured ceiling.

use crate::mapping::synonyms::{SynonymTable, SYNONYM_TABLE};
use crate::normalizer::{annualize, is_blank, number_value, parse_number};
use crate::types::{MappedField, MappedRecord, MatchKind, RawFieldRecord, SourceKind};
use propx_common::MapperSettings;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Canonical key that holds the annual HOA amount
pub const HOA_ANNUAL_KEY: &str = "31_hoa_fee_annual";

/// Raw keys (trimmed, lower-case) whose values are monthly HOA amounts
const HOA_MONTHLY_KEYS: &[&str] = &["monthly hoa amount", "hoa monthly", "average monthly fees"];

/// Raw keys (trimmed, lower-case) whose values are already annual
const HOA_ANNUAL_KEYS: &[&str] = &["total annual assoc fees", "hoa annual", "annual hoa"];

/// Raw key whose period depends on the magnitude of its value
const HOA_AMBIGUOUS_KEY: &str = "hoa fee";

/// Result of mapping one document
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingOutcome {
    /// One entry per non-blank raw field, in raw record order
    pub fields: Vec<MappedField>,
    /// Canonical record; on key collision the later raw field wins
    pub record: MappedRecord,
    /// Raw fields matched through the synonym table
    pub mapped_count: usize,
    /// Raw fields kept under an ad-hoc key
    pub unmapped_count: usize,
}

/// How a raw HOA value relates to the annual canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoaPeriod {
    Monthly,
    Annual,
}

/// Maps raw records onto the canonical schema
#[derive(Debug, Clone)]
pub struct FieldMapper {
    table: &'static SynonymTable,
    settings: MapperSettings,
}

impl FieldMapper {
    /// Mapper over the built-in synonym table with default settings
    pub fn new() -> Self {
        Self::with_settings(MapperSettings::default())
    }

    pub fn with_settings(settings: MapperSettings) -> Self {
        Self {
            table: &SYNONYM_TABLE,
            settings,
        }
    }

    /// Resolve a raw key to its canonical key and lookup phase
    pub fn canonical_key(&self, raw_key: &str) -> (String, MatchKind) {
        match self.table.lookup(raw_key) {
            Some((canonical, kind)) => (canonical.to_string(), kind),
            None => (ad_hoc_key(raw_key), MatchKind::AdHoc),
        }
    }

    /// Map every non-blank field of `record`, labeling provenance with `source`
    pub fn map_record(&self, record: &RawFieldRecord, source: SourceKind) -> MappingOutcome {
        let mut outcome = MappingOutcome::default();

        for (raw_key, value) in record {
            if is_blank(value) {
                continue;
            }

            let (canonical_key, match_kind) = self.canonical_key(raw_key);
            let value = if canonical_key == HOA_ANNUAL_KEY {
                self.convert_hoa(raw_key, value)
            } else {
                value.clone()
            };

            match match_kind {
                MatchKind::AdHoc => outcome.unmapped_count += 1,
                MatchKind::Exact | MatchKind::Normalized => outcome.mapped_count += 1,
            }

            let field = MappedField {
                canonical_key: canonical_key.clone(),
                raw_key: raw_key.clone(),
                value,
                source: source.label().to_string(),
                confidence: match_kind.confidence(),
                match_kind,
            };
            if let Some(previous) = outcome.record.insert(canonical_key, field.clone()) {
                debug!(
                    canonical_key = %field.canonical_key,
                    replaced = %previous.raw_key,
                    by = %field.raw_key,
                    "Canonical key collision, later raw field wins"
                );
            }
            outcome.fields.push(field);
        }

        debug!(
            source = %source,
            mapped = outcome.mapped_count,
            unmapped = outcome.unmapped_count,
            "Record mapped"
        );
        outcome
    }

    /// Period of a raw HOA value, `None` when it should pass through untouched
    fn hoa_period(&self, raw_key: &str, value: &Value) -> Option<HoaPeriod> {
        let key = raw_key.trim().to_lowercase();
        if HOA_MONTHLY_KEYS.contains(&key.as_str()) {
            return Some(HoaPeriod::Monthly);
        }
        if HOA_ANNUAL_KEYS.contains(&key.as_str()) {
            return Some(HoaPeriod::Annual);
        }
        if key == HOA_AMBIGUOUS_KEY && self.settings.ambiguous_monthly_ceiling > 0.0 {
            let below_ceiling = parse_number(value)
                .map(|v| v > 0.0 && v < self.settings.ambiguous_monthly_ceiling)
                .unwrap_or(false);
            return Some(if below_ceiling {
                HoaPeriod::Monthly
            } else {
                HoaPeriod::Annual
            });
        }
        None
    }

    fn convert_hoa(&self, raw_key: &str, value: &Value) -> Value {
        if self.hoa_period(raw_key, value) != Some(HoaPeriod::Monthly) {
            return value.clone();
        }
        match annualize(value) {
            Some(annual) => {
                debug!(raw_key = raw_key, monthly = %value, annual = annual, "Annualized HOA fee");
                number_value(annual)
            }
            None => {
                warn!(
                    raw_key = raw_key,
                    value = %value,
                    "Monthly HOA fee is not numeric, keeping raw value"
                );
                value.clone()
            }
        }
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Key for a raw field with no synonym: lower-case, whitespace runs → "_"
pub fn ad_hoc_key(raw_key: &str) -> String {
    let lowered = raw_key.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                key.push('_');
            }
            in_space = true;
        } else {
            key.push(c);
            in_space = false;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldConfidence;
    use serde_json::json;

    fn record(value: Value) -> RawFieldRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_ad_hoc_key() {
        assert_eq!(ad_hoc_key("Seller  Motivation"), "seller_motivation");
        assert_eq!(ad_hoc_key("Builder Name/Co"), "builder_name/co");
        assert_eq!(ad_hoc_key(" Lead\tSpace"), "_lead_space");
    }

    #[test]
    fn test_exact_normalized_and_ad_hoc() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({
                "Baths": 3,
                "YEAR-BUILT": 1999,
                "Seller Motivation": "High",
            })),
            SourceKind::StellarMls,
        );

        assert_eq!(outcome.mapped_count, 2);
        assert_eq!(outcome.unmapped_count, 1);
        assert_eq!(outcome.fields.len(), 3);

        let baths = &outcome.record["20_total_bathrooms"];
        assert_eq!(baths.match_kind, MatchKind::Exact);
        assert_eq!(baths.confidence, FieldConfidence::High);
        assert_eq!(baths.source, "Stellar MLS PDF");

        assert_eq!(
            outcome.record["25_year_built"].match_kind,
            MatchKind::Normalized
        );

        let adhoc = &outcome.record["seller_motivation"];
        assert_eq!(adhoc.confidence, FieldConfidence::Medium);
        assert_eq!(adhoc.value, json!("High"));
    }

    #[test]
    fn test_blank_values_skipped() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({
                "Baths": null,
                "Beds": "",
                "Pool": "N/A",
                "Spa": "n/a",
                "Subdiv": "Oak Hill",
            })),
            SourceKind::StellarMls,
        );
        assert_eq!(outcome.fields.len(), 1);
        assert_eq!(outcome.mapped_count + outcome.unmapped_count, 1);
    }

    #[test]
    fn test_monthly_hoa_annualized() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({ "Monthly HOA Amount": 1147 })),
            SourceKind::StellarMls,
        );
        let hoa = &outcome.record[HOA_ANNUAL_KEY];
        assert_eq!(hoa.value, json!(13764));
        assert_eq!(hoa.confidence, FieldConfidence::High);
    }

    #[test]
    fn test_annual_hoa_passes_through() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({ "Total Annual Assoc Fees": "$4,200" })),
            SourceKind::StellarMls,
        );
        assert_eq!(outcome.record[HOA_ANNUAL_KEY].value, json!("$4,200"));
    }

    #[test]
    fn test_ambiguous_hoa_fee_uses_ceiling() {
        let mapper = FieldMapper::new();
        let small = mapper.map_record(&record(json!({ "HOA Fee": 250 })), SourceKind::Zillow);
        assert_eq!(small.record[HOA_ANNUAL_KEY].value, json!(3000));

        let large = mapper.map_record(&record(json!({ "HOA Fee": 3000 })), SourceKind::Zillow);
        assert_eq!(large.record[HOA_ANNUAL_KEY].value, json!(3000));

        let disabled = FieldMapper::with_settings(MapperSettings {
            ambiguous_monthly_ceiling: 0.0,
        });
        let kept = disabled.map_record(&record(json!({ "HOA Fee": 250 })), SourceKind::Zillow);
        assert_eq!(kept.record[HOA_ANNUAL_KEY].value, json!(250));
    }

    #[test]
    fn test_unparseable_monthly_hoa_kept() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({ "HOA Monthly": "call office" })),
            SourceKind::StellarMls,
        );
        assert_eq!(outcome.record[HOA_ANNUAL_KEY].value, json!("call office"));
        assert_eq!(outcome.mapped_count, 1);
    }

    #[test]
    fn test_later_raw_key_wins_collision() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(
            &record(json!({ "Beds": 3, "Bedrooms": 4 })),
            SourceKind::StellarMls,
        );
        assert_eq!(outcome.mapped_count, 2);
        assert_eq!(outcome.fields.len(), 2);
        let beds = &outcome.record["17_bedrooms"];
        assert_eq!(beds.value, json!(4));
        assert_eq!(beds.raw_key, "Bedrooms");
    }

    #[test]
    fn test_source_label_follows_kind() {
        let mapper = FieldMapper::new();
        let outcome = mapper.map_record(&record(json!({ "Beds": 3 })), SourceKind::Unknown);
        assert_eq!(outcome.record["17_bedrooms"].source, "MLS PDF");
    }
}
