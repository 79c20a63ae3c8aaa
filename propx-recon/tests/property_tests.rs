//! Invariant checks across the engine
//!
//! Each test sweeps a handful of representative inputs rather than one case.

mod helpers;

use helpers::raw;
use propx_recon::mapping::{schema, FieldMapper, SYNONYMS, SYNONYM_TABLE};
use propx_recon::normalizer::annualize;
use propx_recon::{
    CandidateValue, MatchKind, Preprocessor, ResolutionConfidence, ResolutionMethod,
    ResolverEntity, SourceKind, TieredResolver, TrustTier,
};
use serde_json::{json, Value};

fn sample_documents() -> Vec<Value> {
    vec![
        json!({ "Baths": "2/0", "Levels": "three", "Address": "1 A St, Ocala, FL 34470" }),
        json!({ "Pool": "No", "List Date/Status": "01/02/2025 : Pending" }),
        json!({ "Pool Features": "Above Ground", "Spcs": "1", "Alt Key/Folio #": 998877 }),
        json!({ "Baths": "4/2", "Full Baths": 4, "Half Baths": "", "Pool": "Community" }),
        json!({ "Floors in Unit/Home": "Two", "Floors In Unit": null, "Zip Code": "N/A" }),
        json!({ "Beds": 3 }),
    ]
}

#[test]
fn test_preprocessor_is_idempotent() {
    let pre = Preprocessor::new();
    for doc in sample_documents() {
        let mut once = raw(doc.clone());
        pre.apply(&mut once);
        let mut twice = once.clone();
        let report = pre.apply(&mut twice);
        assert!(report.is_empty(), "second pass derived {:?} for {doc}", report);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_preprocessor_never_overwrites_populated_fields() {
    let pre = Preprocessor::new();
    for doc in sample_documents() {
        let original = raw(doc);
        let mut processed = original.clone();
        pre.apply(&mut processed);
        for (key, value) in &original {
            if !propx_recon::normalizer::is_blank(value) {
                assert_eq!(&processed[key], value, "field '{key}' was overwritten");
            }
        }
        assert!(processed.len() >= original.len());
    }
}

#[test]
fn test_blank_placeholders_get_filled_and_appended() {
    let mut rec = raw(json!({ "Baths": "4/2", "Half Baths": "", "Full Baths": 4 }));
    Preprocessor::new().apply(&mut rec);
    assert_eq!(rec["Full Baths"], json!(4));
    assert_eq!(rec["Half Baths"], json!(2));
    assert_eq!(rec.keys().last().map(String::as_str), Some("Half Baths"));
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = FieldMapper::new();
    for doc in sample_documents() {
        let rec = raw(doc);
        let first = mapper.map_record(&rec, SourceKind::StellarMls);
        let second = mapper.map_record(&rec, SourceKind::StellarMls);
        assert_eq!(first.fields, second.fields);
        assert_eq!(first.record, second.record);
    }
}

#[test]
fn test_every_synonym_resolves_exactly_to_its_entry() {
    for (synonym, canonical) in SYNONYMS {
        assert_eq!(
            SYNONYM_TABLE.lookup(synonym),
            Some((*canonical, MatchKind::Exact)),
            "synonym '{synonym}'"
        );
    }
}

#[test]
fn test_every_canonical_key_is_cataloged() {
    for key in SYNONYM_TABLE.canonical_keys() {
        assert!(schema::lookup(key).is_some(), "'{key}' missing from catalog");
    }
}

#[test]
fn test_null_like_values_never_mapped() {
    let mapper = FieldMapper::new();
    for blank in [Value::Null, json!(""), json!("N/A"), json!("n/a")] {
        let mut rec = serde_json::Map::new();
        rec.insert("Beds".to_string(), blank.clone());
        let outcome = mapper.map_record(&rec, SourceKind::StellarMls);
        assert!(outcome.fields.is_empty(), "{blank} was mapped");
        assert_eq!(outcome.mapped_count + outcome.unmapped_count, 0);
    }

    // Absent key
    let outcome = mapper.map_record(&raw(json!({})), SourceKind::StellarMls);
    assert!(outcome.record.is_empty());
}

#[test]
fn test_annualize_is_twelve_times_monthly() {
    for monthly in [0.0, 1.0, 99.5, 1147.0, 2999.99] {
        let annual = annualize(&json!(monthly)).unwrap();
        assert!((annual - 12.0 * monthly).abs() < 1e-9);
    }
    assert_eq!(annualize(&Value::Null), None);
}

#[test]
fn test_tier1_beats_disagreeing_ratio() {
    let resolver = TieredResolver::default();
    for tier in [
        TrustTier::Authoritative,
        TrustTier::Geospatial,
        TrustTier::DataApi,
        TrustTier::PrimarySearch,
        TrustTier::SecondarySearch,
    ] {
        let entity = ResolverEntity::new("p", "Ocala")
            .with_ratio_inputs(9000.0, 300000.0)
            .with_candidate(CandidateValue::new(1.0, tier, "Source"));
        let resolved = resolver.resolve(&entity, &[]);
        assert_eq!(resolved.method, ResolutionMethod::DirectTrusted);
        assert_eq!(resolved.value, 1.0);
    }
}

#[test]
fn test_tolerance_boundary_is_inclusive() {
    let resolver = TieredResolver::default();
    let pair = |a: f64, b: f64| {
        vec![
            CandidateValue::new(a, TrustTier::Inferred, "A"),
            CandidateValue::new(b, TrustTier::Inferred, "B"),
        ]
    };

    assert!(resolver.cross_validate(&pair(1.0, 1.2)).is_some());
    assert!(resolver.cross_validate(&pair(1.2, 1.0)).is_some());
    assert!(resolver.cross_validate(&pair(1.0, 1.2000001)).is_none());
    assert!(resolver.cross_validate(&pair(0.7, 0.9)).is_some());
    assert!(resolver.agrees(0.9, 0.7));
    assert!(resolver.agrees(0.0, 0.2));
}

#[test]
fn test_no_data_falls_back_to_zero() {
    let resolver = TieredResolver::default();
    let lonely = ResolverEntity::new("p1", "Ocala");
    let stranger = ResolverEntity::new("p2", "Tampa").with_ratio_inputs(3000.0, 250000.0);
    let resolved = resolver.resolve(&lonely, &[lonely.clone(), stranger]);
    assert_eq!(resolved.value, 0.0);
    assert_eq!(resolved.method, ResolutionMethod::FallbackDefault);
    assert_eq!(resolved.confidence, ResolutionConfidence::Low);
}

#[test]
fn test_non_positive_candidates_are_absent() {
    let resolver = TieredResolver::default();
    for bad in [0.0, -1.2, f64::NAN, f64::INFINITY] {
        let entity = ResolverEntity::new("p", "")
            .with_candidate(CandidateValue::new(bad, TrustTier::Authoritative, "County"))
            .with_candidate(CandidateValue::new(bad, TrustTier::Inferred, "Model"));
        let resolved = resolver.resolve(&entity, &[]);
        assert_eq!(resolved.method, ResolutionMethod::FallbackDefault, "value {bad}");
    }
}

#[test]
fn test_resolution_recomputed_from_current_batch() {
    let resolver = TieredResolver::default();
    let target = ResolverEntity::new("p1", "Ocala");
    let before = resolver.resolve(&target, &[target.clone()]);
    assert_eq!(before.method, ResolutionMethod::FallbackDefault);

    let peer = ResolverEntity::new("p2", "Ocala").with_ratio_inputs(2000.0, 200000.0);
    let after = resolver.resolve(&target, &[target.clone(), peer]);
    assert_eq!(after.method, ResolutionMethod::PeerCityInferred);
    assert!((after.value - 1.0).abs() < 1e-9);
}
