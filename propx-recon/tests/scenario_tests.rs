//! End-to-end reconciliation scenarios
//!
//! Each test runs raw documents through the public API the way a serving
//! layer would: reconcile, then resolve the tax rate across the batch.

mod helpers;

use helpers::{capture_logs, raw};
use propx_common::ReconSettings;
use propx_recon::{
    detect_source_kind, FieldConfidence, FieldReconciler, ResolutionConfidence, ResolutionMethod,
    ResolverEntity, SourceKind, TieredResolver,
};
use serde_json::json;
use tracing::Level;

#[test]
fn test_monthly_hoa_amount_is_annualized() {
    let reconciler = FieldReconciler::default();
    let out = reconciler.reconcile("doc", &raw(json!({ "Monthly HOA Amount": 1147 })));

    let hoa = &out.fields()["31_hoa_fee_annual"];
    assert_eq!(hoa.value, json!(13764));
    assert_eq!(hoa.confidence, FieldConfidence::High);
    assert_eq!(hoa.raw_key, "Monthly HOA Amount");
}

#[test]
fn test_compound_bath_count_split() {
    let reconciler = FieldReconciler::default();
    let out = reconciler.reconcile("doc", &raw(json!({ "Baths": "2/0" })));

    assert!(out.preprocess.fired("baths_split"));
    assert_eq!(out.fields()["18_full_bathrooms"].value, json!(2));
    assert_eq!(out.fields()["19_half_bathrooms"].value, json!(0));
}

#[test]
fn test_peer_city_inference_from_single_peer() {
    let resolver = TieredResolver::default();
    let p1 = ResolverEntity::new("P1", "Ocala");
    let p2 = ResolverEntity::new("P2", "Ocala").with_ratio_inputs(3000.0, 250000.0);
    let batch = vec![p1.clone(), p2];

    let resolved = resolver.resolve(&p1, &batch);
    assert_eq!(resolved.method, ResolutionMethod::PeerCityInferred);
    assert_eq!(resolved.confidence, ResolutionConfidence::Medium);
    assert!((resolved.value - 1.2).abs() < 1e-9);
}

#[test]
fn test_peer_city_inference_through_pipeline() {
    let reconciler = FieldReconciler::default();
    let batch = reconciler.reconcile_batch(&[
        ("P1".to_string(), raw(json!({ "City": "Ocala", "Beds": 3 }))),
        (
            "P2".to_string(),
            raw(json!({
                "City": "OCALA",
                "Taxes": "$3,000",
                "Assessed Value": "$250,000",
            })),
        ),
    ]);

    let rates = reconciler.resolve_tax_rates(&batch);
    let (id, p1) = &rates[0];
    assert_eq!(id, "P1");
    assert_eq!(p1.method, ResolutionMethod::PeerCityInferred);
    assert_eq!(p1.confidence, ResolutionConfidence::Medium);
    assert!((p1.value - 1.2).abs() < 1e-9);
}

#[test]
fn test_stellar_detection_from_signature_keys() {
    assert_eq!(
        detect_source_kind(["Subdiv", "ADOM", "CDOM", "Bldg Name/#"]),
        SourceKind::StellarMls
    );
    assert_eq!(
        detect_source_kind(["ADOM", "CDOM", "Bldg Name/#"]),
        SourceKind::StellarMls
    );
}

#[test]
fn test_full_stellar_document() {
    let reconciler = FieldReconciler::default();
    let doc = raw(json!({
        "MLS#": "TB8449505",
        "Address": "4520 Bayshore Blvd, Tampa, FL 33611",
        "List Date/Status": "11/20/2024 : Active",
        "Subdiv": "Bayshore Beautiful",
        "ADOM": 12,
        "CDOM": 12,
        "Baths": "3/1",
        "Floors in Unit/Home": "One",
        "Pool": "Private, Heated In Ground",
        "Community Features": "Clubhouse, Community Pool",
        "Alt Key/Folio #": "A-1234",
        "Spcs": 2,
        "Monthly HOA Amount": "$250",
        "Seller Notes": "Motivated",
        "Flood Zone": "",
    }));

    let out = reconciler.reconcile("TB8449505", &doc);
    assert_eq!(out.source, SourceKind::StellarMls);
    assert_eq!(out.source_label, "Stellar MLS PDF");

    let fields = out.fields();
    assert_eq!(fields["2_mls_primary"].value, json!("TB8449505"));
    assert_eq!(fields["8_zip_code"].value, json!("33611"));
    assert_eq!(fields["5_listing_date"].value, json!("11/20/2024"));
    assert_eq!(fields["18_full_bathrooms"].value, json!(3));
    assert_eq!(fields["19_half_bathrooms"].value, json!(1));
    assert_eq!(fields["148_floors_in_unit"].value, json!(1));
    assert_eq!(fields["54_pool_yn"].value, json!(true));
    assert_eq!(fields["55_pool_type"].value, json!(["In-ground Heated", "Community"]));
    assert_eq!(fields["9_parcel_id"].value, json!("A-1234"));
    assert_eq!(fields["28_garage_spaces"].value, json!(2));
    assert_eq!(fields["31_hoa_fee_annual"].value, json!(3000));
    assert_eq!(fields["seller_notes"].confidence, FieldConfidence::Medium);
    assert!(!fields.contains_key("119_flood_zone"));
}

#[test]
fn test_tax_rate_trusted_source_beats_ratio() {
    let reconciler = FieldReconciler::default();
    let batch = reconciler.reconcile_batch(&[(
        "P1".to_string(),
        raw(json!({
            "City": "Tampa",
            "Taxes": 5000,
            "Assessed Value": 250000,
            "Tax Rate": "1.10%",
        })),
    )]);

    let rates = reconciler.resolve_tax_rates(&batch);
    assert_eq!(rates[0].1.method, ResolutionMethod::DirectTrusted);
    assert_eq!(rates[0].1.value, 1.1);
    assert_eq!(rates[0].1.explanation, "From Stellar MLS PDF (Tier 1)");
}

#[test]
fn test_unparseable_monthly_hoa_logs_warning() {
    let reconciler = FieldReconciler::default();
    let (out, logs) = capture_logs(|| {
        reconciler.reconcile("doc", &raw(json!({ "HOA Monthly": "see attached" })))
    });

    assert_eq!(out.fields()["31_hoa_fee_annual"].value, json!("see attached"));
    assert!(logs.contains_at(Level::WARN, "Monthly HOA fee is not numeric"));
}

#[test]
fn test_resolution_and_rules_are_logged() {
    let reconciler = FieldReconciler::default();
    let (_, logs) = capture_logs(|| {
        let batch = reconciler.reconcile_batch(&[("P1".to_string(), raw(json!({ "Baths": "2/1" })))]);
        reconciler.resolve_tax_rates(&batch)
    });

    logs.assert_contains("Compound rule fired");
    logs.assert_contains("Value resolved");
    logs.assert_contains("Batch reconciled");
    logs.assert_no_match("not numeric");
}

#[test]
fn test_settings_flow_into_engine() {
    let settings = ReconSettings::from_toml_str(
        "[resolver]\ntolerance = 0.05\n\n[mapper]\nambiguous_monthly_ceiling = 0\n",
    )
    .unwrap();
    let reconciler = FieldReconciler::new(&settings);

    assert_eq!(reconciler.resolver().tolerance(), 0.05);
    let out = reconciler.reconcile("doc", &raw(json!({ "HOA Fee": 250 })));
    assert_eq!(out.fields()["31_hoa_fee_annual"].value, json!(250));
}
