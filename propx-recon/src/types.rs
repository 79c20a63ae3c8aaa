//! Core Types for the Reconciliation Engine
//!
//! Shared vocabulary for every stage of the pipeline:
//! - **Input:** `RawFieldRecord` (one extracted document, provider-specific keys)
//! - **Mapping output:** `MappedField` / `MappedRecord` (canonical keys with provenance)
//! - **Resolution:** `TrustTier`, `CandidateValue`, `ResolvedValue`
//!
//! All output types serialize with `serde` so presentation layers can consume
//! them directly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Input
// ============================================================================

/// One document's flat raw extraction: raw key → scalar, in extraction order
///
/// Values are JSON scalars (string, number, boolean, null). A key that the
/// extractor never produced is simply absent.
pub type RawFieldRecord = Map<String, Value>;

// ============================================================================
// Source detection
// ============================================================================

/// Provider field-naming convention detected for a raw batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    StellarMls,
    Zillow,
    Realtor,
    Redfin,
    Unknown,
}

impl SourceKind {
    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::StellarMls => "stellar_mls",
            SourceKind::Zillow => "zillow",
            SourceKind::Realtor => "realtor",
            SourceKind::Redfin => "redfin",
            SourceKind::Unknown => "unknown",
        }
    }

    /// Human-readable provenance label attached to every mapped field
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::StellarMls => "Stellar MLS PDF",
            SourceKind::Zillow => "Zillow",
            SourceKind::Realtor => "Realtor.com",
            SourceKind::Redfin => "Redfin",
            SourceKind::Unknown => "MLS PDF",
        }
    }

    /// Trust tier assigned to values originating from this provider
    pub fn default_trust_tier(&self) -> TrustTier {
        match self {
            SourceKind::StellarMls => TrustTier::Authoritative,
            SourceKind::Zillow | SourceKind::Realtor | SourceKind::Redfin => TrustTier::DataApi,
            SourceKind::Unknown => TrustTier::Inferred,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// Confidence label attached to a mapped field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldConfidence {
    /// Raw key found in the synonym table
    High,
    /// Raw key unknown; canonical key synthesized from it
    Medium,
}

impl fmt::Display for FieldConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldConfidence::High => write!(f, "High"),
            FieldConfidence::Medium => write!(f, "Medium"),
        }
    }
}

/// Lookup phase that produced a canonical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Raw key equals a synonym verbatim
    Exact,
    /// Raw key equals a synonym after stripping to lowercase alphanumerics
    Normalized,
    /// No synonym; key derived from the raw key itself
    AdHoc,
}

impl MatchKind {
    /// Confidence label implied by the lookup phase
    pub fn confidence(&self) -> FieldConfidence {
        match self {
            MatchKind::Exact | MatchKind::Normalized => FieldConfidence::High,
            MatchKind::AdHoc => FieldConfidence::Medium,
        }
    }
}

/// One raw field placed on the canonical schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedField {
    /// Canonical schema key (or ad-hoc key for unknown raw fields)
    pub canonical_key: String,
    /// Raw key the value came from
    pub raw_key: String,
    /// Field value (annualized for monthly HOA amounts)
    pub value: Value,
    /// Provider label, e.g. "Stellar MLS PDF"
    pub source: String,
    /// High for table matches, Medium for ad-hoc keys
    pub confidence: FieldConfidence,
    /// Lookup phase that matched
    pub match_kind: MatchKind,
}

/// Canonical record for one document: canonical key → mapped field
pub type MappedRecord = BTreeMap<String, MappedField>;

// ============================================================================
// Resolution
// ============================================================================

/// Source reliability ordinal, 1 (most trusted) to 6 (least trusted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TrustTier {
    /// Systems of record: MLS, county appraiser, tax collector
    Authoritative = 1,
    /// Geocoding / mapping APIs
    Geospatial = 2,
    /// Paid or free data APIs and listing portals
    DataApi = 3,
    /// Primary web-search model
    PrimarySearch = 4,
    /// Secondary web-search models
    SecondarySearch = 5,
    /// Model-inferred, unsourced
    Inferred = 6,
}

impl TrustTier {
    /// Tier from its ordinal; `None` outside 1..=6
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(TrustTier::Authoritative),
            2 => Some(TrustTier::Geospatial),
            3 => Some(TrustTier::DataApi),
            4 => Some(TrustTier::PrimarySearch),
            5 => Some(TrustTier::SecondarySearch),
            6 => Some(TrustTier::Inferred),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Tiers 1-5 are accepted without cross-validation
    pub fn is_trusted(&self) -> bool {
        *self != TrustTier::Inferred
    }
}

impl From<TrustTier> for u8 {
    fn from(tier: TrustTier) -> Self {
        tier.ordinal()
    }
}

impl TryFrom<u8> for TrustTier {
    type Error = String;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        TrustTier::from_ordinal(ordinal).ok_or_else(|| format!("trust tier out of range: {ordinal}"))
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.ordinal())
    }
}

/// A numeric value offered by one source for a resolvable quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateValue {
    pub value: f64,
    pub tier: TrustTier,
    pub source: String,
}

impl CandidateValue {
    pub fn new(value: f64, tier: TrustTier, source: impl Into<String>) -> Self {
        Self {
            value,
            tier,
            source: source.into(),
        }
    }

    /// Non-finite and non-positive values carry no information
    pub fn is_usable(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

/// Rule that produced a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionMethod {
    #[serde(rename = "direct-trusted")]
    DirectTrusted,
    #[serde(rename = "calculated-ratio")]
    CalculatedRatio,
    #[serde(rename = "calculated-ratio-averaged")]
    CalculatedRatioAveraged,
    #[serde(rename = "peer-city-inferred")]
    PeerCityInferred,
    #[serde(rename = "tier6-unvalidated")]
    Tier6Unvalidated,
    #[serde(rename = "fallback-default")]
    FallbackDefault,
}

impl ResolutionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMethod::DirectTrusted => "direct-trusted",
            ResolutionMethod::CalculatedRatio => "calculated-ratio",
            ResolutionMethod::CalculatedRatioAveraged => "calculated-ratio-averaged",
            ResolutionMethod::PeerCityInferred => "peer-city-inferred",
            ResolutionMethod::Tier6Unvalidated => "tier6-unvalidated",
            ResolutionMethod::FallbackDefault => "fallback-default",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence attached to a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionConfidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for ResolutionConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionConfidence::High => write!(f, "high"),
            ResolutionConfidence::Medium => write!(f, "medium"),
            ResolutionConfidence::Low => write!(f, "low"),
        }
    }
}

/// Single value chosen for a quantity, with an audit trail
///
/// Always recomputed from the full candidate set; never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedValue {
    pub value: f64,
    pub method: ResolutionMethod,
    pub confidence: ResolutionConfidence,
    pub explanation: String,
}
