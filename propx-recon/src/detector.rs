//! Source Type Detector
//!
//! Classifies which provider's field-naming convention a raw batch uses by
//! counting keyword-signature hits in the batch's key set.
//!
//! # Algorithm
//! 1. Lower-case every raw key and join them with single spaces
//! 2. For each profile, count signatures that occur as substrings of that text
//! 3. Walk profiles in priority order; the first whose count reaches its
//!    threshold wins
//! 4. No winner: default to Stellar MLS (the primary upload format)

use crate::types::{RawFieldRecord, SourceKind};
use tracing::debug;

/// Keyword signature for one provider
#[derive(Debug, Clone, Copy)]
pub struct SourceProfile {
    pub kind: SourceKind,
    /// Lower-case substrings characteristic of this provider's field names
    pub signatures: &'static [&'static str],
    /// Minimum number of distinct signature hits
    pub threshold: usize,
}

/// Stellar MLS CustomerFull sheet field names
const STELLAR_MLS_SIGNATURES: &[&str] = &[
    "subdiv",
    "adom",
    "cdom",
    "bldg name",
    "floor #",
    "ext construction",
    "heated area",
    "total annual assoc fees",
    "hoa / comm assn",
    "legal desc",
    "se/tp/rg",
    "tax id",
    "homestead",
    "cdd",
    "flooring covering",
    "interior feat",
    "ext features",
    "appliances incl",
];

const ZILLOW_SIGNATURES: &[&str] = &[
    "zestimate",
    "rent zestimate",
    "zillow home id",
    "zillow url",
    "zillow estimate",
    "home value",
    "property taxes",
];

const REALTOR_SIGNATURES: &[&str] = &[
    "realtor listing id",
    "realtor.com",
    "property history",
    "listing courtesy",
    "mls information",
];

const REDFIN_SIGNATURES: &[&str] = &["redfin estimate", "redfin listing", "hot home", "redfin"];

/// Profiles in tie-break priority order
pub const SOURCE_PROFILES: [SourceProfile; 4] = [
    SourceProfile {
        kind: SourceKind::StellarMls,
        signatures: STELLAR_MLS_SIGNATURES,
        threshold: 3,
    },
    SourceProfile {
        kind: SourceKind::Zillow,
        signatures: ZILLOW_SIGNATURES,
        threshold: 2,
    },
    SourceProfile {
        kind: SourceKind::Realtor,
        signatures: REALTOR_SIGNATURES,
        threshold: 2,
    },
    SourceProfile {
        kind: SourceKind::Redfin,
        signatures: REDFIN_SIGNATURES,
        threshold: 2,
    },
];

/// Kind assumed when no profile reaches its threshold
pub const DEFAULT_SOURCE_KIND: SourceKind = SourceKind::StellarMls;

impl SourceProfile {
    /// Number of this profile's signatures present in `blob`
    pub fn hit_count(&self, blob: &str) -> usize {
        self.signatures.iter().filter(|sig| blob.contains(*sig)).count()
    }
}

/// Detect the provider convention of a set of raw keys
pub fn detect_source_kind<'a, I>(keys: I) -> SourceKind
where
    I: IntoIterator<Item = &'a str>,
{
    let blob = keys
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    for profile in SOURCE_PROFILES.iter() {
        let hits = profile.hit_count(&blob);
        if hits >= profile.threshold {
            debug!(
                kind = %profile.kind,
                hits = hits,
                threshold = profile.threshold,
                "Source type detected"
            );
            return profile.kind;
        }
    }

    debug!(default = %DEFAULT_SOURCE_KIND, "No source signature reached threshold");
    DEFAULT_SOURCE_KIND
}

/// Detect the provider convention of a raw record's keys
pub fn detect_record_source(record: &RawFieldRecord) -> SourceKind {
    detect_source_kind(record.keys().map(String::as_str))
}
