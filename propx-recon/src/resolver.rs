//! Confidence-Tiered Resolver
//!
//! Chooses one value for a derived ratio quantity (e.g. effective tax rate =
//! annual taxes ÷ assessed value × 100) when several sources disagree.
//!
//! # Precedence
//! The first satisfied step wins:
//! 1. **direct-trusted** - most trusted tier 1-5 candidate (high)
//! 2. **calculated-ratio** - numerator ÷ denominator × scale (high); averaged
//!    with the tier-6 value when the two agree within tolerance
//! 3. **peer-city-inferred** - mean of same-locality peers' steps 1-2
//!    (high with 2+ peers, medium with one)
//! 4. **tier6-unvalidated** - first tier-6 candidate (low)
//! 5. **fallback-default** - 0 (low)
//!
//! Candidates that are non-finite or not strictly positive count as absent.
//! [`TieredResolver::cross_validate`] is a standalone helper for callers that
//! hold several tier-6 sources; it is not a precedence step.
//! Nothing is cached: every call recomputes from the supplied entities.

use crate::types::{
    CandidateValue, ResolutionConfidence, ResolutionMethod, ResolvedValue, TrustTier,
};
use propx_common::ResolverSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slack on the inclusive tolerance boundary for floating-point rounding
pub const AGREEMENT_EPSILON: f64 = 1e-9;

/// One entity's inputs for a resolvable ratio quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverEntity {
    /// Unique id within a batch
    pub id: String,
    /// Grouping key for peer inference, e.g. city
    pub locality: String,
    /// Ratio numerator, e.g. annual taxes
    pub numerator: Option<f64>,
    /// Ratio denominator, e.g. assessed value
    pub denominator: Option<f64>,
    /// Directly reported values with their trust tiers
    pub candidates: Vec<CandidateValue>,
}

impl ResolverEntity {
    pub fn new(id: impl Into<String>, locality: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            locality: locality.into(),
            ..Default::default()
        }
    }

    pub fn with_ratio_inputs(mut self, numerator: f64, denominator: f64) -> Self {
        self.numerator = Some(numerator);
        self.denominator = Some(denominator);
        self
    }

    pub fn with_candidate(mut self, candidate: CandidateValue) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Same non-empty locality, compared case-insensitively
    fn shares_locality(&self, other: &ResolverEntity) -> bool {
        let mine = self.locality.trim();
        !mine.is_empty() && mine.to_lowercase() == other.locality.trim().to_lowercase()
    }

    fn usable_tier6(&self) -> Vec<&CandidateValue> {
        self.candidates
            .iter()
            .filter(|c| c.tier == TrustTier::Inferred && c.is_usable())
            .collect()
    }
}

/// Resolver over a fixed tolerance and ratio scale
#[derive(Debug, Clone)]
pub struct TieredResolver {
    tolerance: f64,
    ratio_scale: f64,
}

impl TieredResolver {
    pub fn new(settings: &ResolverSettings) -> Self {
        Self {
            tolerance: settings.tolerance,
            ratio_scale: settings.ratio_scale,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// True when `a` and `b` differ by at most the tolerance
    ///
    /// Decimal inputs such as 0.7 and 0.9 differ by slightly more than 0.2 in
    /// binary floating point, so the comparison allows [`AGREEMENT_EPSILON`].
    pub fn agrees(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance + AGREEMENT_EPSILON
    }

    /// N-way cross-validation: mean of 2+ candidates that all agree with the first
    ///
    /// Returns `None` for fewer than two candidates or any disagreement.
    pub fn cross_validate(&self, candidates: &[CandidateValue]) -> Option<f64> {
        let first = candidates.first()?.value;
        if candidates.len() < 2 {
            return None;
        }
        if !candidates.iter().all(|c| self.agrees(first, c.value)) {
            debug!(
                values = ?candidates.iter().map(|c| c.value).collect::<Vec<_>>(),
                tolerance = self.tolerance,
                "Candidates disagree, cross-validation rejected"
            );
            return None;
        }
        Some(mean(candidates.iter().map(|c| c.value)))
    }

    /// Numerator ÷ denominator × scale, when both inputs are positive
    pub fn ratio(&self, entity: &ResolverEntity) -> Option<f64> {
        let numerator = entity.numerator.filter(|n| n.is_finite() && *n > 0.0)?;
        let denominator = entity.denominator.filter(|d| d.is_finite() && *d > 0.0)?;
        let ratio = numerator / denominator * self.ratio_scale;
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }

    /// Steps 1-2: what the entity's own data supports
    pub fn resolve_own(&self, entity: &ResolverEntity) -> Option<ResolvedValue> {
        // Step 1: trusted tiers, lowest ordinal first, earliest on ties
        if let Some(best) = entity
            .candidates
            .iter()
            .filter(|c| c.tier.is_trusted() && c.is_usable())
            .min_by_key(|c| c.tier)
        {
            return Some(ResolvedValue {
                value: best.value,
                method: ResolutionMethod::DirectTrusted,
                confidence: ResolutionConfidence::High,
                explanation: format!("From {} ({})", best.source, best.tier),
            });
        }

        // Step 2: computed ratio, optionally corroborated by tier 6
        let ratio = self.ratio(entity)?;
        if let Some(tier6) = self.tier6_reference(entity) {
            if self.agrees(tier6, ratio) {
                return Some(ResolvedValue {
                    value: (tier6 + ratio) / 2.0,
                    method: ResolutionMethod::CalculatedRatioAveraged,
                    confidence: ResolutionConfidence::High,
                    explanation: format!(
                        "Averaged Tier 6 value {:.2} with calculated {:.2} (agreement within {})",
                        tier6, ratio, self.tolerance
                    ),
                });
            }
            debug!(
                entity = %entity.id,
                tier6 = tier6,
                ratio = ratio,
                "Tier 6 value disagrees with calculated ratio"
            );
        }

        Some(ResolvedValue {
            value: ratio,
            method: ResolutionMethod::CalculatedRatio,
            confidence: ResolutionConfidence::High,
            explanation: format!(
                "Calculated from {} / {} x {}",
                entity.numerator.unwrap_or_default(),
                entity.denominator.unwrap_or_default(),
                self.ratio_scale
            ),
        })
    }

    /// Tier-6 value compared against the ratio: consensus if any, else the first
    fn tier6_reference(&self, entity: &ResolverEntity) -> Option<f64> {
        let tier6: Vec<CandidateValue> = entity.usable_tier6().into_iter().cloned().collect();
        self.cross_validate(&tier6)
            .or_else(|| tier6.first().map(|c| c.value))
    }

    /// Resolve `entity` given every entity currently available
    pub fn resolve(&self, entity: &ResolverEntity, all: &[ResolverEntity]) -> ResolvedValue {
        let resolved = self.resolve_inner(entity, all);
        debug!(
            entity = %entity.id,
            method = %resolved.method,
            confidence = %resolved.confidence,
            value = resolved.value,
            "Value resolved"
        );
        resolved
    }

    fn resolve_inner(&self, entity: &ResolverEntity, all: &[ResolverEntity]) -> ResolvedValue {
        if let Some(own) = self.resolve_own(entity) {
            return own;
        }

        // Step 3: peers in the same locality, steps 1-2 only
        let peer_values: Vec<f64> = all
            .iter()
            .filter(|p| p.id != entity.id && entity.shares_locality(p))
            .filter_map(|p| self.resolve_own(p))
            .map(|r| r.value)
            .collect();
        if !peer_values.is_empty() {
            let count = peer_values.len();
            return ResolvedValue {
                value: mean(peer_values.into_iter()),
                method: ResolutionMethod::PeerCityInferred,
                confidence: if count >= 2 {
                    ResolutionConfidence::High
                } else {
                    ResolutionConfidence::Medium
                },
                explanation: format!(
                    "Inferred from {} {} in {}",
                    count,
                    if count == 1 { "peer" } else { "peers" },
                    entity.locality.trim()
                ),
            };
        }

        // Step 4: last resort, tier-6 without corroboration
        if let Some(first) = entity.usable_tier6().first() {
            return ResolvedValue {
                value: first.value,
                method: ResolutionMethod::Tier6Unvalidated,
                confidence: ResolutionConfidence::Low,
                explanation: format!("From {} (Tier 6, unvalidated)", first.source),
            };
        }
        ResolvedValue {
            value: 0.0,
            method: ResolutionMethod::FallbackDefault,
            confidence: ResolutionConfidence::Low,
            explanation: "No data available".to_string(),
        }
    }

    /// Resolve every entity against the whole batch, in input order
    pub fn resolve_all(&self, entities: &[ResolverEntity]) -> Vec<(String, ResolvedValue)> {
        entities
            .iter()
            .map(|e| (e.id.clone(), self.resolve(e, entities)))
            .collect()
    }
}

impl Default for TieredResolver {
    fn default() -> Self {
        Self::new(&ResolverSettings::default())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
