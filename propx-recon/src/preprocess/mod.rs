//! Compound Field Preprocessor
//!
//! Derives plain fields from composite raw fields before mapping, e.g.
//! `"Baths" = "2/0"` becomes `"Full Baths" = 2` and `"Half Baths" = 0`.
//!
//! # Guarantees
//! - Additive only: a rule writes a target key only when it is absent or blank
//! - Derived keys are appended to the record, after every raw key
//! - Running the preprocessor twice derives nothing the second time

pub mod rules;

use crate::normalizer::is_blank;
use crate::types::RawFieldRecord;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use rules::{
    default_rules, AliasCopyRule, PoolRule, PostalCodeRule, PrefixSplitRule, SlashSplitRule,
    TextNumberRule,
};

/// One compound-field derivation
pub trait CompoundRule: Send + Sync {
    /// Rule identifier for reports and logs
    fn name(&self) -> &'static str;

    /// Apply the rule to `record`, returning the keys it wrote
    ///
    /// Must never overwrite a non-blank value.
    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String>;
}

/// A rule that wrote at least one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFiring {
    pub rule: &'static str,
    pub derived_keys: Vec<String>,
}

/// What the preprocessor did to one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    pub firings: Vec<RuleFiring>,
}

impl PreprocessReport {
    /// True when no rule derived anything
    pub fn is_empty(&self) -> bool {
        self.firings.is_empty()
    }

    /// Every derived key, in derivation order
    pub fn derived_keys(&self) -> impl Iterator<Item = &str> {
        self.firings
            .iter()
            .flat_map(|f| f.derived_keys.iter().map(String::as_str))
    }

    pub fn fired(&self, rule: &str) -> bool {
        self.firings.iter().any(|f| f.rule == rule)
    }
}

/// Ordered set of compound rules
pub struct Preprocessor {
    rules: Vec<Box<dyn CompoundRule>>,
}

impl Preprocessor {
    /// Preprocessor with the built-in rule set
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<Box<dyn CompoundRule>>) -> Self {
        Self { rules }
    }

    /// Names of the configured rules, in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule once over `record`
    pub fn apply(&self, record: &mut RawFieldRecord) -> PreprocessReport {
        let mut report = PreprocessReport::default();

        for rule in &self.rules {
            let derived_keys = rule.apply(record);
            if derived_keys.is_empty() {
                continue;
            }
            debug!(rule = rule.name(), derived = ?derived_keys, "Compound rule fired");
            report.firings.push(RuleFiring {
                rule: rule.name(),
                derived_keys,
            });
        }

        report
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// True when `key` is absent or holds a blank value
pub(crate) fn is_vacant(record: &RawFieldRecord, key: &str) -> bool {
    record.get(key).map_or(true, is_blank)
}

/// Write `value` under `key` if vacant; returns whether it was written
///
/// A blank placeholder is removed first so the derived key lands at the end
/// of the record.
pub(crate) fn derive(record: &mut RawFieldRecord, key: &str, value: Value) -> bool {
    if !is_vacant(record, key) {
        return false;
    }
    record.remove(key);
    record.insert(key.to_string(), value);
    true
}

/// Non-blank string content of `key`, trimmed
pub(crate) fn text_of<'a>(record: &'a RawFieldRecord, key: &str) -> Option<&'a str> {
    match record.get(key) {
        Some(value) if !is_blank(value) => value.as_str().map(str::trim),
        _ => None,
    }
}
