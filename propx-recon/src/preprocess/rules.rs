//! Built-in compound rules
//!
//! Every rule is a small value type configured with the raw source key(s) and
//! the derived target key(s), so the same rule kind can be reused for other
//! provider layouts.

use super::{derive, is_vacant, text_of, CompoundRule};
use crate::normalizer::{number_value, parse_number_str, parse_text_number, parse_yes_no};
use crate::types::RawFieldRecord;
use serde_json::Value;

// ============================================================================
// Slash-delimited counts
// ============================================================================

/// `"2/1"` in `source` → `first = 2`, `second = 1`
///
/// Applies only to strings with exactly one slash. A non-numeric half counts
/// as 0.
#[derive(Debug, Clone)]
pub struct SlashSplitRule {
    pub name: &'static str,
    pub source: &'static str,
    pub first: &'static str,
    pub second: &'static str,
}

impl CompoundRule for SlashSplitRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        let Some(text) = text_of(record, self.source) else {
            return Vec::new();
        };
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != 2 {
            return Vec::new();
        }
        let first = parse_number_str(parts[0]).unwrap_or(0.0);
        let second = parse_number_str(parts[1]).unwrap_or(0.0);

        let mut derived = Vec::new();
        if derive(record, self.first, number_value(first)) {
            derived.push(self.first.to_string());
        }
        if derive(record, self.second, number_value(second)) {
            derived.push(self.second.to_string());
        }
        derived
    }
}

// ============================================================================
// Pool description
// ============================================================================

/// Pool type for a heated in-ground pool
pub const POOL_IN_GROUND_HEATED: &str = "In-ground Heated";
pub const POOL_IN_GROUND: &str = "In-ground";
pub const POOL_ABOVE_GROUND: &str = "Above-ground";
pub const POOL_COMMUNITY: &str = "Community";

const NEGATIVE_WORDS: &[&str] = &["no", "none", "n", "false"];
const GENERIC_WORDS: &[&str] = &["private", "yes", "y", "true"];

/// Pool descriptions → presence flag plus type list
///
/// Qualifiers are scanned in precedence order: compound (heated in-ground),
/// simple (in-ground, above-ground), then generic ("private", "yes"), which
/// imply an in-ground pool. A community signal appends "Community" to the
/// list. A purely negative description yields `false` and no list.
#[derive(Debug, Clone)]
pub struct PoolRule {
    pub sources: &'static [&'static str],
    pub community_source: &'static str,
    pub presence_target: &'static str,
    pub type_target: &'static str,
}

impl PoolRule {
    /// Lower-cased description with in-ground / above-ground spellings unified
    fn description(&self, record: &RawFieldRecord) -> String {
        let parts: Vec<String> = self
            .sources
            .iter()
            .filter_map(|key| match record.get(*key) {
                Some(Value::String(_)) => text_of(record, key).map(str::to_string),
                Some(flag @ (Value::Bool(_) | Value::Number(_))) => {
                    parse_yes_no(flag).map(|b| (if b { "yes" } else { "no" }).to_string())
                }
                _ => None,
            })
            .collect();

        parts
            .join(", ")
            .to_lowercase()
            .replace("in ground", "in-ground")
            .replace("inground", "in-ground")
            .replace("above ground", "above-ground")
            .replace("aboveground", "above-ground")
    }

    /// Pool types implied by a description, most specific first
    fn pool_types(description: &str) -> Vec<&'static str> {
        let words: Vec<&str> = description
            .split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|w| !w.is_empty())
            .collect();

        let in_ground = description.contains("in-ground");
        let above_ground = description.contains("above-ground");

        if in_ground && words.contains(&"heated") {
            return vec![POOL_IN_GROUND_HEATED];
        }
        let mut types = Vec::new();
        if in_ground {
            types.push(POOL_IN_GROUND);
        }
        if above_ground {
            types.push(POOL_ABOVE_GROUND);
        }
        if types.is_empty() && words.iter().any(|w| GENERIC_WORDS.contains(w)) {
            types.push(POOL_IN_GROUND);
        }
        types
    }

    fn is_negative(description: &str) -> bool {
        let mut words = description
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .peekable();
        words.peek().is_some() && words.all(|w| NEGATIVE_WORDS.contains(&w))
    }

    fn community_signal(&self, record: &RawFieldRecord, description: &str) -> bool {
        description.contains("community")
            || text_of(record, self.community_source)
                .map(|t| t.to_lowercase().contains("pool"))
                .unwrap_or(false)
    }
}

impl CompoundRule for PoolRule {
    fn name(&self) -> &'static str {
        "pool_description"
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        // Each target is filled on its own; a populated flag still leaves
        // the type list derivable.
        if !is_vacant(record, self.presence_target) && !is_vacant(record, self.type_target) {
            return Vec::new();
        }

        let description = self.description(record);
        let mut derived = Vec::new();

        if Self::is_negative(&description) {
            if derive(record, self.presence_target, Value::Bool(false)) {
                derived.push(self.presence_target.to_string());
            }
            return derived;
        }

        let mut types = Self::pool_types(&description);
        if self.community_signal(record, &description) {
            types.push(POOL_COMMUNITY);
        }
        if types.is_empty() {
            return derived;
        }

        if derive(record, self.presence_target, Value::Bool(true)) {
            derived.push(self.presence_target.to_string());
        }
        let list = Value::Array(types.into_iter().map(Value::from).collect());
        if derive(record, self.type_target, list) {
            derived.push(self.type_target.to_string());
        }
        derived
    }
}

// ============================================================================
// Prefix of a delimited composite
// ============================================================================

/// `"11/20/2024 : Active"` → prefix `"11/20/2024"` into `target`
///
/// Applies only when the delimiter occurs exactly once.
#[derive(Debug, Clone)]
pub struct PrefixSplitRule {
    pub name: &'static str,
    pub source: &'static str,
    pub delimiter: char,
    pub target: &'static str,
}

impl CompoundRule for PrefixSplitRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        let Some(text) = text_of(record, self.source) else {
            return Vec::new();
        };
        if text.matches(self.delimiter).count() != 1 {
            return Vec::new();
        }
        let prefix = text
            .split(self.delimiter)
            .next()
            .map(str::trim)
            .unwrap_or_default();
        if prefix.is_empty() {
            return Vec::new();
        }

        let prefix = prefix.to_string();
        if derive(record, self.target, Value::String(prefix)) {
            vec![self.target.to_string()]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Number words
// ============================================================================

/// `"Two"` → `2`
#[derive(Debug, Clone)]
pub struct TextNumberRule {
    pub name: &'static str,
    pub source: &'static str,
    pub target: &'static str,
}

impl CompoundRule for TextNumberRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        let Some(n) = text_of(record, self.source).and_then(parse_text_number) else {
            return Vec::new();
        };
        if derive(record, self.target, Value::from(n)) {
            vec![self.target.to_string()]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Postal code
// ============================================================================

/// Last standalone 5-digit run of `source` into `target`
#[derive(Debug, Clone)]
pub struct PostalCodeRule {
    pub source: &'static str,
    pub target: &'static str,
}

/// Last run of exactly five ASCII digits bounded by non-digits
pub fn last_postal_code(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut found = None;
    let mut start = None;

    for (i, b) in bytes.iter().enumerate() {
        match (b.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s == 5 {
                    found = Some(&text[s..i]);
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        if bytes.len() - s == 5 {
            found = Some(&text[s..]);
        }
    }
    found
}

impl CompoundRule for PostalCodeRule {
    fn name(&self) -> &'static str {
        "postal_code"
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        let Some(zip) = text_of(record, self.source)
            .and_then(last_postal_code)
            .map(str::to_string)
        else {
            return Vec::new();
        };
        if derive(record, self.target, Value::String(zip)) {
            vec![self.target.to_string()]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Alias copies
// ============================================================================

/// Copy `source` verbatim into `target`
#[derive(Debug, Clone)]
pub struct AliasCopyRule {
    pub name: &'static str,
    pub source: &'static str,
    pub target: &'static str,
}

impl CompoundRule for AliasCopyRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, record: &mut RawFieldRecord) -> Vec<String> {
        if is_vacant(record, self.source) {
            return Vec::new();
        }
        let value = record.get(self.source).cloned().unwrap_or(Value::Null);
        if derive(record, self.target, value) {
            vec![self.target.to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Built-in rules for Stellar MLS style records
pub fn default_rules() -> Vec<Box<dyn CompoundRule>> {
    vec![
        Box::new(SlashSplitRule {
            name: "baths_split",
            source: "Baths",
            first: "Full Baths",
            second: "Half Baths",
        }),
        Box::new(PoolRule {
            sources: &["Pool", "Pool Features"],
            community_source: "Community Features",
            presence_target: "Pool Y/N",
            type_target: "Pool Type",
        }),
        Box::new(PrefixSplitRule {
            name: "list_date_prefix",
            source: "List Date/Status",
            delimiter: ':',
            target: "List Date",
        }),
        Box::new(TextNumberRule {
            name: "floors_in_unit_words",
            source: "Floors in Unit/Home",
            target: "Floors In Unit",
        }),
        Box::new(TextNumberRule {
            name: "levels_words",
            source: "Levels",
            target: "Number of Stories",
        }),
        Box::new(PostalCodeRule {
            source: "Address",
            target: "Zip Code",
        }),
        Box::new(AliasCopyRule {
            name: "parcel_id_alias",
            source: "Alt Key/Folio #",
            target: "Parcel ID",
        }),
        Box::new(AliasCopyRule {
            name: "garage_spaces_alias",
            source: "Spcs",
            target: "Garage Spaces",
        }),
    ]
}
