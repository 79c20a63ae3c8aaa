//! Value Normalizer
//!
//! Pure unit and format conversions shared by the preprocessor, mapper and
//! batch adapter. Every function is total: unparseable input yields `None`.

use serde_json::Value;

/// Months per year, used to annualize monthly amounts
const MONTHS_PER_YEAR: f64 = 12.0;

/// Number words recognised by [`parse_text_number`], index + 1 = value
const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// True for values that carry no data and must never be mapped
///
/// Covers JSON null, empty (or whitespace-only) strings and the "N/A" / "n/a"
/// placeholders extractors emit for missing fields.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty() || s == "N/A" || s == "n/a",
        _ => false,
    }
}

/// Parse a numeric JSON value or a numeric / currency-formatted string
///
/// `"$1,147.00"` → `1147.0`. Booleans, nulls and non-finite results yield `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number_str(s),
        _ => None,
    }
}

/// String form of [`parse_number`]
pub fn parse_number_str(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a monthly amount to its annual equivalent
///
/// Returns `None` for null or unparseable input.
pub fn annualize(monthly: &Value) -> Option<f64> {
    parse_number(monthly).map(|m| m * MONTHS_PER_YEAR)
}

/// Parse an English number word ("one" … "ten"), case-insensitive
pub fn parse_text_number(word: &str) -> Option<u32> {
    let word = word.trim().to_lowercase();
    NUMBER_WORDS
        .iter()
        .position(|w| *w == word)
        .map(|idx| idx as u32 + 1)
}

/// Parse a yes/no style flag
pub fn parse_yes_no(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(true),
            "no" | "n" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// JSON number for a finite float; integral values become integers
pub fn number_value(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!("N/A")));
        assert!(is_blank(&json!("n/a")));
        assert!(!is_blank(&json!("No")));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
    }

    #[test]
    fn test_parse_number_variants() {
        assert_eq!(parse_number(&json!(1147)), Some(1147.0));
        assert_eq!(parse_number(&json!(955.39)), Some(955.39));
        assert_eq!(parse_number(&json!("$1,147.00")), Some(1147.0));
        assert_eq!(parse_number(&json!(" 2 ")), Some(2.0));
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!("$")), None);
        assert_eq!(parse_number(&json!(true)), None);
        assert_eq!(parse_number(&Value::Null), None);
    }

    #[test]
    fn test_annualize() {
        assert_eq!(annualize(&json!(1147)), Some(13764.0));
        assert_eq!(annualize(&json!("$500")), Some(6000.0));
        assert_eq!(annualize(&json!(0)), Some(0.0));
        assert_eq!(annualize(&Value::Null), None);
        assert_eq!(annualize(&json!("monthly")), None);
    }

    #[test]
    fn test_annualize_keeps_cents() {
        let annual = annualize(&json!(333.33)).unwrap();
        assert!((annual - 3999.96).abs() < 1e-9);
    }

    #[test]
    fn test_text_numbers() {
        assert_eq!(parse_text_number("One"), Some(1));
        assert_eq!(parse_text_number(" TEN "), Some(10));
        assert_eq!(parse_text_number("seven"), Some(7));
        assert_eq!(parse_text_number("eleven"), None);
        assert_eq!(parse_text_number("2"), None);
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(parse_yes_no(&json!("Yes")), Some(true));
        assert_eq!(parse_yes_no(&json!("n")), Some(false));
        assert_eq!(parse_yes_no(&json!(true)), Some(true));
        assert_eq!(parse_yes_no(&json!(0)), Some(false));
        assert_eq!(parse_yes_no(&json!("Community")), None);
    }

    #[test]
    fn test_number_value_prefers_integers() {
        assert_eq!(number_value(2.0), json!(2));
        assert_eq!(number_value(13764.0), json!(13764));
        assert_eq!(number_value(1.5), json!(1.5));
        assert_eq!(number_value(f64::NAN), Value::Null);
    }
}
