//! Label input normalization
//!
//! Raw label values arrive untyped (strings from a form, numbers or nulls
//! from JSON, or nothing at all). Everything is coerced to `f64`, and
//! anything that is not a finite number becomes `0.0`.

use serde::Deserialize;
use serde_json::Value;

/// Field names accepted on input, in label order
pub const LABEL_FIELDS: [&str; 9] = [
    "serving_g", "calories", "protein", "carbs", "sugars", "fibre", "fat", "satfat", "sodium",
];

/// Raw, unvalidated label values as received
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelInput {
    pub serving_g: Option<Value>,
    pub calories: Option<Value>,
    pub protein: Option<Value>,
    pub carbs: Option<Value>,
    pub sugars: Option<Value>,
    pub fibre: Option<Value>,
    pub fat: Option<Value>,
    pub satfat: Option<Value>,
    pub sodium: Option<Value>,
}

/// Normalized label values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelValues {
    pub serving_g: f64,
    pub calories: f64, // kcal
    pub protein: f64,
    pub carbs: f64,
    pub sugars: f64,
    pub fibre: f64,
    pub fat: f64,
    pub satfat: f64,
    pub sodium: f64, // usually mg, not converted
}

impl LabelInput {
    /// Build an input from form-style `(field, value)` pairs.
    ///
    /// Returns the input together with the names that did not match any
    /// label field. Repeated fields keep the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = Self::default();
        let mut unknown = Vec::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            if !input.set_field(name, Value::String(value.into())) {
                unknown.push(name.to_string());
            }
        }
        (input, unknown)
    }

    /// Set a field by name. Returns false when the name is not a label field.
    pub fn set_field(&mut self, name: &str, value: Value) -> bool {
        let slot = match name.trim() {
            "serving_g" => &mut self.serving_g,
            "calories" => &mut self.calories,
            "protein" => &mut self.protein,
            "carbs" => &mut self.carbs,
            "sugars" => &mut self.sugars,
            "fibre" => &mut self.fibre,
            "fat" => &mut self.fat,
            "satfat" => &mut self.satfat,
            "sodium" => &mut self.sodium,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Coerce every field to a number
    pub fn normalize(&self) -> LabelValues {
        LabelValues {
            serving_g: coerce("serving_g", self.serving_g.as_ref()),
            calories: coerce("calories", self.calories.as_ref()),
            protein: coerce("protein", self.protein.as_ref()),
            carbs: coerce("carbs", self.carbs.as_ref()),
            sugars: coerce("sugars", self.sugars.as_ref()),
            fibre: coerce("fibre", self.fibre.as_ref()),
            fat: coerce("fat", self.fat.as_ref()),
            satfat: coerce("satfat", self.satfat.as_ref()),
            sodium: coerce("sodium", self.sodium.as_ref()),
        }
    }
}

/// Coerce one raw value to a finite number, falling back to `0.0`.
///
/// Numbers pass through, strings are trimmed and parsed, booleans count
/// as `1.0`/`0.0`. Nulls, arrays, objects and non-finite values are `0.0`.
pub fn normalize_measurement(raw: Option<&Value>) -> f64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_numeric(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse a label string as a float.
///
/// Digit-group underscores ("1_000") are accepted, but only as a single
/// `_` with a digit on each side.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }

    let bytes = trimmed.as_bytes();
    let mut digits = String::with_capacity(trimmed.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i > 0 && bytes[i - 1].is_ascii_digit();
            let after = bytes.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !(before && after) {
                return None;
            }
        } else {
            digits.push(b as char);
        }
    }
    digits.parse::<f64>().ok()
}

fn coerce(field: &'static str, raw: Option<&Value>) -> f64 {
    let value = normalize_measurement(raw);
    if let Some(raw) = raw {
        if value == 0.0 && !raw.is_null() && !looks_like_zero(raw) {
            tracing::debug!(field, raw = %raw, "Label value is not a number, using 0");
        }
    }
    value
}

/// True when a raw value legitimately spells zero ("0", 0, "0.0", false)
fn looks_like_zero(raw: &Value) -> bool {
    match raw {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => parse_numeric(s) == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_numbers_and_strings() {
        assert_eq!(normalize_measurement(Some(&json!(12))), 12.0);
        assert_eq!(normalize_measurement(Some(&json!(3.5))), 3.5);
        assert_eq!(normalize_measurement(Some(&json!("12"))), 12.0);
        assert_eq!(normalize_measurement(Some(&json!(" 3.5 "))), 3.5);
        assert_eq!(normalize_measurement(Some(&json!("1e2"))), 100.0);
        assert_eq!(normalize_measurement(Some(&json!("-4"))), -4.0);
    }

    #[test]
    fn test_normalize_garbage_to_zero() {
        assert_eq!(normalize_measurement(None), 0.0);
        assert_eq!(normalize_measurement(Some(&Value::Null)), 0.0);
        assert_eq!(normalize_measurement(Some(&json!(""))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("abc"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("12g"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!([1, 2]))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!({"g": 1}))), 0.0);
    }

    #[test]
    fn test_normalize_non_finite_to_zero() {
        assert_eq!(normalize_measurement(Some(&json!("nan"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("inf"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("-infinity"))), 0.0);
    }

    #[test]
    fn test_normalize_digit_group_underscores() {
        assert_eq!(normalize_measurement(Some(&json!("1_000"))), 1000.0);
        assert_eq!(normalize_measurement(Some(&json!(" 1_000.5 "))), 1000.5);
        assert_eq!(normalize_measurement(Some(&json!("1e1_0"))), 1e10);
        assert_eq!(normalize_measurement(Some(&json!("_1"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("1_"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("1__0"))), 0.0);
        assert_eq!(normalize_measurement(Some(&json!("1_.5"))), 0.0);
    }

    #[test]
    fn test_normalize_other_float_spellings() {
        assert_eq!(normalize_measurement(Some(&json!("5."))), 5.0);
        assert_eq!(normalize_measurement(Some(&json!(".5"))), 0.5);
        assert_eq!(normalize_measurement(Some(&json!("+5"))), 5.0);
        assert_eq!(normalize_measurement(Some(&json!("1E2"))), 100.0);
    }

    #[test]
    fn test_normalize_booleans() {
        assert_eq!(normalize_measurement(Some(&json!(true))), 1.0);
        assert_eq!(normalize_measurement(Some(&json!(false))), 0.0);
    }

    #[test]
    fn test_deserialize_mixed_json_body() {
        let input: LabelInput = serde_json::from_value(json!({
            "serving_g": "100",
            "calories": 200,
            "protein": null,
            "unrelated": "ignored"
        }))
        .unwrap();
        let values = input.normalize();
        assert_eq!(values.serving_g, 100.0);
        assert_eq!(values.calories, 200.0);
        assert_eq!(values.protein, 0.0);
        assert_eq!(values.sodium, 0.0);
    }

    #[test]
    fn test_from_pairs() {
        let (input, unknown) = LabelInput::from_pairs(vec![
            ("serving_g", "30"),
            ("fibre", "2.5"),
            ("sugar", "4"),
            ("fibre", "3"),
        ]);
        assert_eq!(unknown, vec!["sugar".to_string()]);
        let values = input.normalize();
        assert_eq!(values.serving_g, 30.0);
        assert_eq!(values.fibre, 3.0);
        assert_eq!(values.sugars, 0.0);
    }

    #[test]
    fn test_every_label_field_is_settable() {
        let mut input = LabelInput::default();
        for field in LABEL_FIELDS {
            assert!(input.set_field(field, json!(1)), "{} rejected", field);
        }
        let values = input.normalize();
        assert_eq!(values.sodium, 1.0);
        assert_eq!(values.serving_g, 1.0);
    }
}
