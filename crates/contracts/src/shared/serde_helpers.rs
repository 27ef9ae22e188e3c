//! Lenient field deserializers.
//!
//! The analytics API exports CSV-backed records, so identifiers such as phone
//! numbers or zip codes arrive as JSON numbers for some rows and as strings
//! for others.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Accepts a JSON string or number and keeps it as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "string_or_number")]
        value: String,
    }

    fn parse(json: &str) -> String {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        assert_eq!(parse(r#"{"value": "10115"}"#), "10115");
        assert_eq!(parse(r#"{"value": 10115}"#), "10115");
        assert_eq!(parse(r#"{"value": 10115.0}"#), "10115");
        assert_eq!(parse(r#"{"value": 1.5}"#), "1.5");
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": true}"#).is_err());
    }
}
