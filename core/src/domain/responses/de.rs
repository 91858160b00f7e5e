//! Deserialization helpers for loosely typed payload fields

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serializer};

/// Timestamp format used by the search payloads
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(f64),
    Text(String),
}

/// Decimal that may arrive as a JSON number or a numeric string (`"0.10000000"`)
pub(crate) fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDecimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDecimal::Number(value)) => Ok(Some(value)),
        Some(RawDecimal::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawDecimal::Text(text)) => text.trim().parse().map(Some).map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&text), &"a decimal number")
        }),
    }
}

/// Optional `YYYY-MM-DD HH:MM:SS` timestamp
pub(crate) fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => NaiveDateTime::parse_from_str(text.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Write an optional timestamp back in the `YYYY-MM-DD HH:MM:SS` form
pub(crate) fn serialize_opt_datetime<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}
