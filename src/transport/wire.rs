use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};

use crate::domain::{Identifier, ItemOutcome};

pub const DEFAULT_ERROR_MESSAGE: &str = "Unable to make request to provider";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing field: {field}")]
    MissingField { field: &'static str },
}

/// Scalar returned by providers as either a JSON string or a JSON number.
///
/// Numbers keep their JSON token (`100.50` stays `"100.50"`); this relies on
/// serde_json's `arbitrary_precision` feature.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportText(String);

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(value) => Ok(Self(value)),
            serde_json::Value::Number(value) => Ok(Self(value.to_string())),
            other => Err(D::Error::custom(format!(
                "expected JSON string or number, got {other}"
            ))),
        }
    }
}

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn into_identifier(self) -> Identifier {
        Identifier::from_wire(&self.0)
    }
}

/// Boolean capability flag; some providers send `1`/`0`, `1.0`, or `"1"`/`"0"`.
/// Any other shape reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportFlag(bool);

impl<'de> Deserialize<'de> for TransportFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Bool(value) => value,
            serde_json::Value::Number(value) => value.as_f64().is_some_and(|number| number != 0.0),
            serde_json::Value::String(value) => {
                matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
            }
            _ => false,
        };
        Ok(Self(flag))
    }
}

impl TransportFlag {
    pub fn into_bool(self) -> bool {
        self.0
    }
}

/// Item value or `{"error": "..."}` in its place, told apart by the `error` field.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportItem<T> {
    Ok(T),
    Error(String),
}

impl<'de, T> Deserialize<'de> for TransportItem<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if let Some(message) = error_field(&value) {
            return Ok(Self::Error(message));
        }
        serde_json::from_value(value)
            .map(Self::Ok)
            .map_err(D::Error::custom)
    }
}

impl<T> TransportItem<T> {
    pub fn map_into<U>(self, f: impl FnOnce(T) -> U) -> ItemOutcome<U> {
        match self {
            Self::Ok(value) => ItemOutcome::Ok(f(value)),
            Self::Error(message) => ItemOutcome::Error { message },
        }
    }
}

fn error_field(value: &serde_json::Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    match error {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Message of a top-level `{"error": "..."}` body, if the body has one.
pub fn decode_error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    error_field(&value)
}

/// Message for a non-2xx response; falls back to [`DEFAULT_ERROR_MESSAGE`].
pub fn error_message_or_default(body: &str) -> String {
    decode_error_message(body).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_strings_and_numbers() {
        let text: TransportText = serde_json::from_str(r#""100.84""#).unwrap();
        assert_eq!(text.into_string(), "100.84");

        let text: TransportText = serde_json::from_str("100.50").unwrap();
        assert_eq!(text.into_string(), "100.50");

        let text: TransportText = serde_json::from_str("1e3").unwrap();
        assert_eq!(text.into_string(), "1e3");

        let text: TransportText = serde_json::from_str("23501").unwrap();
        assert_eq!(text.into_identifier(), Identifier::Number(23501));
    }

    #[test]
    fn flag_accepts_loose_booleans() {
        for (json, expected) in [
            ("true", true),
            ("false", false),
            ("1", true),
            (r#""0""#, false),
            ("1.0", true),
            ("0.0", false),
            ("null", false),
            (r#"{"on":true}"#, false),
        ] {
            let flag: TransportFlag = serde_json::from_str(json).unwrap();
            assert_eq!(flag.into_bool(), expected, "input: {json}");
        }
    }

    #[test]
    fn item_is_discriminated_by_error_field() {
        let item: TransportItem<TransportText> =
            serde_json::from_str(r#"{"error":"Incorrect order ID"}"#).unwrap();
        assert_eq!(item, TransportItem::Error("Incorrect order ID".to_owned()));

        let item: TransportItem<TransportText> = serde_json::from_str("7").unwrap();
        assert_eq!(
            item.map_into(TransportText::into_identifier),
            ItemOutcome::Ok(Identifier::Number(7))
        );
    }

    #[test]
    fn error_message_defaults_when_body_is_not_usable() {
        assert_eq!(
            error_message_or_default(r#"{"error":"Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(error_message_or_default("<html>"), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message_or_default(r#"{"ok":1}"#), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message_or_default(""), DEFAULT_ERROR_MESSAGE);
    }
}
