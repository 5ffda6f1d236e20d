use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Provider API URL every request is posted to.
///
/// Invariant: non-empty after trimming and an absolute URL.
pub struct Endpoint(String);

impl Endpoint {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "endpoint";

    /// Create a validated [`Endpoint`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        url::Url::parse(trimmed).map_err(|err| ValidationError::InvalidEndpoint {
            input: trimmed.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Provider API key (`key`).
///
/// Invariant: not blank. The key is stored and sent exactly as given.
/// `Debug` output never contains the secret.
pub struct ApiKey(String);

impl ApiKey {
    /// Body field name used by the provider (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order, refill, or service identifier.
///
/// Providers accept both numeric and string ids. Numeric ids are sent as JSON
/// numbers in single-item fields; string ids are sent verbatim.
pub enum Identifier {
    Number(u64),
    Text(String),
}

impl Identifier {
    /// Interpret a token returned by the provider: all-digit tokens become
    /// [`Identifier::Number`], anything else is kept as text.
    pub fn from_wire(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.parse::<u64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }

    /// JSON value used for single-item request fields (`order`, `refill`, `service`).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Number(number) => serde_json::Value::from(*number),
            Self::Text(text) => serde_json::Value::from(text.as_str()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<usize> for Identifier {
    fn from(value: usize) -> Self {
        Self::Number(value as u64)
    }
}

/// Negative values are not valid provider ids; they are kept as text.
impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&Identifier> for Identifier {
    fn from(value: &Identifier) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_requires_absolute_url() {
        assert!(matches!(
            Endpoint::new("  "),
            Err(ValidationError::Empty {
                field: Endpoint::FIELD
            })
        ));
        assert!(matches!(
            Endpoint::new("provider.example/api/v2"),
            Err(ValidationError::InvalidEndpoint { .. })
        ));

        let endpoint = Endpoint::new(" https://provider.example/api/v2 ").unwrap();
        assert_eq!(endpoint.as_str(), "https://provider.example/api/v2");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.as_str(), "super-secret");
    }

    #[test]
    fn api_key_is_kept_verbatim() {
        let key = ApiKey::new(" abc ").unwrap();
        assert_eq!(key.as_str(), " abc ");
        assert!(ApiKey::new(" \t ").is_err());
    }

    #[test]
    fn identifier_from_signed_and_unsigned_integers() {
        assert_eq!(Identifier::from(42), Identifier::Number(42));
        assert_eq!(Identifier::from(42_i64), Identifier::Number(42));
        assert_eq!(Identifier::from(42_usize), Identifier::Number(42));
        assert_eq!(Identifier::from(-5), Identifier::Text("-5".to_owned()));
    }

    #[test]
    fn identifier_from_wire_prefers_numbers() {
        assert_eq!(Identifier::from_wire("42"), Identifier::Number(42));
        assert_eq!(Identifier::from_wire(" 42 "), Identifier::Number(42));
        assert_eq!(
            Identifier::from_wire("abc-1"),
            Identifier::Text("abc-1".to_owned())
        );
    }

    #[test]
    fn identifier_json_keeps_the_callers_kind() {
        assert_eq!(Identifier::from(42_u64).to_json(), serde_json::json!(42));
        assert_eq!(Identifier::from("42").to_json(), serde_json::json!("42"));
    }
}
