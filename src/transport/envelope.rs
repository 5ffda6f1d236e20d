use serde_json::Value;

use crate::domain::{Action, ApiKey};

/// Extra body fields merged into the request envelope.
pub type Params = serde_json::Map<String, Value>;

/// Build `{ key, action, ...extra }`.
///
/// Extras are merged after the mandatory fields, so an extra named `key` or
/// `action` replaces the mandatory value. Such collisions are logged.
pub fn encode_envelope(key: &ApiKey, action: Action, extra: Params) -> Value {
    let mut body = Params::new();
    body.insert(ApiKey::FIELD.to_owned(), Value::from(key.as_str()));
    body.insert(Action::FIELD.to_owned(), Value::from(action.as_str()));

    for (name, value) in extra {
        if name == ApiKey::FIELD || name == Action::FIELD {
            tracing::warn!(
                field = %name,
                action = %action,
                "extra parameter overrides a mandatory envelope field"
            );
        }
        body.insert(name, value);
    }

    Value::Object(body)
}
