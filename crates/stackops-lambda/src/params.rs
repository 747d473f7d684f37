// UserParameters decoding and validation

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys every invocation must supply, checked in this order.
pub const REQUIRED_KEYS: [&str; 3] = ["stack", "artifact", "file"];

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("UserParameters could not be decoded as JSON")]
    Decode(#[source] serde_json::Error),

    #[error("UserParameters must be a JSON object")]
    NotObject,

    #[error("Your UserParameters JSON must include the {0} key")]
    MissingField(&'static str),
}

/// Decode the UserParameters JSON string and check the required keys.
/// The parsed mapping is returned unchanged: no coercion, no defaults.
pub fn parse_user_params(raw: &str) -> Result<Map<String, Value>, ParamsError> {
    let value: Value = serde_json::from_str(raw).map_err(ParamsError::Decode)?;
    let Value::Object(map) = value else {
        return Err(ParamsError::NotObject);
    };
    for key in REQUIRED_KEYS {
        if !map.contains_key(key) {
            return Err(ParamsError::MissingField(key));
        }
    }
    Ok(map)
}
