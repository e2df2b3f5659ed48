//! Strict decode-or-fail boundary for structured responses.

use murillo_error::{GatewayError, GatewayErrorKind, MurilloResult};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Decode a structured response into a typed value.
///
/// Untyped JSON never crosses this boundary: a response that does not match
/// the expected shape fails with `SchemaViolation` carrying the serde
/// message, rather than leaking partially-valid data into the pipeline.
///
/// # Examples
///
/// ```
/// use murillo_gateway::decode_structured;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Copy { main_copy: String }
///
/// let value = serde_json::json!({"main_copy": "hello"});
/// let copy: Copy = decode_structured(value).unwrap();
/// assert_eq!(copy.main_copy, "hello");
///
/// let bad = serde_json::json!({"unrelated": 1});
/// assert!(decode_structured::<Copy>(bad).is_err());
/// ```
pub fn decode_structured<T: DeserializeOwned>(value: JsonValue) -> MurilloResult<T> {
    serde_json::from_value(value)
        .map_err(|e| GatewayError::new(GatewayErrorKind::SchemaViolation(e.to_string())).into())
}
