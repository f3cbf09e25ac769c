// Route handlers. Each runs only after its gate pipeline passed, so path ids and
// body shapes are already validated and referenced entities already resolved.

pub mod health;
pub mod todos;
pub mod users;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use health::health;

/// Decode a gated JSON body. A blank body decodes as `{}`.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"{}" } else { bytes };
    serde_json::from_slice(bytes).map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}
