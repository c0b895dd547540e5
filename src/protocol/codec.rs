//! Body codec
//!
//! Encoding and decoding of user records in request/response bodies.
//!
//! ## Wire Format (JSON)
//! ```text
//! {"id": <integer>, "name": <string>}
//! ```
//!
//! - Create: `id` omitted, `null` or `0` means auto-assign
//! - Update: `id` omitted means `0`, `name` omitted means `""`
//! - Encoded bodies end with a single `\n`

use serde::Deserialize;

use crate::error::{Result, UserStoreError};
use crate::store::{NewUser, User};

/// Content type produced by `JsonCodec`
pub const APPLICATION_JSON: &str = "application/json";

/// Pluggable encode/decode step for record bodies
pub trait Codec: Send + Sync {
    /// Content type of encoded bodies
    fn content_type(&self) -> &'static str;

    /// Decode a create body
    fn decode_new_user(&self, body: &[u8]) -> Result<NewUser>;

    /// Decode an update body
    fn decode_user(&self, body: &[u8]) -> Result<User>;

    /// Encode a record for a response body
    fn encode_user(&self, user: &User) -> Result<Vec<u8>>;
}

/// Lenient wire shape: both fields optional, like a zero-valued struct
#[derive(Debug, Deserialize)]
struct UserBody {
    #[serde(default)]
    id: Option<i64>,

    #[serde(default)]
    name: Option<String>,
}

/// serde_json-backed codec
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    fn decode_body(body: &[u8]) -> Result<UserBody> {
        serde_json::from_slice(body).map_err(|e| UserStoreError::Codec(e.to_string()))
    }
}

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        APPLICATION_JSON
    }

    fn decode_new_user(&self, body: &[u8]) -> Result<NewUser> {
        let body = Self::decode_body(body)?;
        Ok(NewUser {
            // 0 on the wire is the "unset" sentinel
            id: body.id.filter(|&id| id != 0),
            name: body.name.unwrap_or_default(),
        })
    }

    fn decode_user(&self, body: &[u8]) -> Result<User> {
        let body = Self::decode_body(body)?;
        Ok(User {
            id: body.id.unwrap_or_default(),
            name: body.name.unwrap_or_default(),
        })
    }

    fn encode_user(&self, user: &User) -> Result<Vec<u8>> {
        let mut bytes =
            serde_json::to_vec(user).map_err(|e| UserStoreError::Codec(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_new_user_without_id_auto_assigns() {
        let new_user = JsonCodec.decode_new_user(br#"{"name":"Alice"}"#).unwrap();
        assert_eq!(new_user, NewUser::named("Alice"));
    }

    #[test]
    fn test_decode_new_user_zero_and_null_id_auto_assign() {
        let zero = JsonCodec.decode_new_user(br#"{"id":0,"name":"A"}"#).unwrap();
        let null = JsonCodec.decode_new_user(br#"{"id":null,"name":"A"}"#).unwrap();
        assert_eq!(zero.id, None);
        assert_eq!(null.id, None);
    }

    #[test]
    fn test_decode_new_user_explicit_id() {
        let new_user = JsonCodec.decode_new_user(br#"{"id":5,"name":"Bob"}"#).unwrap();
        assert_eq!(new_user, NewUser::with_id(5, "Bob"));
    }

    #[test]
    fn test_decode_missing_name_is_empty() {
        let new_user = JsonCodec.decode_new_user(br#"{"id":5}"#).unwrap();
        assert_eq!(new_user.name, "");
    }

    #[test]
    fn test_decode_user_defaults_missing_fields() {
        let user = JsonCodec.decode_user(br#"{"name":"x"}"#).unwrap();
        assert_eq!(user, User::new(0, "x"));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let user = JsonCodec
            .decode_user(br#"{"id":3,"name":"x","email":"x@example.com"}"#)
            .unwrap();
        assert_eq!(user, User::new(3, "x"));
    }

    #[test]
    fn test_decode_malformed_body() {
        for body in ["", "{", "not json", r#"{"id":"5","name":"x"}"#, r#"{"id":1.5}"#] {
            assert!(
                matches!(JsonCodec.decode_user(body.as_bytes()), Err(UserStoreError::Codec(_))),
                "expected codec error for {:?}",
                body
            );
        }
    }

    #[test]
    fn test_encode_user_field_names() {
        let bytes = JsonCodec.encode_user(&User::new(1, "Alice")).unwrap();
        assert_eq!(bytes, b"{\"id\":1,\"name\":\"Alice\"}\n");
    }
}
