//! The wire codec: `B64U(JSON(header)) "." B64U(JSON(payload)) ["." B64U(signature)]`.
//!
//! Every part uses the URL safe base64 alphabet with the trailing padding
//! stripped. Nothing in here knows about algorithms or keys.

use crate::errors::{GenericError, MalformedToken};
use crate::Claims;

use base64::{decode_config, encode_config, URL_SAFE_NO_PAD};
use serde_json::Value;

/// The dot separated pieces of a token string, still encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
  pub header: &'a str,
  pub payload: &'a str,
  /// Empty when the token only had two parts.
  pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
  /// The bytes a signature is computed over: `header "." payload`, exactly as
  /// they appeared on the wire.
  pub fn signing_input(&self) -> String {
    signing_input(self.header, self.payload)
  }
}

/// Splits a token on `.`. Two parts (unsigned) and three parts (signed) are
/// legal, anything else is rejected.
pub fn split(token: &str) -> Result<TokenParts<'_>, MalformedToken> {
  let parts = token.split('.').collect::<Vec<_>>();
  match parts[..] {
    [header, payload] => Ok(TokenParts {
      header,
      payload,
      signature: "",
    }),
    [header, payload, signature] => Ok(TokenParts {
      header,
      payload,
      signature,
    }),
    _ => Err(MalformedToken::WrongPartCount(parts.len())),
  }
}

pub fn signing_input(header: &str, payload: &str) -> String {
  format!("{}.{}", header, payload)
}

pub fn encode_bytes(bytes: &[u8]) -> String {
  encode_config(bytes, URL_SAFE_NO_PAD)
}

pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, MalformedToken> {
  Ok(decode_config(encoded.as_bytes(), URL_SAFE_NO_PAD)?)
}

/// Decodes one part into a JSON object. Valid JSON that is not an object
/// (an array, a string, ...) is rejected as well.
pub fn decode_object(part: &str) -> Result<Claims, MalformedToken> {
  let raw = decode_bytes(part)?;
  match serde_json::from_slice::<Value>(&raw)? {
    Value::Object(map) => Ok(map),
    _ => Err(MalformedToken::NotAnObject),
  }
}

pub fn encode_object(object: &Claims) -> Result<String, GenericError> {
  let raw = serde_json::to_vec(object).map_err(GenericError::JsonSerializationError)?;
  Ok(encode_bytes(&raw))
}
