//! Ed25519 signatures. When no verification key is supplied the `kid` header
//! is taken to be the signer's raw public key, base64url encoded.

use crate::codec::{decode_bytes, encode_bytes};
use crate::errors::{ClaimErrors, GenericError, KeyErrors};
use crate::keys::{Key, PrivateKey, PublicKey};
use crate::Claims;

use ring::signature::{KeyPair, UnparsedPublicKey, ED25519};
use serde_json::Value;

/// Length of a raw Ed25519 public key, and of any identity bound to one.
pub const KEY_ID_LENGTH: usize = 32;

pub fn sign(message: &[u8], key: &Key) -> Result<String, GenericError> {
  match key {
    Key::Private(PrivateKey::Ed25519(key_pair)) => Ok(encode_bytes(key_pair.sign(message).as_ref())),
    _ => Err(KeyErrors::NoKeyProvided)?,
  }
}

pub fn verify(message: &[u8], signature: &str, key: &Key, header: &Claims) -> bool {
  let signature = match decode_bytes(signature) {
    Ok(signature) => signature,
    Err(_) => return false,
  };

  let public_key = match key {
    Key::Public(PublicKey::Ed25519(public_key)) => public_key.to_vec(),
    Key::Private(PrivateKey::Ed25519(key_pair)) => key_pair.public_key().as_ref().to_vec(),
    Key::None => match header.get("kid").and_then(Value::as_str).map(decode_bytes) {
      Some(Ok(public_key)) => public_key,
      _ => return false,
    },
    _ => return false,
  };

  UnparsedPublicKey::new(&ED25519, &public_key)
    .verify(message, &signature)
    .is_ok()
}

/// Ed25519 tokens must name their key: `kid` is required and has to decode
/// to 32 bytes. A string `sub`, when present, is held to the same shape.
pub fn validate_claims(header: &Claims, payload: &Claims) -> Result<(), ClaimErrors> {
  let kid_is_key = header
    .get("kid")
    .and_then(Value::as_str)
    .map_or(false, decodes_to_key_length);
  if !kid_is_key {
    return Err(ClaimErrors::InvalidKeyId);
  }

  if let Some(sub) = payload.get("sub").and_then(Value::as_str) {
    if !decodes_to_key_length(sub) {
      return Err(ClaimErrors::InvalidSubject);
    }
  }

  Ok(())
}

fn decodes_to_key_length(encoded: &str) -> bool {
  decode_bytes(encoded)
    .map(|raw| raw.len() == KEY_ID_LENGTH)
    .unwrap_or(false)
}
