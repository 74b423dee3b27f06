//! The `none` algorithm: no signature and no key.

use crate::errors::{GenericError, KeyErrors};
use crate::keys::Key;

/// Signing a `none` token only succeeds without a key, and yields the empty
/// signature.
pub fn sign(key: &Key) -> Result<String, GenericError> {
  if !key.is_none() {
    return Err(KeyErrors::UnexpectedKey)?;
  }
  Ok(String::new())
}

/// A `none` token verifies when its signature part is empty and the caller
/// did not expect a key.
pub fn verify(signature: &str, key: &Key) -> bool {
  signature.is_empty() && key.is_none()
}
