//! Key material handed to sign and verify.
//!
//! Every sign and verify path matches on [`Key`], so an algorithm can never be
//! fed a key of the wrong shape by accident. `Key::None` is only meaningful
//! for `none` tokens, and for Ed25519 verification where it means "use the
//! `kid` header".

use crate::codec::encode_bytes;
use crate::errors::KeyErrors;

use base64::{decode_config, URL_SAFE_NO_PAD};
use ring::signature::{Ed25519KeyPair, RsaKeyPair};

/// Signing halves of the asymmetric families.
#[derive(Clone, Copy)]
pub enum PrivateKey<'a> {
  Ed25519(&'a Ed25519KeyPair),
  /// Use `RsaKeyPair::from_der` (PKCS#1) or `RsaKeyPair::from_pkcs8`.
  Rsa(&'a RsaKeyPair),
}

/// Verifying halves of the asymmetric families.
#[derive(Clone, Copy, Debug)]
pub enum PublicKey<'a> {
  /// The raw 32 byte public key.
  Ed25519(&'a [u8]),
  /// A DER encoded PKCS#1 `RSAPublicKey`.
  Rsa(&'a [u8]),
}

#[derive(Clone, Copy)]
pub enum Key<'a> {
  None,
  Symmetric(&'a [u8]),
  Private(PrivateKey<'a>),
  Public(PublicKey<'a>),
}

impl<'a> Key<'a> {
  pub fn is_none(&self) -> bool {
    matches!(self, Key::None)
  }
}

impl Default for Key<'_> {
  fn default() -> Self {
    Key::None
  }
}

impl<'a> From<&'a [u8]> for Key<'a> {
  fn from(secret: &'a [u8]) -> Self {
    Key::Symmetric(secret)
  }
}

impl<'a> From<&'a str> for Key<'a> {
  fn from(secret: &'a str) -> Self {
    Key::Symmetric(secret.as_bytes())
  }
}

impl<'a> From<&'a Ed25519KeyPair> for Key<'a> {
  fn from(key_pair: &'a Ed25519KeyPair) -> Self {
    Key::Private(PrivateKey::Ed25519(key_pair))
  }
}

impl<'a> From<&'a RsaKeyPair> for Key<'a> {
  fn from(key_pair: &'a RsaKeyPair) -> Self {
    Key::Private(PrivateKey::Rsa(key_pair))
  }
}

impl std::fmt::Debug for Key<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Key::None => f.write_str("Key::None"),
      Key::Symmetric(_) => f.write_str("Key::Symmetric { secret }"),
      Key::Private(PrivateKey::Ed25519(_)) => f.write_str("Key::Private(Ed25519)"),
      Key::Private(PrivateKey::Rsa(_)) => f.write_str("Key::Private(Rsa)"),
      Key::Public(public) => write!(f, "Key::Public({:?})", public),
    }
  }
}

/// Builds an Ed25519 key pair from raw secret key bytes.
///
/// Accepts either the 32 byte seed, or the 64 byte `seed || public key`
/// layout libsodium calls a secret key. In the latter case the embedded public
/// key has to match the seed.
pub fn ed25519_key_pair_from_seed(secret: &[u8]) -> Result<Ed25519KeyPair, KeyErrors> {
  match secret.len() {
    32 => Ok(Ed25519KeyPair::from_seed_unchecked(secret)?),
    64 => {
      let (seed, public_key) = secret.split_at(32);
      Ok(Ed25519KeyPair::from_seed_and_public_key(seed, public_key)?)
    }
    other => Err(KeyErrors::InvalidSeedLength(other)),
  }
}

/// Decodes a base64url encoded shared secret, padded or not. `Key` only
/// borrows, so build it from the returned bytes: `Key::from(&secret[..])`.
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, KeyErrors> {
  Ok(decode_config(encoded.trim_end_matches('=').as_bytes(), URL_SAFE_NO_PAD)?)
}

/// The `kid` header value naming a raw Ed25519 public key.
pub fn key_id(public_key: &[u8]) -> String {
  encode_bytes(public_key)
}
