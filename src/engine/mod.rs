//! Algorithm dispatch.
//!
//! A [`SignatureEngine`] is a fixed, ordered list of signature [`Family`]s.
//! Signing and verifying go to the first family in the list that owns the
//! token's algorithm. Every engine ends with `Hmac` and `Unsecured`, so an
//! Ed25519 or RSA engine still serves HMAC and `none` tokens. Claim checks
//! are different: each family in the list adds its checks to every token the
//! engine validates.

pub mod eddsa;
pub mod hmac;
pub mod rsa;
pub mod unsecured;

use crate::algorithms::{Algorithm, AllowList, Family};
use crate::errors::{ClaimErrors, GenericError};
use crate::keys::Key;
use crate::Claims;

impl Family {
  fn owns(self, alg: Algorithm) -> bool {
    alg.family() == self
  }

  fn sign(self, message: &[u8], alg: Algorithm, key: &Key) -> Result<String, GenericError> {
    match self {
      Family::Unsecured => unsecured::sign(key),
      Family::Hmac => hmac::sign(message, alg, key),
      Family::Ed25519 => eddsa::sign(message, key),
      Family::Rsa => rsa::sign(message, alg, key),
    }
  }

  fn verify(self, message: &[u8], signature: &str, alg: Algorithm, key: &Key, header: &Claims) -> bool {
    match self {
      Family::Unsecured => unsecured::verify(signature, key),
      Family::Hmac => hmac::verify(message, signature, alg, key),
      Family::Ed25519 => eddsa::verify(message, signature, key, header),
      Family::Rsa => rsa::verify(message, signature, alg, key),
    }
  }

  fn validate_claims(self, header: &Claims, payload: &Claims) -> Result<(), ClaimErrors> {
    match self {
      Family::Ed25519 => eddsa::validate_claims(header, payload),
      Family::Unsecured | Family::Hmac | Family::Rsa => Ok(()),
    }
  }
}

/// Which signature families a token instance can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureEngine {
  /// `none` and HMAC.
  Standard,
  /// `Ed25519` on top of the standard engine.
  Ed25519,
  /// RSA PKCS#1 and PSS on top of the standard engine.
  Rsa,
  /// Every family this crate knows.
  Full,
}

impl Default for SignatureEngine {
  fn default() -> Self {
    SignatureEngine::Standard
  }
}

impl SignatureEngine {
  /// The families in dispatch order.
  pub fn families(self) -> &'static [Family] {
    match self {
      SignatureEngine::Standard => &[Family::Hmac, Family::Unsecured],
      SignatureEngine::Ed25519 => &[Family::Ed25519, Family::Hmac, Family::Unsecured],
      SignatureEngine::Rsa => &[Family::Rsa, Family::Hmac, Family::Unsecured],
      SignatureEngine::Full => &[Family::Ed25519, Family::Rsa, Family::Hmac, Family::Unsecured],
    }
  }

  fn owner(self, alg: Algorithm) -> Option<Family> {
    self.families().iter().copied().find(|family| family.owns(alg))
  }

  fn resolve(self, alg: &str) -> Option<(Algorithm, Family)> {
    let alg = alg.parse::<Algorithm>().ok()?;
    self.owner(alg).map(|family| (alg, family))
  }

  /// Whether this engine can sign and verify `alg`. Unknown identifiers are
  /// never implemented.
  pub fn implemented(self, alg: &str) -> bool {
    self.resolve(alg).is_some()
  }

  /// Keeps the requested identifiers this engine implements, dropping the rest.
  pub fn filter_implemented<S: AsRef<str>>(self, requested: &[S]) -> AllowList {
    AllowList::from_algorithms(
      requested
        .iter()
        .filter_map(|alg| self.resolve(alg.as_ref()))
        .map(|(alg, _)| alg)
        .collect(),
    )
  }

  /// Computes the base64url signature of `message`.
  pub fn sign(self, message: &[u8], alg: &str, key: &Key) -> Result<String, GenericError> {
    let (alg, family) = self
      .resolve(alg)
      .ok_or_else(|| GenericError::UnsupportedAlgorithm(alg.to_owned()))?;
    family.sign(message, alg, key)
  }

  /// Checks `signature` over `message`. Unknown or unimplemented algorithms
  /// never verify. `header` is consulted by families that can take their key
  /// from it.
  pub fn verify(self, message: &[u8], signature: &str, alg: &str, key: &Key, header: &Claims) -> bool {
    match self.resolve(alg) {
      Some((alg, family)) => family.verify(message, signature, alg, key, header),
      None => false,
    }
  }

  /// The claim checks contributed by this engine's families. They apply to
  /// every token the engine validates, whatever its `alg`: an Ed25519 engine
  /// requires a key-sized `kid` on HMAC and `none` tokens as well.
  pub fn validate_claims(self, header: &Claims, payload: &Claims) -> Result<(), GenericError> {
    for family in self.families() {
      family.validate_claims(header, payload)?;
    }
    Ok(())
  }
}
