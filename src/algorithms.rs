//! The closed catalog of signing algorithms, the family each belongs to, and
//! the per-token allow-list restricting which of them a token may carry.

use crate::errors::GenericError;

use std::fmt;
use std::str::FromStr;

/// A signing algorithm, as named by the `alg` header.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
  /// No signature at all. The third token part must be empty.
  None,
  HS256,
  HS384,
  HS512,
  RS256,
  RS384,
  RS512,
  PS256,
  PS384,
  PS512,
  Ed25519,
}

/// The signature families. Each family owns a group of algorithms and
/// supplies the sign, verify and claim checks for them.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Family {
  Unsecured,
  Hmac,
  Ed25519,
  Rsa,
}

/// Digest width used by the HMAC, RSA and PSS algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigestWidth {
  Sha256,
  Sha384,
  Sha512,
}

impl Algorithm {
  pub const ALL: [Algorithm; 11] = [
    Algorithm::None,
    Algorithm::HS256,
    Algorithm::HS384,
    Algorithm::HS512,
    Algorithm::RS256,
    Algorithm::RS384,
    Algorithm::RS512,
    Algorithm::PS256,
    Algorithm::PS384,
    Algorithm::PS512,
    Algorithm::Ed25519,
  ];

  /// The identifier used on the wire.
  pub fn as_str(self) -> &'static str {
    match self {
      Algorithm::None => "none",
      Algorithm::HS256 => "HS256",
      Algorithm::HS384 => "HS384",
      Algorithm::HS512 => "HS512",
      Algorithm::RS256 => "RS256",
      Algorithm::RS384 => "RS384",
      Algorithm::RS512 => "RS512",
      Algorithm::PS256 => "PS256",
      Algorithm::PS384 => "PS384",
      Algorithm::PS512 => "PS512",
      Algorithm::Ed25519 => "Ed25519",
    }
  }

  pub fn family(self) -> Family {
    match self {
      Algorithm::None => Family::Unsecured,
      Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Family::Hmac,
      Algorithm::RS256
      | Algorithm::RS384
      | Algorithm::RS512
      | Algorithm::PS256
      | Algorithm::PS384
      | Algorithm::PS512 => Family::Rsa,
      Algorithm::Ed25519 => Family::Ed25519,
    }
  }

  /// The digest width, for algorithms that are parameterised by one.
  pub fn digest_width(self) -> Option<DigestWidth> {
    match self {
      Algorithm::HS256 | Algorithm::RS256 | Algorithm::PS256 => Some(DigestWidth::Sha256),
      Algorithm::HS384 | Algorithm::RS384 | Algorithm::PS384 => Some(DigestWidth::Sha384),
      Algorithm::HS512 | Algorithm::RS512 | Algorithm::PS512 => Some(DigestWidth::Sha512),
      Algorithm::None | Algorithm::Ed25519 => None,
    }
  }
}

impl FromStr for Algorithm {
  type Err = GenericError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Algorithm::ALL
      .iter()
      .copied()
      .find(|alg| alg.as_str() == s)
      .ok_or_else(|| GenericError::UnsupportedAlgorithm(s.to_owned()))
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The algorithms a token instance has chosen to trust.
///
/// Built by [`SignatureEngine::filter_implemented`](crate::engine::SignatureEngine::filter_implemented),
/// so it never holds an algorithm the engine cannot execute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
  algorithms: Vec<Algorithm>,
}

impl AllowList {
  pub(crate) fn from_algorithms(algorithms: Vec<Algorithm>) -> Self {
    let mut deduped = Vec::with_capacity(algorithms.len());
    for alg in algorithms {
      if !deduped.contains(&alg) {
        deduped.push(alg);
      }
    }
    AllowList { algorithms: deduped }
  }

  /// Membership test on the identifier found in a header. Unknown identifiers
  /// are never allowed.
  pub fn is_allowed(&self, alg: &str) -> bool {
    self.algorithms.iter().any(|allowed| allowed.as_str() == alg)
  }

  pub fn contains(&self, alg: Algorithm) -> bool {
    self.algorithms.contains(&alg)
  }

  pub fn is_empty(&self) -> bool {
    self.algorithms.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = Algorithm> + '_ {
    self.algorithms.iter().copied()
  }
}
