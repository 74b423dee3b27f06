//! Structural and temporal validation of a decoded header and payload.

use crate::engine::SignatureEngine;
use crate::errors::{ClaimErrors, GenericError};
use crate::Claims;

#[cfg(feature = "chrono_clock")]
use chrono::Utc;
#[cfg(feature = "time_clock")]
use time::OffsetDateTime;
use serde_json::Value;

/// Specifies which time crate is used to read the current time when
/// validating `exp`, `nbf` and `iat`. The available backends are [`Chrono`]
/// and [`Time`], enabled via the features `chrono_clock` and `time_clock`.
/// The default feature and backend is [`Chrono`].
///
/// [`Chrono`]: https://docs.rs/chrono/*/chrono/index.html
/// [`Time`]: https://docs.rs/time/*/time/index.html
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeBackend {
  #[cfg(feature = "chrono_clock")]
  Chrono,
  #[cfg(feature = "time_clock")]
  Time,
}

impl Default for TimeBackend {
  #[cfg(feature = "chrono_clock")]
  fn default() -> Self {
    TimeBackend::Chrono
  }

  #[cfg(all(feature = "time_clock", not(feature = "chrono_clock")))]
  fn default() -> Self {
    TimeBackend::Time
  }
}

impl TimeBackend {
  /// Seconds since the unix epoch. Clocks set before 1970 read as 0.
  pub fn now(self) -> u64 {
    let seconds = match self {
      #[cfg(feature = "chrono_clock")]
      TimeBackend::Chrono => Utc::now().timestamp(),
      #[cfg(feature = "time_clock")]
      TimeBackend::Time => OffsetDateTime::now_utc().unix_timestamp(),
    };
    seconds.max(0) as u64
  }
}

/// Reads a temporal claim. Absent is fine, anything other than an unsigned
/// integer is not.
fn epoch_claim(payload: &Claims, claim: &'static str) -> Result<Option<u64>, ClaimErrors> {
  match payload.get(claim) {
    None => Ok(None),
    Some(value) => value
      .as_u64()
      .map(Some)
      .ok_or(ClaimErrors::UnparseableTokenDate(claim)),
  }
}

/// Validates a header and payload pair.
///
/// This specifically validates, in order:
///   * typ (when required)
///   * expired
///   * not_before
///   * issued_at
///   * the checks contributed by the engine's families
///   * the mandatory claims
///
/// This specifically does not validate:
///   * audience
///   * jti
///   * issuer
#[derive(Debug, Clone, Copy)]
pub struct ClaimsValidator<'a> {
  engine: SignatureEngine,
  require_typ: bool,
  mandatory: &'a [&'a str],
}

impl<'a> ClaimsValidator<'a> {
  pub fn new(engine: SignatureEngine) -> Self {
    ClaimsValidator {
      engine,
      require_typ: true,
      mandatory: &[],
    }
  }

  /// Whether the `typ` header has to be `"JWT"`. Defaults to true.
  pub fn require_typ(mut self, require: bool) -> Self {
    self.require_typ = require;
    self
  }

  /// Claim names that must be present in the header or the payload. For
  /// validating maps directly; `Token::load` checks its list before adopting
  /// a token.
  pub fn mandatory(mut self, claims: &'a [&'a str]) -> Self {
    self.mandatory = claims;
    self
  }

  pub fn validate_content(&self, header: &Claims, payload: &Claims, now: u64) -> Result<(), GenericError> {
    if self.require_typ && header.get("typ").and_then(Value::as_str) != Some("JWT") {
      return Err(ClaimErrors::InvalidTokenType)?;
    }

    if let Some(exp) = epoch_claim(payload, "exp")? {
      if now > exp {
        return Err(ClaimErrors::ExpiredToken)?;
      }
    }

    if let Some(nbf) = epoch_claim(payload, "nbf")? {
      if now < nbf {
        return Err(ClaimErrors::NotYetValid)?;
      }
    }

    if let Some(iat) = epoch_claim(payload, "iat")? {
      if now < iat {
        return Err(ClaimErrors::IssuedInFuture)?;
      }
    }

    self.engine.validate_claims(header, payload)?;

    check_mandatory(self.mandatory, header, payload)
  }
}

/// Every name in `mandatory` has to appear in the header or the payload.
pub fn check_mandatory<S: AsRef<str>>(mandatory: &[S], header: &Claims, payload: &Claims) -> Result<(), GenericError> {
  match mandatory
    .iter()
    .map(|claim| claim.as_ref())
    .find(|claim| !header.contains_key(*claim) && !payload.contains_key(*claim))
  {
    Some(missing) => Err(GenericError::MandatoryClaimMissing(missing.to_owned())),
    None => Ok(()),
  }
}
