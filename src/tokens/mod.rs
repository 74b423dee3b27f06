//! The token facade: owns a header and a payload, and moves them to and from
//! the wire with [`Token::dump`] and [`Token::load`].
//!
//! A `Token` is not meant to be shared between concurrent loads. `load` takes
//! `&mut self`; callers validating in parallel should use one instance per
//! operation or put the instance behind a lock.

use crate::algorithms::AllowList;
use crate::claims::{check_mandatory, ClaimsValidator, TimeBackend};
use crate::codec::{self, TokenParts};
use crate::engine::SignatureEngine;
use crate::errors::GenericError;
use crate::keys::Key;
use crate::Claims;

use ring::rand::{SecureRandom, SystemRandom};
use serde_json::{json, Value};

pub mod builder;
pub use self::builder::*;

/// Length in bytes of the random `jti` inserted by `dump` unless told otherwise.
pub const DEFAULT_JTI_LENGTH: usize = 16;

/// Makes sure a header carries a non-empty string `alg`, inserting `"none"`
/// otherwise. Applied wherever a header is replaced wholesale.
pub fn normalize_header(mut header: Claims) -> Claims {
  let has_alg = matches!(header.get("alg"), Some(Value::String(alg)) if !alg.is_empty());
  if !has_alg {
    header.insert(String::from("alg"), json!("none"));
  }
  header
}

/// Base64url of `length` bytes from the system's secure random generator.
pub fn generate_nonce(length: usize) -> Result<String, GenericError> {
  let mut bytes = vec![0u8; length];
  if SystemRandom::new().fill(&mut bytes).is_err() {
    return Err(GenericError::RandomError);
  }
  Ok(codec::encode_bytes(&bytes))
}

#[derive(Debug, Clone)]
pub struct Token {
  header: Claims,
  payload: Claims,
  engine: SignatureEngine,
  allowed: AllowList,
  require_typ: bool,
  time_backend: TimeBackend,
}

impl Token {
  /// An empty token that will accept the requested algorithms, minus the ones
  /// `engine` cannot execute.
  pub fn new<S: AsRef<str>>(engine: SignatureEngine, allowed: &[S]) -> Self {
    Token {
      header: normalize_header(json_object(json!({"typ": "JWT"}))),
      payload: Claims::new(),
      engine,
      allowed: engine.filter_implemented(allowed),
      require_typ: true,
      time_backend: TimeBackend::default(),
    }
  }

  /// A token holding `header` and `payload`, ready to be dumped.
  ///
  /// `typ` defaults to `"JWT"`. Without an explicit allow-list the token only
  /// allows the algorithm named by its own header.
  pub fn new_with_claims<S: AsRef<str>>(
    engine: SignatureEngine,
    header: Claims,
    payload: Claims,
    allowed: Option<&[S]>,
  ) -> Self {
    let mut header = normalize_header(header);
    if !header.get("typ").map_or(false, Value::is_string) {
      header.insert(String::from("typ"), json!("JWT"));
    }

    let allowed = match allowed {
      Some(allowed) => engine.filter_implemented(allowed),
      None => {
        let own = header.get("alg").and_then(Value::as_str).unwrap_or("none");
        engine.filter_implemented(&[own])
      }
    };

    Token {
      header,
      payload,
      engine,
      allowed,
      require_typ: true,
      time_backend: TimeBackend::default(),
    }
  }

  /// Whether loaded tokens must carry `"typ": "JWT"`. Defaults to true.
  pub fn require_typ(mut self, require: bool) -> Self {
    self.require_typ = require;
    self
  }

  pub fn with_time_backend(mut self, backend: TimeBackend) -> Self {
    self.time_backend = backend;
    self
  }

  pub fn engine(&self) -> SignatureEngine {
    self.engine
  }

  pub fn allowed(&self) -> &AllowList {
    &self.allowed
  }

  pub fn header(&self) -> &Claims {
    &self.header
  }

  /// Replaces the whole header, defaulting `alg` to `"none"` when missing.
  pub fn set_header(&mut self, header: Claims) {
    self.header = normalize_header(header);
  }

  /// Sets one header entry. Setting `alg` to anything but a non-empty string
  /// leaves it at `"none"`.
  pub fn insert_header(&mut self, key: &str, value: Value) {
    self.header.insert(key.to_owned(), value);
    self.header = normalize_header(std::mem::take(&mut self.header));
  }

  pub fn payload(&self) -> &Claims {
    &self.payload
  }

  pub fn payload_mut(&mut self) -> &mut Claims {
    &mut self.payload
  }

  pub fn set_payload(&mut self, payload: Claims) {
    self.payload = payload;
  }

  /// True when the token holds an empty payload and a header with nothing but
  /// `alg`, the state a failed `load` leaves behind.
  ///
  /// A token that successfully loaded `{"alg":"none"}` with an empty payload
  /// looks the same, so this does not tell a failed load from that one. Use
  /// the `Result` of `load` for that.
  pub fn is_empty(&self) -> bool {
    self.payload.is_empty() && self.header.keys().all(|key| key == "alg")
  }

  /// Stores a fresh random `jti` of `length` bytes in the payload and returns it.
  pub fn set_nonce(&mut self, length: usize) -> Result<String, GenericError> {
    let nonce = generate_nonce(length)?;
    self.payload.insert(String::from("jti"), json!(nonce));
    Ok(nonce)
  }

  fn reset(&mut self) {
    self.header = normalize_header(Claims::new());
    self.payload = Claims::new();
  }

  /// Serializes and signs this token.
  ///
  /// When the payload has no `jti` and `jti_length` is not zero, a random one
  /// is added to the dumped copy; the token's own payload is left untouched.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(jti_length = jti_length)))]
  pub fn dump(&self, key: &Key, jti_length: usize) -> Result<String, GenericError> {
    let mut payload = self.payload.clone();
    if !payload.get("jti").map_or(false, Value::is_string) && jti_length > 0 {
      payload.insert(String::from("jti"), json!(generate_nonce(jti_length)?));
    }

    let alg = self.header.get("alg").and_then(Value::as_str).unwrap_or("none");
    if !self.allowed.is_allowed(alg) {
      return Err(GenericError::AlgorithmNotAllowed(alg.to_owned()));
    }

    let signing_input = codec::signing_input(
      &codec::encode_object(&self.header)?,
      &codec::encode_object(&payload)?,
    );
    #[cfg(feature = "tracing")]
    tracing::trace!(alg, "signing");

    let signature = self.engine.sign(signing_input.as_bytes(), alg, key)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(alg, "dumped token");

    Ok(format!("{}.{}", signing_input, signature))
  }

  /// Loads `token` into this instance, replacing header and payload.
  ///
  /// The `alg` header is checked against the allow-list before anything else
  /// happens, whether or not `verify` is set. With `verify` the signature and
  /// then the claims are validated. On any failure the token is left empty.
  #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(verify = verify)))]
  pub fn load(&mut self, token: &str, key: &Key, verify: bool, mandatory: &[&str]) -> Result<(), GenericError> {
    self.reset();

    let parts = codec::split(token)?;
    let header = codec::decode_object(parts.header)?;
    let alg = match header.get("alg").and_then(Value::as_str) {
      Some(alg) if self.allowed.is_allowed(alg) => alg.to_owned(),
      other => return Err(GenericError::AlgorithmNotAllowed(other.unwrap_or_default().to_owned())),
    };
    #[cfg(feature = "tracing")]
    tracing::trace!(alg = alg.as_str(), "algorithm allowed");

    let payload = codec::decode_object(parts.payload)?;
    check_mandatory(mandatory, &header, &payload)?;

    self.header = header;
    self.payload = payload;

    if verify {
      if let Err(err) = self.verify_loaded(&parts, &alg, key) {
        self.reset();
        return Err(err);
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(alg = alg.as_str(), verified = verify, "loaded token");

    Ok(())
  }

  fn verify_loaded(&self, parts: &TokenParts, alg: &str, key: &Key) -> Result<(), GenericError> {
    let signing_input = parts.signing_input();
    if !self.engine.verify(signing_input.as_bytes(), parts.signature, alg, key, &self.header) {
      return Err(GenericError::InvalidSignature);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(alg, "signature verified");

    ClaimsValidator::new(self.engine)
      .require_typ(self.require_typ)
      .validate_content(&self.header, &self.payload, self.time_backend.now())
  }
}

fn json_object(value: Value) -> Claims {
  match value {
    Value::Object(map) => map,
    _ => Claims::new(),
  }
}
