use crate::algorithms::Algorithm;
use crate::claims::TimeBackend;
use crate::engine::SignatureEngine;
use crate::errors::GenericError;
use crate::keys::Key;
use crate::tokens::{Token, DEFAULT_JTI_LENGTH};
use crate::Claims;

use serde_json::{json, Value};

/// A token builder.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
  engine: SignatureEngine,
  /// Header entries besides `alg` and `typ`, e.g. `kid`.
  header: Claims,
  /// Any claims you want to store in the payload.
  payload: Claims,
  /// Length in bytes of the random `jti` generated when none is set.
  jti_length: usize,
  time_backend: TimeBackend,
}

impl TokenBuilder {
  /// Creates a new builder signing with `alg: none` until told otherwise.
  pub fn new(engine: SignatureEngine) -> TokenBuilder {
    let mut header = Claims::new();
    header.insert(String::from("alg"), json!(Algorithm::None.as_str()));
    header.insert(String::from("typ"), json!("JWT"));

    TokenBuilder {
      engine,
      header,
      payload: Claims::new(),
      jti_length: DEFAULT_JTI_LENGTH,
      time_backend: TimeBackend::default(),
    }
  }

  /// Builds and signs a token. The only algorithm it allows is the one set
  /// with [`TokenBuilder::set_algorithm`].
  pub fn build(self, key: &Key) -> Result<String, GenericError> {
    let jti_length = self.jti_length;
    self.build_token().dump(key, jti_length)
  }

  /// Hands the collected header and payload over to a [`Token`].
  pub fn build_token(self) -> Token {
    Token::new_with_claims(self.engine, self.header, self.payload, None::<&[&str]>)
      .with_time_backend(self.time_backend)
  }

  pub fn set_algorithm(self, alg: Algorithm) -> Self {
    self.set_header_claim("alg", json!(alg.as_str()))
  }

  /// Sets the `kid` header, for Ed25519 the base64url of the raw public key.
  pub fn set_key_id(self, key_id: &str) -> Self {
    self.set_header_claim("kid", json!(key_id))
  }

  /// Sets an arbitrary header entry.
  pub fn set_header_claim(mut self, key: &str, value: Value) -> Self {
    self.header.insert(key.to_owned(), value);
    self
  }

  /// Sets an arbitrary claim (a key inside the json payload).
  pub fn set_claim(mut self, key: &str, value: Value) -> Self {
    self.payload.insert(key.to_owned(), value);
    self
  }

  pub fn set_audience(self, audience: &str) -> Self {
    self.set_claim("aud", json!(audience))
  }

  /// Sets the expiration time, in seconds since the epoch.
  pub fn set_expiration(self, expiration: u64) -> Self {
    self.set_claim("exp", json!(expiration))
  }

  /// Expires the token `seconds` from now.
  pub fn expires_in(self, seconds: u64) -> Self {
    let now = self.time_backend.now();
    self.set_expiration(now.saturating_add(seconds))
  }

  /// Sets the time this token was issued at.
  ///
  /// issued_at defaults to now, read from the builder's time backend.
  pub fn set_issued_at(self, issued_at: Option<u64>) -> Self {
    let issued_at = issued_at.unwrap_or_else(|| self.time_backend.now());
    self.set_claim("iat", json!(issued_at))
  }

  pub fn set_issuer(self, issuer: &str) -> Self {
    self.set_claim("iss", json!(issuer))
  }

  /// Sets the JTI ID for this token. No random one is generated then.
  pub fn set_jti(self, id: &str) -> Self {
    self.set_claim("jti", json!(id))
  }

  /// Length of the generated `jti`; zero leaves tokens without one.
  pub fn set_jti_length(mut self, length: usize) -> Self {
    self.jti_length = length;
    self
  }

  pub fn set_not_before(self, not_before: u64) -> Self {
    self.set_claim("nbf", json!(not_before))
  }

  pub fn set_subject(self, subject: &str) -> Self {
    self.set_claim("sub", json!(subject))
  }

  pub fn set_time_backend(mut self, backend: TimeBackend) -> Self {
    self.time_backend = backend;
    self
  }
}
