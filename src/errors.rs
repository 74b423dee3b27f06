use thiserror::Error;

#[derive(Error, Debug)]
pub enum MalformedToken {
  #[error("Expected 2 or 3 dot separated parts, found {0}")]
  WrongPartCount(usize),
  #[error("Base64 decoding failed: {0}")]
  Base64DecodeError(#[from] base64::DecodeError),
  #[error("JSON parse error: {0}")]
  JsonError(#[from] serde_json::error::Error),
  #[error("Token part is not a JSON object")]
  NotAnObject,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClaimErrors {
  #[error("The 'typ' header must be \"JWT\"")]
  InvalidTokenType,
  #[error("This token has expired.")]
  ExpiredToken,
  #[error("This token is not valid yet.")]
  NotYetValid,
  #[error("This token was issued in the future.")]
  IssuedInFuture,
  #[error("The '{0}' claim is not an unsigned epoch timestamp")]
  UnparseableTokenDate(&'static str),
  #[error("The 'kid' header must be a base64url encoded 32 byte public key")]
  InvalidKeyId,
  #[error("The 'sub' claim must be a base64url encoded 32 byte identifier")]
  InvalidSubject,
}

#[derive(Error, Debug)]
pub enum KeyErrors {
  #[error("No key of the correct type was provided")]
  NoKeyProvided,
  #[error("A key was provided for an algorithm that takes none")]
  UnexpectedKey,
  #[error("Invalid key provided: {0}")]
  InvalidKey(#[from] ring::error::KeyRejected),
  #[error("Secret is not valid base64url: {0}")]
  InvalidSecretEncoding(#[from] base64::DecodeError),
  #[error("Invalid Ed25519 seed size, expected 32 or 64 bytes but got {0}")]
  InvalidSeedLength(usize),
  #[error("Failed to generate signed content")]
  SignError,
}

#[derive(Error, Debug)]
pub enum GenericError {
  #[error("This token is structurally invalid: {0}")]
  InvalidToken(#[from] MalformedToken),
  #[error("Algorithm '{0}' is not on the allow-list")]
  AlgorithmNotAllowed(String),
  #[error("Signature verification failed")]
  InvalidSignature,
  #[error("Mandatory claim '{0}' is missing")]
  MandatoryClaimMissing(String),
  #[error("Claim validation failed: {0}")]
  InvalidClaim(#[from] ClaimErrors),
  #[error("JSON serialization error: {0}")]
  JsonSerializationError(#[source] serde_json::error::Error),
  #[error("Failed to generate enough random bytes.")]
  RandomError,
  #[error("Algorithm '{0}' is not supported by this engine")]
  UnsupportedAlgorithm(String),
  #[error("Key error: {0}")]
  KeyError(#[from] KeyErrors),
}
