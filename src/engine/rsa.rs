//! RSA signatures: RS256/384/512 use PKCS#1 v1.5 padding, PS256/384/512 use
//! PSS. Verification accepts moduli from 2048 up to 8192 bits.

use crate::algorithms::{Algorithm, DigestWidth, Family};
use crate::codec::{decode_bytes, encode_bytes};
use crate::errors::{GenericError, KeyErrors};
use crate::keys::{Key, PrivateKey, PublicKey};

use ring::rand::SystemRandom;
use ring::signature::{
  RsaEncoding, RsaParameters, UnparsedPublicKey, RSA_PKCS1_2048_8192_SHA256, RSA_PKCS1_2048_8192_SHA384,
  RSA_PKCS1_2048_8192_SHA512, RSA_PKCS1_SHA256, RSA_PKCS1_SHA384, RSA_PKCS1_SHA512, RSA_PSS_2048_8192_SHA256,
  RSA_PSS_2048_8192_SHA384, RSA_PSS_2048_8192_SHA512, RSA_PSS_SHA256, RSA_PSS_SHA384, RSA_PSS_SHA512,
};

fn is_pss(alg: Algorithm) -> bool {
  matches!(alg, Algorithm::PS256 | Algorithm::PS384 | Algorithm::PS512)
}

fn signing_encoding(alg: Algorithm) -> Option<&'static dyn RsaEncoding> {
  if alg.family() != Family::Rsa {
    return None;
  }
  match (is_pss(alg), alg.digest_width()?) {
    (false, DigestWidth::Sha256) => Some(&RSA_PKCS1_SHA256),
    (false, DigestWidth::Sha384) => Some(&RSA_PKCS1_SHA384),
    (false, DigestWidth::Sha512) => Some(&RSA_PKCS1_SHA512),
    (true, DigestWidth::Sha256) => Some(&RSA_PSS_SHA256),
    (true, DigestWidth::Sha384) => Some(&RSA_PSS_SHA384),
    (true, DigestWidth::Sha512) => Some(&RSA_PSS_SHA512),
  }
}

fn verification_parameters(alg: Algorithm) -> Option<&'static RsaParameters> {
  if alg.family() != Family::Rsa {
    return None;
  }
  match (is_pss(alg), alg.digest_width()?) {
    (false, DigestWidth::Sha256) => Some(&RSA_PKCS1_2048_8192_SHA256),
    (false, DigestWidth::Sha384) => Some(&RSA_PKCS1_2048_8192_SHA384),
    (false, DigestWidth::Sha512) => Some(&RSA_PKCS1_2048_8192_SHA512),
    (true, DigestWidth::Sha256) => Some(&RSA_PSS_2048_8192_SHA256),
    (true, DigestWidth::Sha384) => Some(&RSA_PSS_2048_8192_SHA384),
    (true, DigestWidth::Sha512) => Some(&RSA_PSS_2048_8192_SHA512),
  }
}

pub fn sign(message: &[u8], alg: Algorithm, key: &Key) -> Result<String, GenericError> {
  let key_pair = match key {
    Key::Private(PrivateKey::Rsa(key_pair)) => key_pair,
    _ => return Err(KeyErrors::NoKeyProvided)?,
  };
  let encoding =
    signing_encoding(alg).ok_or_else(|| GenericError::UnsupportedAlgorithm(alg.as_str().to_owned()))?;

  let random = SystemRandom::new();
  let mut signature = vec![0; key_pair.public_modulus_len()];
  if key_pair.sign(encoding, &random, message, &mut signature).is_err() {
    return Err(KeyErrors::SignError)?;
  }

  Ok(encode_bytes(&signature))
}

pub fn verify(message: &[u8], signature: &str, alg: Algorithm, key: &Key) -> bool {
  let public_key = match key {
    Key::Public(PublicKey::Rsa(public_key)) => public_key,
    _ => return false,
  };
  let (parameters, signature) = match (verification_parameters(alg), decode_bytes(signature)) {
    (Some(parameters), Ok(signature)) => (parameters, signature),
    _ => return false,
  };

  UnparsedPublicKey::new(parameters, public_key)
    .verify(message, &signature)
    .is_ok()
}
