//! HS256, HS384 and HS512: HMAC-SHA2 over the signing input with a shared
//! secret.

use crate::algorithms::{Algorithm, DigestWidth, Family};
use crate::codec::{decode_bytes, encode_bytes};
use crate::errors::{GenericError, KeyErrors};
use crate::keys::Key;

use ring::hmac::{self, HMAC_SHA256, HMAC_SHA384, HMAC_SHA512};

fn ring_algorithm(alg: Algorithm) -> Result<hmac::Algorithm, GenericError> {
  match (alg.family(), alg.digest_width()) {
    (Family::Hmac, Some(DigestWidth::Sha256)) => Ok(HMAC_SHA256),
    (Family::Hmac, Some(DigestWidth::Sha384)) => Ok(HMAC_SHA384),
    (Family::Hmac, Some(DigestWidth::Sha512)) => Ok(HMAC_SHA512),
    _ => Err(GenericError::UnsupportedAlgorithm(alg.as_str().to_owned())),
  }
}

pub fn sign(message: &[u8], alg: Algorithm, key: &Key) -> Result<String, GenericError> {
  let secret = match key {
    Key::Symmetric(secret) => secret,
    _ => return Err(KeyErrors::NoKeyProvided)?,
  };
  let mac_key = hmac::Key::new(ring_algorithm(alg)?, secret);
  Ok(encode_bytes(hmac::sign(&mac_key, message).as_ref()))
}

/// Recomputes the tag and compares it in constant time.
pub fn verify(message: &[u8], signature: &str, alg: Algorithm, key: &Key) -> bool {
  let secret = match key {
    Key::Symmetric(secret) => secret,
    _ => return false,
  };
  let (algorithm, tag) = match (ring_algorithm(alg), decode_bytes(signature)) {
    (Ok(algorithm), Ok(tag)) => (algorithm, tag),
    _ => return false,
  };
  let mac_key = hmac::Key::new(algorithm, secret);
  hmac::verify(&mac_key, message, &tag).is_ok()
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  const MESSAGE: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJoZWxsbyI6IndvcmxkIn0";

  #[test]
  fn known_hs256_tag() {
    let tag = sign(MESSAGE, Algorithm::HS256, &Key::from("secret")).expect("HS256 signs");
    assert_eq!(tag, "lnneNaoem98xYFES3mi2CJJjnMONuWAu-FTWB3XJN14");
    assert!(verify(MESSAGE, &tag, Algorithm::HS256, &Key::from("secret")));
  }

  #[test]
  fn rfc4231_test_case_2() {
    let data = b"what do ya want for nothing?";
    let tag = sign(data, Algorithm::HS256, &Key::from("Jefe")).expect("HS256 signs");
    assert_eq!(
      hex::encode(decode_bytes(&tag).expect("tag is base64url")),
      "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );

    let tag = sign(data, Algorithm::HS512, &Key::from("Jefe")).expect("HS512 signs");
    assert_eq!(
      hex::encode(decode_bytes(&tag).expect("tag is base64url")),
      "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
  }

  #[test]
  fn tag_widths_follow_the_digest() {
    for (alg, width) in [(Algorithm::HS256, 32), (Algorithm::HS384, 48), (Algorithm::HS512, 64)].iter() {
      let tag = sign(MESSAGE, *alg, &Key::from("secret")).expect("HMAC signs");
      assert_eq!(decode_bytes(&tag).expect("tag is base64url").len(), *width);
    }
  }

  #[test]
  fn rejects_wrong_secret_width_and_tampering() {
    let tag = sign(MESSAGE, Algorithm::HS512, &Key::from("secret")).expect("HS512 signs");
    assert!(!verify(MESSAGE, &tag, Algorithm::HS512, &Key::from("Secret")));
    assert!(!verify(MESSAGE, &tag, Algorithm::HS256, &Key::from("secret")));
    assert!(!verify(b"tampered", &tag, Algorithm::HS512, &Key::from("secret")));
    assert!(!verify(MESSAGE, "not base64!", Algorithm::HS512, &Key::from("secret")));
  }

  #[test]
  fn requires_a_symmetric_key() {
    assert!(matches!(
      sign(MESSAGE, Algorithm::HS256, &Key::None),
      Err(GenericError::KeyError(KeyErrors::NoKeyProvided))
    ));
    let tag = sign(MESSAGE, Algorithm::HS256, &Key::from("secret")).expect("HS256 signs");
    assert!(!verify(MESSAGE, &tag, Algorithm::HS256, &Key::None));
  }

  #[test]
  fn refuses_non_hmac_algorithms() {
    assert!(matches!(
      sign(MESSAGE, Algorithm::RS256, &Key::from("secret")),
      Err(GenericError::UnsupportedAlgorithm(_))
    ));
  }
}
