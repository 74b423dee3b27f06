use compact_jwt::keys::{Key, PublicKey};
use compact_jwt::Claims;
use compact_jwt::SignatureEngine;
use criterion::{black_box, Bencher, Criterion};
use ring::rand::SystemRandom;
use ring::signature::{Ed25519KeyPair, KeyPair, RsaKeyPair};

use crate::utils::bench_sized_claim_group;

fn bench_hs256(b: &mut Bencher, message: &str) {
  let key = Key::from("secret");
  let signature = SignatureEngine::Standard
    .sign(message.as_bytes(), "HS256", &key)
    .expect("Failed to sign HS256");

  b.iter(|| {
    assert!(SignatureEngine::Standard.verify(
      black_box(message.as_bytes()),
      black_box(&signature),
      "HS256",
      &key,
      &Claims::new(),
    ))
  });
}

fn bench_ed25519(b: &mut Bencher, message: &str) {
  let sys_rand = SystemRandom::new();
  let key_pkcs8 = Ed25519KeyPair::generate_pkcs8(&sys_rand).expect("Failed to generate pkcs8 key!");
  let key_pair = Ed25519KeyPair::from_pkcs8(key_pkcs8.as_ref()).expect("Failed to parse keypair");

  b.iter(|| {
    SignatureEngine::Ed25519
      .sign(black_box(message.as_bytes()), "Ed25519", &Key::from(&key_pair))
      .expect("Failed to sign Ed25519")
  });
}

fn bench_rs256_verify(b: &mut Bencher, message: &str) {
  let key_pair = RsaKeyPair::from_der(include_bytes!("../../src/engine/rsa_test_private_key.der"))
    .expect("Bad Private Key pkcs!");
  let public_key: &[u8] = include_bytes!("../../src/engine/rsa_test_public_key.der");
  let signature = SignatureEngine::Rsa
    .sign(message.as_bytes(), "RS256", &Key::from(&key_pair))
    .expect("Failed to sign RS256");

  b.iter(|| {
    assert!(SignatureEngine::Rsa.verify(
      black_box(message.as_bytes()),
      black_box(&signature),
      "RS256",
      &Key::Public(PublicKey::Rsa(public_key)),
      &Claims::new(),
    ))
  });
}

pub fn benches(c: &mut Criterion) {
  bench_sized_claim_group(c, "engine::verify::hs256", &bench_hs256);
  bench_sized_claim_group(c, "engine::sign::ed25519", &bench_ed25519);
  bench_sized_claim_group(c, "engine::verify::rs256", &bench_rs256_verify);
}
