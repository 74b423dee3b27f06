use compact_jwt::keys::Key;
use compact_jwt::{Algorithm, SignatureEngine, TokenBuilder};
use criterion::{black_box, Bencher, Criterion};
use ring::rand::SystemRandom;
use ring::signature::{Ed25519KeyPair, KeyPair};
use serde_json::json;

use compact_jwt::keys::key_id;

use crate::utils::bench_sized_claim_group;

fn bench_construct_hs256(b: &mut Bencher, claim: &str) {
  b.iter(|| {
    TokenBuilder::new(SignatureEngine::Standard)
      .set_algorithm(Algorithm::HS256)
      .set_issued_at(None)
      .expires_in(3600)
      .set_issuer("issuer")
      .set_audience("audience")
      .set_subject("test")
      .set_claim("claim", json!(black_box(claim)))
      .build(&Key::from("YELLOW SUBMARINE, BLACK WIZARDRY"))
      .expect("Can't build HS256 token")
  });
}

fn bench_construct_ed25519(b: &mut Bencher, claim: &str) {
  let sys_rand = SystemRandom::new();
  let key_pkcs8 = Ed25519KeyPair::generate_pkcs8(&sys_rand).expect("Failed to generate pkcs8 key!");
  let key_pair = Ed25519KeyPair::from_pkcs8(key_pkcs8.as_ref()).expect("Failed to parse keypair");
  let kid = key_id(key_pair.public_key().as_ref());

  b.iter(|| {
    TokenBuilder::new(SignatureEngine::Ed25519)
      .set_algorithm(Algorithm::Ed25519)
      .set_key_id(&kid)
      .set_issued_at(None)
      .expires_in(3600)
      .set_claim("claim", json!(black_box(claim)))
      .build(&Key::from(&key_pair))
      .expect("Can't build Ed25519 token")
  });
}

pub fn benches(c: &mut Criterion) {
  bench_sized_claim_group(c, "token::builder::hs256", &bench_construct_hs256);
  bench_sized_claim_group(c, "token::builder::ed25519", &bench_construct_ed25519);
}
