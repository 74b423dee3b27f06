use compact_jwt::keys::{Key, PublicKey};
use compact_jwt::{Algorithm, SignatureEngine, Token, TokenBuilder};
use criterion::{black_box, Bencher, Criterion};
use ring::rand::SystemRandom;
use ring::signature::{Ed25519KeyPair, KeyPair};
use serde_json::json;

use compact_jwt::keys::key_id;

use crate::utils::bench_sized_claim_group;

mod builder;

fn bench_load_hs256(b: &mut Bencher, claim: &str) {
  let key = Key::from("YELLOW SUBMARINE, BLACK WIZARDRY");
  let token = TokenBuilder::new(SignatureEngine::Standard)
    .set_algorithm(Algorithm::HS256)
    .set_issued_at(None)
    .expires_in(3600)
    .set_issuer("issuer")
    .set_claim("claim", json!(claim))
    .build(&key)
    .expect("Can't build HS256 token");

  let mut loader = Token::new(SignatureEngine::Standard, &["HS256"]);
  b.iter(|| {
    loader
      .load(black_box(&token), &key, true, &["iss"])
      .expect("Failed to validate token!")
  });
}

fn bench_load_ed25519(b: &mut Bencher, claim: &str) {
  let sys_rand = SystemRandom::new();
  let key_pkcs8 = Ed25519KeyPair::generate_pkcs8(&sys_rand).expect("Failed to generate pkcs8 key!");
  let key_pair = Ed25519KeyPair::from_pkcs8(key_pkcs8.as_ref()).expect("Failed to parse keypair");

  let token = TokenBuilder::new(SignatureEngine::Ed25519)
    .set_algorithm(Algorithm::Ed25519)
    .set_key_id(&key_id(key_pair.public_key().as_ref()))
    .set_issued_at(None)
    .expires_in(3600)
    .set_claim("claim", json!(black_box(claim)))
    .build(&Key::from(&key_pair))
    .expect("Can't build Ed25519 token");

  let public_key = Key::Public(PublicKey::Ed25519(key_pair.public_key().as_ref()));
  let mut loader = Token::new(SignatureEngine::Ed25519, &["Ed25519"]);
  b.iter(|| {
    loader
      .load(black_box(&token), black_box(&public_key), true, &[])
      .expect("Failed to validate token!")
  });
}

pub fn benches(c: &mut Criterion) {
  bench_sized_claim_group(c, "token::load::hs256", &bench_load_hs256);
  bench_sized_claim_group(c, "token::load::ed25519", &bench_load_ed25519);

  builder::benches(c);
}
