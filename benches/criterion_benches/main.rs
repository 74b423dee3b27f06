use criterion::{criterion_group, criterion_main, Criterion};

mod engine;
mod tokens;
mod utils;

pub fn criterion_benchmark(c: &mut Criterion) {
  tokens::benches(c);
  engine::benches(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
