use criterion::{BenchmarkId, Bencher, Criterion, Throughput};
use std::iter;

static KB: usize = 1024;
static BENCH_SIZES: [usize; 4] = [1, KB, 4 * KB, 16 * KB];

/// Runs `f` once per payload size, handing it a claim value of that many bytes.
pub fn bench_sized_claim_group(c: &mut Criterion, name: &str, f: &dyn Fn(&mut Bencher, &str)) {
  let mut group = c.benchmark_group(name);
  for size in BENCH_SIZES.iter() {
    group.throughput(Throughput::Bytes(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
      let claim = iter::repeat('x').take(size).collect::<String>();
      f(b, &claim);
    });
  }
  group.finish();
}
