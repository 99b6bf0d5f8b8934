use std::ops::RangeInclusive;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::distributions::{Uniform, WeightedIndex};
use rand::prelude::*;
use unsigned_vint::{UnsignedVIntBuf, UnsignedVIntBufMut};

// Uniform weights: equal probability of a value of each length.
const UNIFORM_WEIGHTS: [usize; 9] = [1; 9];
// Zipf-like weights: decreasing but non-zero probability for longer values.
const ZIPF_WEIGHTS: [usize; 9] = [7560, 3780, 2520, 1890, 1512, 1260, 1080, 945, 840];
// Long enough to get at least one element of every size when max_bytes=9.
const ARRAY_LEN: usize = 1024;

fn magnitude_range(nbytes: usize) -> RangeInclusive<u64> {
    let min = if nbytes == 1 {
        0
    } else {
        1 << ((nbytes - 1) * 7)
    };
    let max = if nbytes < 9 {
        u64::MAX >> (64 - 7 * nbytes)
    } else {
        u64::MAX
    };
    min..=max
}

// Generate an array of len values no longer than max_bytes encoded, with the
// given length distribution.
fn generate_values(len: usize, max_bytes: usize, weights: &[usize; 9]) -> Vec<u64> {
    let mut len_rng = StdRng::from_seed([0x5eu8; 32]);
    let len_dist = WeightedIndex::new(&weights[..max_bytes]).unwrap();
    let mut value_rng = StdRng::from_seed([0xc4u8; 32]);
    len_dist
        .sample_iter(&mut len_rng)
        .take(len)
        .map(|n| Uniform::from(magnitude_range(n + 1)).sample(&mut value_rng))
        .collect()
}

fn benchmark(c: &mut Criterion) {
    for (name, weights) in [("uniform", &UNIFORM_WEIGHTS), ("zipf", &ZIPF_WEIGHTS)] {
        let mut g = c.benchmark_group(name);
        g.throughput(Throughput::Elements(ARRAY_LEN as u64));
        for max_bytes in 1..=9 {
            let values = generate_values(ARRAY_LEN, max_bytes, weights);
            g.bench_with_input(
                format!("max_bytes{}/put_unsigned_vint", max_bytes),
                &values,
                |b, vs| {
                    let mut output = Vec::with_capacity(ARRAY_LEN * max_bytes);
                    b.iter(|| {
                        output.clear();
                        for v in vs {
                            output.put_unsigned_vint(*v);
                        }
                        assert!(!output.is_empty());
                    });
                },
            );

            let mut encoded = Vec::with_capacity(ARRAY_LEN * max_bytes);
            for v in values.iter() {
                encoded.put_unsigned_vint(*v);
            }
            g.bench_with_input(
                format!("max_bytes{}/get_unsigned_vint", max_bytes),
                encoded.as_slice(),
                |b, e| {
                    b.iter(|| {
                        let mut src = e;
                        for _ in 0..ARRAY_LEN {
                            src.get_unsigned_vint::<u64>().unwrap();
                        }
                        assert!(src.is_empty());
                    })
                },
            );
        }
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
