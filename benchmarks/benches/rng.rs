// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use pocketcrypt_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use pocketcrypt_rand::{Rng, RngConfig};

fn benchmark_rng_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_fill");

    for size in [1, 16, 32, 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let source = MockEntropySource::new(MockEntropySourceBehaviour::None);
            let mut rng = Rng::new(source, RngConfig::default()).expect("rng seeding failed");
            let mut out = vec![0u8; size];

            b.iter(|| rng.fill(black_box(&mut out)));
        });
    }
    group.finish();
}

fn benchmark_rng_reseed(c: &mut Criterion) {
    c.bench_function("rng_reseed", |b| {
        let source = MockEntropySource::new(MockEntropySourceBehaviour::None);
        let mut rng = Rng::new(source, RngConfig::default()).expect("rng seeding failed");

        b.iter(|| rng.reseed().expect("reseed failed"));
    });
}

criterion_group!(benches, benchmark_rng_fill, benchmark_rng_reseed);
criterion_main!(benches);
