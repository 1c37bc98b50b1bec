// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashkit::Algorithm;

fn benchmark_hash(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.name());

        // Sub-block, one block, and bulk inputs
        for len in [16usize, 64, 1024, 16 * 1024].iter() {
            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
                let data = vec![0x5au8; len];

                b.iter(|| algorithm.digest(black_box(&data)));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_hash);
criterion_main!(benches);
