// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hashkit::{Sha256, Sha512, hmac};

fn benchmark_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac");
    let key = b"benchmark-hmac-key";

    for len in [64usize, 1024, 16 * 1024].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        let message = vec![0xa5u8; *len];

        group.bench_with_input(format!("sha256 {} bytes", len), len, |b, _| {
            b.iter(|| hmac::<Sha256>(black_box(key), black_box(&message)));
        });
        group.bench_with_input(format!("sha512 {} bytes", len), len, |b, _| {
            b.iter(|| hmac::<Sha512>(black_box(key), black_box(&message)));
        });
    }
    group.finish();
}

fn benchmark_hmac_long_key(c: &mut Criterion) {
    // Key longer than the block forces the extra key digest
    let key = vec![0x0bu8; 200];
    let message = b"long key message";

    c.bench_function("hmac sha256 200-byte key", |b| {
        b.iter(|| hmac::<Sha256>(black_box(&key), black_box(message)));
    });
}

criterion_group!(benches, benchmark_hmac, benchmark_hmac_long_key);
criterion_main!(benches);
