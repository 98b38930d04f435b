// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bulwark_core::num::safe::{SafeI64, SafeU32, SafeUsize};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const LEN: usize = 4096;

fn operands_i64() -> Vec<(i64, i64)> {
    (0..LEN as i64)
        .map(|i| (i.wrapping_mul(2_654_435_761), (i % 97) - 48))
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let operands = operands_i64();
    let mut group = c.benchmark_group("arithmetic_i64");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function(BenchmarkId::new("native_wrapping", LEN), |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for &(x, y) in black_box(&operands) {
                acc = acc.wrapping_add(x.wrapping_mul(y));
            }
            acc
        })
    });

    group.bench_function(BenchmarkId::new("native_checked", LEN), |b| {
        b.iter(|| {
            let mut acc = Some(0i64);
            for &(x, y) in black_box(&operands) {
                acc = acc.and_then(|a| x.checked_mul(y).and_then(|m| a.checked_add(m)));
            }
            acc
        })
    });

    group.bench_function(BenchmarkId::new("safe_integral", LEN), |b| {
        b.iter(|| {
            let mut acc = SafeI64::zero();
            for &(x, y) in black_box(&operands) {
                acc += SafeI64::new(x) * y;
            }
            acc.get()
        })
    });

    group.bench_function(BenchmarkId::new("safe_integral_div", LEN), |b| {
        b.iter(|| {
            let mut acc = SafeI64::zero();
            for &(x, y) in black_box(&operands) {
                acc += SafeI64::new(x) / y;
            }
            acc.get()
        })
    });

    group.finish();
}

fn bench_bits(c: &mut Criterion) {
    let words: Vec<u32> = (0..LEN as u32).map(|i| i.wrapping_mul(0x9e37_79b9)).collect();
    let mut group = c.benchmark_group("bits_u32");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function(BenchmarkId::new("safe_integral_mix", LEN), |b| {
        b.iter(|| {
            let mut acc = SafeU32::zero();
            for &w in black_box(&words) {
                acc ^= (SafeU32::new(w) << (w & 31)) | (w >> 3);
            }
            acc.get()
        })
    });

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let sizes: Vec<SafeUsize> = (0..LEN).map(SafeUsize::new).collect();
    c.bench_function("sum_usize", |b| {
        b.iter(|| black_box(&sizes).iter().sum::<SafeUsize>().get())
    });
}

criterion_group!(benches, bench_arithmetic, bench_bits, bench_sum);
criterion_main!(benches);
