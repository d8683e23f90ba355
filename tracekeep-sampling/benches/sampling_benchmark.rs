// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use opentelemetry::trace::{SpanKind, TraceId};
use opentelemetry_sdk::trace::ShouldSample;
use std::hint::black_box;
use tracekeep::Config;
use tracekeep_sampling::{
    ConfiguredSampler, GuaranteedThroughputSampler, RateLimiter, RateSampler, Sampler,
};

struct BenchmarkConfig {
    name: &'static str,
    fraction: f64,
    max_traces_per_second: f64,
}

fn create_benchmark_configs() -> Vec<BenchmarkConfig> {
    vec![
        // Probability decision drops almost everything
        BenchmarkConfig {
            name: "low_fraction",
            fraction: 0.01,
            max_traces_per_second: 100.0,
        },
        // Every trace reaches the rate limiter
        BenchmarkConfig {
            name: "full_fraction",
            fraction: 1.0,
            max_traces_per_second: 100.0,
        },
        // Drained bucket
        BenchmarkConfig {
            name: "zero_rate",
            fraction: 1.0,
            max_traces_per_second: 0.0,
        },
    ]
}

fn bench_rate_limiter(c: &mut Criterion) {
    let Ok(limiter) = RateLimiter::new(1_000_000.0, 1_000_000.0) else {
        return;
    };
    c.bench_function("rate_limiter/check_credit", |b| {
        b.iter(|| black_box(limiter.check_credit(black_box(1.0))))
    });
}

fn bench_rate_sampler(c: &mut Criterion) {
    let sampler = RateSampler::new(0.5);
    let mut id = 0_u128;
    c.bench_function("rate_sampler/sample", |b| {
        b.iter(|| {
            id = id.wrapping_add(1);
            black_box(sampler.sample(black_box(TraceId::from(id))))
        })
    });
}

fn bench_guaranteed_throughput(c: &mut Criterion) {
    for config in create_benchmark_configs() {
        let Ok(sampler) =
            GuaranteedThroughputSampler::new(config.fraction, config.max_traces_per_second)
        else {
            continue;
        };
        let mut id = 0_u128;
        c.bench_function(
            &format!("guaranteed_throughput/{}", config.name),
            |b| {
                b.iter(|| {
                    id = id.wrapping_add(1);
                    black_box(Sampler::should_sample(&sampler, black_box(TraceId::from(id))))
                })
            },
        );
    }
}

fn bench_otel_should_sample(c: &mut Criterion) {
    let Ok(sampler) = ConfiguredSampler::from_config(&Config::default()) else {
        return;
    };
    let trace_id = TraceId::from(0x12345678901234567890123456789012_u128);
    c.bench_function("configured/otel_should_sample", |b| {
        b.iter(|| {
            black_box(ShouldSample::should_sample(
                black_box(&sampler),
                None,
                black_box(trace_id),
                "span",
                &SpanKind::Server,
                &[],
                &[],
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_rate_limiter,
    bench_rate_sampler,
    bench_guaranteed_throughput,
    bench_otel_should_sample
);
criterion_main!(benches);
