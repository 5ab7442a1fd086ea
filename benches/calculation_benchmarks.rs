//! Performance benchmarks for the salary breakup engine.
//!
//! Covers the pure pipeline on its own, a batch of sessions, and a
//! round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use std::sync::Arc;

use salary_breakup::api::{create_router, AppState};
use salary_breakup::calculation::SalaryCalculator;
use salary_breakup::config::PayrollConfig;
use salary_breakup::models::SalaryInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn sample_input(gross: i64) -> SalaryInput {
    SalaryInput::new(
        Decimal::from(gross),
        Decimal::from(50),
        Decimal::from(40),
        Decimal::from(10),
    )
}

/// Benchmark: one recomputation of the pipeline.
fn bench_single_recompute(c: &mut Criterion) {
    let mut calculator = SalaryCalculator::default();
    let input = sample_input(50000);

    c.bench_function("single_recompute", |b| {
        b.iter(|| black_box(calculator.recompute(black_box(&input))))
    });
}

/// Benchmark: 1000 sessions with varying gross amounts.
fn bench_batch_1000(c: &mut Criterion) {
    let config = Arc::new(PayrollConfig::default());
    let inputs: Vec<SalaryInput> = (0..1000).map(|i| sample_input(10000 + i * 50)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = inputs
                .iter()
                .map(|input| SalaryCalculator::new(Arc::clone(&config)).recompute(input))
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: POST /calculate through the router.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(PayrollConfig::default()));
    let body = serde_json::json!({
        "gross_amount": 50000,
        "basic_percentage": 50,
        "hra_percentage": 40,
        "other_percentage": 10
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_recompute,
    bench_batch_1000,
    bench_http_calculate
);
criterion_main!(benches);
