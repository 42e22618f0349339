//! Criterion benchmarks for rust_custom_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_custom_logger::prelude::*;
use std::io;
use std::sync::Arc;

fn null_logger(level: LogLevel, format: OutputFormat) -> Logger {
    let encoder = add_fields(
        new_custom_encoder(format),
        &[CustomField::new("service", "bench"), CustomField::new("env", "ci")],
    );
    build_logger(level, encoder, MultiSink::new().with_writer("sink", io::sink()))
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Info, "Request completed")
        .with_caller(Caller::new("src/server/handler.rs", 120))
        .with_context(
            LogContext::new()
                .with_field("request_id", "abc-123")
                .with_field("latency_ms", 42),
        );

    for format in [OutputFormat::Json, OutputFormat::Console] {
        let encoder = new_custom_encoder(format);
        group.bench_function(format.as_str(), |b| {
            b.iter(|| black_box(encoder.encode_entry(black_box(&entry))));
        });
    }

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Trace, OutputFormat::Json);

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_with_context", |b| {
        b.iter(|| {
            logger.info_with_context(
                black_box("Info message"),
                LogContext::new().with_field("user", "alice"),
            );
        });
    });

    group.bench_function("error_with_stacktrace", |b| {
        b.iter(|| {
            logger.error(black_box("Error message"));
        });
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Error, OutputFormat::Json);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(null_logger(LogLevel::Info, OutputFormat::Console));

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.info(format!("Message {}", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encoding,
    bench_logging,
    bench_level_filtering,
    bench_concurrent_logging
);
criterion_main!(benches);
