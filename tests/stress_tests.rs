//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Records from many threads never interleave on any writer
//! - The file and the second writer see the same records in the same order
//! - Child loggers on different threads share one sink safely

use rust_custom_logger::prelude::*;
use rust_custom_logger::sinks::{open_file, SharedBuffer};
use std::collections::HashSet;
use std::io::BufWriter;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 200;

#[test]
fn test_concurrent_records_stay_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let stdout = SharedBuffer::new();
    let file = open_file(&log_file).expect("Failed to open log file");
    let sink = MultiSink::new()
        .with_writer("file", BufWriter::new(file))
        .with_writer("stdout", stdout.clone());
    let encoder = add_fields(
        new_custom_encoder(OutputFormat::Json),
        &[CustomField::new("run", "stress")],
    );
    let logger = Arc::new(build_logger(LogLevel::Info, encoder, sink));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger.info_with_context(
                        format!("Thread {} - Message {} {}", thread_id, i, "x".repeat(256)),
                        LogContext::new()
                            .with_field("thread", thread_id)
                            .with_field("seq", i),
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.sync().expect("Failed to sync");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, stdout.contents_string());

    let mut seen = HashSet::new();
    for line in content.lines() {
        let record: serde_json::Value =
            serde_json::from_str(line).expect("Interleaved or truncated record");
        assert_eq!(record["run"], "stress");
        let key = (
            record["thread"].as_u64().unwrap(),
            record["seq"].as_u64().unwrap(),
        );
        assert!(seen.insert(key), "Duplicate record {:?}", key);
    }
    assert_eq!(seen.len(), THREADS * MESSAGES_PER_THREAD);
    assert_eq!(logger.metrics().total_logged(), (THREADS * MESSAGES_PER_THREAD) as u64);
    assert_eq!(logger.error_count(), 0);
}

#[test]
fn test_concurrent_child_loggers_with_stacktraces() {
    let stdout = SharedBuffer::new();
    let logger = build_logger(
        LogLevel::Warn,
        new_custom_encoder(OutputFormat::Console),
        MultiSink::new().with_writer("stdout", stdout.clone()),
    );

    thread::scope(|scope| {
        for worker in 0..4 {
            let child = logger.named("worker").with_field("id", worker);
            scope.spawn(move || {
                for i in 0..50 {
                    child.info("filtered out");
                    if i % 10 == 0 {
                        child.error(format!("failure {}", i));
                    } else {
                        child.warn(format!("retry {}", i));
                    }
                }
            });
        }
    });

    let output = stdout.contents_string();
    let headers: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("\tworker\t"))
        .collect();

    assert_eq!(headers.len(), 4 * 50);
    assert!(!output.contains("filtered out"));
    for header in headers {
        assert!(header.ends_with('}'), "Record header was split: {}", header);
    }
}
