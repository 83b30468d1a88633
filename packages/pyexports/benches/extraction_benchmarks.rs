//! Benchmarks for end-to-end extraction
//!
//! Run with: cargo bench --bench extraction_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pyexports::Extractor;

/// Generate a module with N functions, every other one exported
fn generate_module(count: usize) -> String {
    let exported: Vec<String> = (0..count)
        .step_by(2)
        .map(|i| format!("\"function_{i}\""))
        .collect();

    let mut source = format!("__all__ = [{}]\n\n", exported.join(", "));
    for i in 0..count {
        source.push_str(&format!(
            r#"def function_{i}(arg1, arg2, *rest, flag=False):
    result = arg1 + arg2
    return result

"#
        ));
    }
    source
}

fn bench_extract(c: &mut Criterion) {
    let extractor = Extractor::new();
    let mut group = c.benchmark_group("extract");

    for count in [10, 100, 1000] {
        let source = generate_module(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            b.iter(|| extractor.extract(black_box(source)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
