use calc_core::eval::prelude::evaluate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "1 + 2 * 3".to_string(),
        "2**3**2 - (4 / 8) * 16".to_string(),
        "# header\n((((1.5e3 + 2) * 3) - 4) / 5) ** 0.5".to_string(),
        (0..200).map(|i| i.to_string()).collect::<Vec<_>>().join(" + "),
        format!("{}1{}", "(".repeat(64), ")".repeat(64)),
    ];

    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression.len()),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression.as_bytes()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
