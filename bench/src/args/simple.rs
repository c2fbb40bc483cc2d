pub use media_bench_report::benchmark_kind::BenchmarkKind;
