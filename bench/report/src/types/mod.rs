pub mod benchmark_kind;
pub mod report;
pub mod summary;
