pub mod benchmark;
pub mod generate_benchmark;
pub mod load_benchmark;
