pub mod analytics;
pub mod args;
pub mod benchmarks;
pub mod client;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod runner;
pub mod thumbnails;
