pub mod common;
pub mod defaults;
pub mod kind;
pub mod simple;
pub mod thumbnail;
