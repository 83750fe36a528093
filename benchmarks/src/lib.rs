pub mod benchmarks;
pub mod helpers;
pub mod registry;
