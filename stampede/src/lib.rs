#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod history;
pub mod result;
pub mod runner;
pub mod stats;

pub(crate) mod user;

pub use config::TestConfig;
pub use error::RequestError;
pub use history::{AggregateMetrics, TestHistory};
pub use result::{RunResult, RunSummary};
pub use runner::{run_load_test, LoadTest};

pub mod prelude {
    pub use crate::history::{AggregateMetrics, TestHistory};
    pub use crate::result::RunSummary;
    pub use crate::runner::{run_load_test, LoadTest};
}
