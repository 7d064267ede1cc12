pub mod cli;
pub mod cucumber;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod report;
