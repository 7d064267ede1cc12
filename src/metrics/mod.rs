pub mod aggregator;
pub mod metrics_model;
