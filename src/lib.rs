pub mod config;
pub mod errors;
pub mod flows;
pub mod intelligence;
pub mod models;
pub mod pipeline;
pub mod syve;

pub use crate::errors::PipelineError;
pub use crate::pipeline::{AccumulationReport, Pipeline};
