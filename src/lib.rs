pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpPerturber;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::GenEngine, pipeline::CounterfactualPipeline};
pub use utils::error::{GenError, Result};
