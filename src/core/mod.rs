pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Device, EditPair, GenerationResult};
pub use crate::domain::ports::{ConfigProvider, Perturber, Pipeline, Storage};
pub use crate::utils::error::Result;
