use crate::domain::model::GenerationResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_csv(&self) -> &str;
    fn source_col(&self) -> &str;
    fn dest_csv(&self) -> &str;
    fn model_endpoint(&self) -> &str;
    fn cuda(&self) -> Option<bool>;
}

/// The external counterfactual model. Zero candidates is a valid answer,
/// not an error.
#[async_trait]
pub trait Perturber: Send + Sync {
    async fn perturb(&self, text: &str, num_perturbations: usize) -> Result<Vec<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load(&self) -> Result<Vec<String>>;
    async fn generate(&self, sentences: Vec<String>) -> Result<GenerationResult>;
    async fn export(&self, result: GenerationResult) -> Result<String>;
}
