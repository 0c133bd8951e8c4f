// Adapters layer: concrete implementations for external systems.

use crate::domain::model::Device;
use crate::domain::ports::Perturber;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for the Polyjuice serving process. One operation: send a sentence,
/// get back zero or more candidate edits.
pub struct HttpPerturber {
    client: Client,
    endpoint: String,
    device: Device,
}

#[derive(Debug, Serialize)]
struct PerturbRequest<'a> {
    text: &'a str,
    num_perturbations: usize,
    device: Device,
}

#[derive(Debug, Deserialize)]
struct PerturbResponse {
    perturbations: Vec<String>,
}

impl HttpPerturber {
    pub fn new(endpoint: String, device: Device) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            device,
        }
    }

    pub fn device(&self) -> Device {
        self.device
    }
}

#[async_trait]
impl Perturber for HttpPerturber {
    async fn perturb(&self, text: &str, num_perturbations: usize) -> Result<Vec<String>> {
        tracing::debug!(
            "Requesting {} perturbation(s) from {}",
            num_perturbations,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PerturbRequest {
                text,
                num_perturbations,
                device: self.device,
            })
            .send()
            .await?
            .error_for_status()?;

        let body: PerturbResponse = response.json().await?;

        tracing::debug!("Model returned {} candidate(s)", body.perturbations.len());
        Ok(body.perturbations)
    }
}
