//! Classifier service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use vmatch_models::{Prediction, RasterFrame};

use crate::encode::frame_to_base64_png;
use crate::error::{ClassifyError, ClassifyResult};
use crate::types::{ClassifyRequest, ClassifyResponse, ModelInfo};

/// Configuration for the classifier client.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Base URL of the classifier service
    pub base_url: String,
    /// Request timeout. `None` waits indefinitely for the model, as
    /// the original page does; a collaborator that never responds will
    /// hang the comparison flow.
    pub timeout: Option<Duration>,
    /// How many predictions to request per frame
    pub top_k: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8601".to_string(),
            timeout: None,
            top_k: 3,
        }
    }
}

impl ClassifierConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VMATCH_CLASSIFIER_URL")
                .unwrap_or_else(|_| "http://localhost:8601".to_string()),
            timeout: std::env::var("VMATCH_CLASSIFIER_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
            top_k: std::env::var("VMATCH_CLASSIFIER_TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
        }
    }
}

/// Classification seam the comparison orchestrator depends on.
#[async_trait]
pub trait FrameClassifier: Send + Sync {
    /// Classify one frame, returning predictions most-confident first.
    async fn classify(&self, frame: &RasterFrame) -> ClassifyResult<Vec<Prediction>>;
}

/// Client for the external classification service.
pub struct ClassifierClient {
    http: Client,
    config: ClassifierConfig,
    model: ModelInfo,
}

impl ClassifierClient {
    /// Load the model: verify the service is up and holding one, and
    /// return a handle to it.
    pub async fn load(config: ClassifierConfig) -> ClassifyResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClassifyError::Network)?;

        let url = format!("{}/model", config.base_url);
        let response = match http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "classifier service unreachable");
                return Err(ClassifyError::ModelUnavailable(e.to_string()));
            }
        };

        if !response.status().is_success() {
            return Err(ClassifyError::ModelUnavailable(format!(
                "service returned {}",
                response.status()
            )));
        }

        let model: ModelInfo = response.json().await?;
        info!(model = %model.name, version = ?model.version, "classifier model loaded");
        Ok(Self {
            http,
            config,
            model,
        })
    }

    /// Description of the loaded model.
    pub fn model(&self) -> &ModelInfo {
        &self.model
    }
}

#[async_trait]
impl FrameClassifier for ClassifierClient {
    async fn classify(&self, frame: &RasterFrame) -> ClassifyResult<Vec<Prediction>> {
        let request = ClassifyRequest {
            image: frame_to_base64_png(frame)?,
            top_k: self.config.top_k,
        };

        let url = format!("{}/classify", self.config.base_url);
        debug!(width = frame.width, height = frame.height, "classifying frame");

        // No retry: a failed classification requires a new
        // user-initiated attempt.
        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::RequestFailed(format!(
                "classifier service returned {status}: {body}"
            )));
        }

        let body = response.text().await?;
        let parsed: ClassifyResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;
        let mut predictions = parsed.predictions;
        // The ordering contract must not depend on service discipline.
        predictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(count = predictions.len(), "classification complete");
        Ok(predictions)
    }
}
