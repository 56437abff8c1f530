use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{CustomizationOptions, EvolutionStats, GenerateResponse, GenerationRequest};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Server error: HTTP {status}: {message}")]
    Server { status: u16, message: String },
}

/// The generation service as seen from the page.
#[async_trait(?Send)]
pub trait EvolutionApi {
    /// `POST /generate`. Application-level failures come back as
    /// `GenerateResponse::Rejected`, not as an error.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse, ApiError>;

    /// `GET /evolution-stats`
    async fn evolution_stats(&self) -> Result<EvolutionStats, ApiError>;

    /// `GET /customization-options`
    async fn customization_options(&self) -> Result<CustomizationOptions, ApiError>;
}

/// HTTP client for the generation service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl EvolutionApi for ApiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse, ApiError> {
        let url = self.config.api_url("generate");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Failures arrive as HTTP 500 with a `{success: false}` body, so the
        // body is decoded whatever the status.
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_generate(status, &text)
    }

    async fn evolution_stats(&self) -> Result<EvolutionStats, ApiError> {
        self.get_json("evolution-stats").await
    }

    async fn customization_options(&self) -> Result<CustomizationOptions, ApiError> {
        self.get_json("customization-options").await
    }
}

/// Decode a generate body. An undecodable body is a server error when the
/// status already says so, a parse error otherwise.
fn decode_generate(status: u16, text: &str) -> Result<GenerateResponse, ApiError> {
    serde_json::from_str(text).map_err(|e| {
        if response_is_error(status) {
            ApiError::Server {
                status,
                message: e.to_string(),
            }
        } else {
            ApiError::Parse(e.to_string())
        }
    })
}

fn response_is_error(status: u16) -> bool {
    !(200..300).contains(&status)
}
