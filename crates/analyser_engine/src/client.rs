use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::{
    AnalyzeRequest, AnalyzeResponse, ApiConfig, FailureKind, HealthResponse, RequestError,
    FAILED_TO_ANALYZE, GENERIC_FAILURE,
};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("web_analyser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// The remote analysis service, as seen by the engine.
#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Returns the markdown analysis for `url`, or the user-facing failure.
    async fn analyze(&self, url: &str) -> Result<String, RequestError>;

    /// Returns the service's status message.
    async fn health(&self) -> Result<String, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(config: ApiConfig, settings: ClientSettings) -> Result<Self, RequestError> {
        // Connect timeout only; requests themselves never time out.
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .user_agent(settings.user_agent)
            .build()
            .map_err(|err| {
                RequestError::new(FailureKind::Network, GENERIC_FAILURE).with_detail(err.to_string())
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, url: &str) -> Result<String, RequestError> {
        let endpoint = self.config.analyze_endpoint();
        engine_info!("POST {} url_len={}", endpoint, url.len());

        let response = self
            .client
            .post(endpoint.as_str())
            .json(&AnalyzeRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        engine_debug!("POST {} -> {} ({} bytes)", endpoint, status, body.len());

        interpret_analyze_response(status.as_u16(), &body)
    }

    async fn health(&self) -> Result<String, RequestError> {
        let endpoint = self.config.health_endpoint();
        let response = self
            .client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16()));
        }
        let health: HealthResponse = response.json().await.map_err(|err| {
            RequestError::new(FailureKind::InvalidResponse, "Invalid response from the service")
                .with_detail(err.to_string())
        })?;
        Ok(health.message)
    }
}

/// Turns a raw `/analyze` response into the analysis or the message to show.
///
/// Priority: the server's own message, then the transport (status) message,
/// then a generic fallback.
pub fn interpret_analyze_response(status: u16, body: &[u8]) -> Result<String, RequestError> {
    let parsed = serde_json::from_slice::<AnalyzeResponse>(body);
    let is_success_status = (200..300).contains(&status);

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(err) if is_success_status => {
            engine_warn!("Unparsable analysis response ({} bytes): {}", body.len(), err);
            return Err(
                RequestError::new(FailureKind::InvalidResponse, FAILED_TO_ANALYZE)
                    .with_detail(err.to_string()),
            );
        }
        Err(_) => {
            let err = status_error(status);
            engine_warn!("Analysis request failed: {}", err.message);
            return Err(err);
        }
    };

    if !is_success_status {
        let err = match parsed.server_message() {
            Some(message) => RequestError::new(FailureKind::HttpStatus(status), message),
            None => status_error(status),
        };
        engine_warn!("Analysis request failed with status {}: {}", status, err.message);
        return Err(err);
    }

    if parsed.success {
        return Ok(parsed.analysis.unwrap_or_default());
    }

    let message = parsed
        .server_message()
        .unwrap_or_else(|| FAILED_TO_ANALYZE.to_string());
    engine_warn!("Service reported failure: {}", message);
    Err(RequestError::new(FailureKind::ServerReported, message))
}

fn status_error(status: u16) -> RequestError {
    RequestError::new(
        FailureKind::HttpStatus(status),
        format!("Request failed with status code {status}"),
    )
}

fn map_transport_error(err: reqwest::Error) -> RequestError {
    engine_warn!("Transport failure: {}", err);
    RequestError::new(FailureKind::Network, GENERIC_FAILURE).with_detail(err.to_string())
}
