//! Analyser engine: API configuration, the HTTP client for the analysis
//! service, the background request runner and markdown rendering.
mod client;
mod config;
mod engine;
mod markdown;
mod types;

pub use client::{interpret_analyze_response, AnalysisClient, ClientSettings, ReqwestAnalysisClient};
pub use config::{
    ApiConfig, ConfigError, API_BASE_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_ORIGIN, ORIGIN_ENV,
};
pub use engine::EngineHandle;
pub use markdown::{parse_blocks, render_html, render_plain_text, Block, BlockKind, Span, SpanStyle};
pub use types::{
    AnalyzeRequest, AnalyzeResponse, EngineEvent, FailureKind, HealthResponse, RequestError,
    RequestId, FAILED_TO_ANALYZE, GENERIC_FAILURE,
};
