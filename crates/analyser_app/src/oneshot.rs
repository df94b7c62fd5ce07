//! Non-interactive entry points: analyse one URL, or probe the service.

use std::process::ExitCode;

use analyser_core::{update, AppState, Effect, Msg};
use analyser_engine::{
    render_html, render_plain_text, AnalysisClient, ApiConfig, ClientSettings,
    ReqwestAnalysisClient,
};
use anyhow::Context;
use engine_logging::{engine_info, engine_warn};

use crate::cli::OutputFormat;
use crate::platform::effects::to_analysis_result;

/// Runs one submission through the form state machine and prints the outcome.
pub fn analyse(url: &str, format: OutputFormat, config: ApiConfig) -> anyhow::Result<ExitCode> {
    let (state, _) = update(AppState::new(), Msg::InputChanged(url.to_string()));
    let (mut state, effects) = update(state, Msg::SubmitClicked);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let client = ReqwestAnalysisClient::new(config, ClientSettings::default())?;

    for effect in effects {
        match effect {
            Effect::RequestAnalysis { request_id, url } => {
                engine_info!("One-shot request_id={} url={}", request_id, url);
                let result = runtime.block_on(client.analyze(&url));
                (state, _) = update(
                    state,
                    Msg::AnalysisCompleted {
                        request_id,
                        result: to_analysis_result(request_id, result),
                    },
                );
            }
        }
    }

    let view = state.view();
    if !view.error.is_empty() {
        eprintln!("Error: {}", view.error);
        return Ok(ExitCode::FAILURE);
    }
    print!("{}", format_report(&view.analysis, format));
    Ok(ExitCode::SUCCESS)
}

/// Prints the service status message.
pub fn check(config: ApiConfig) -> anyhow::Result<ExitCode> {
    let base = config.base_url().to_string();
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let client = ReqwestAnalysisClient::new(config, ClientSettings::default())?;

    match runtime.block_on(client.health()) {
        Ok(message) => {
            println!("{base}: {message}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            engine_warn!("Health check against {} failed: {:?}", base, err);
            eprintln!("{base}: {}", err.message);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub(crate) fn format_report(analysis: &str, format: OutputFormat) -> String {
    let mut out = match format {
        OutputFormat::Markdown => analysis.to_string(),
        OutputFormat::Text => render_plain_text(analysis),
        OutputFormat::Html => render_html(analysis),
    };
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
