use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::{validate_url, AnalysisResult, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_url(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The disabled Analyse button is the only guard against overlap.
            if state.is_loading() {
                engine_debug!("Submit ignored while request {:?} is pending", state.in_flight());
                return (state, Vec::new());
            }
            if let Err(err) = validate_url(state.url()) {
                engine_info!("Submit rejected url_len={}: {}", state.url().len(), err);
                state.set_error(err.to_string());
                return (state, Vec::new());
            }
            let url = state.url().to_string();
            let request_id = state.begin_request();
            engine_info!("Submit accepted request_id={} url_len={}", request_id, url.len());
            vec![Effect::RequestAnalysis { request_id, url }]
        }
        Msg::ClearClicked => {
            if !state.is_loading() {
                state.reset();
            }
            Vec::new()
        }
        Msg::AnalysisCompleted { request_id, result } => {
            if state.in_flight() != Some(request_id) {
                engine_warn!(
                    "Ignoring completion for request_id={} (in flight: {:?})",
                    request_id,
                    state.in_flight()
                );
                return (state, Vec::new());
            }
            match result {
                AnalysisResult::Success(analysis) => state.finish_success(analysis),
                AnalysisResult::Failed(message) => state.finish_failure(message),
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
