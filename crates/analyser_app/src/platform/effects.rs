use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use analyser_core::{AnalysisResult, Effect, Msg};
use analyser_engine::{ApiConfig, ClientSettings, EngineEvent, EngineHandle, RequestError};
use engine_logging::{engine_debug, engine_info, engine_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: ApiConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, RequestError> {
        let engine = EngineHandle::with_config(config, ClientSettings::default())?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestAnalysis { request_id, url } => {
                    engine_info!(
                        "RequestAnalysis request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.submit(request_id, url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::RequestSent { request_id } => {
                        engine_debug!("Request {} sent", request_id);
                    }
                    EngineEvent::RequestCompleted { request_id, result } => {
                        let msg = Msg::AnalysisCompleted {
                            request_id,
                            result: to_analysis_result(request_id, result),
                        };
                        if msg_tx.send(msg).is_err() {
                            // UI is gone.
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

pub(crate) fn to_analysis_result(
    request_id: u64,
    result: Result<String, RequestError>,
) -> AnalysisResult {
    match result {
        Ok(analysis) => AnalysisResult::Success(analysis),
        Err(err) => {
            engine_warn!(
                "Request {} failed ({}): {} {:?}",
                request_id,
                err.kind,
                err.message,
                err.detail
            );
            AnalysisResult::Failed(err.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyser_engine::{FailureKind, GENERIC_FAILURE};

    #[test]
    fn success_maps_to_success() {
        assert_eq!(
            to_analysis_result(1, Ok("# Hi".to_string())),
            AnalysisResult::Success("# Hi".to_string())
        );
    }

    #[test]
    fn failure_maps_to_user_message() {
        let err = RequestError {
            kind: FailureKind::Network,
            message: GENERIC_FAILURE.to_string(),
            detail: Some("connection refused".to_string()),
        };
        assert_eq!(
            to_analysis_result(2, Err(err)),
            AnalysisResult::Failed(GENERIC_FAILURE.to_string())
        );
    }
}
