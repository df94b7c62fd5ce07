use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_error, engine_info};

use crate::{
    AnalysisClient, ApiConfig, ClientSettings, EngineEvent, ReqwestAnalysisClient, RequestError,
    RequestId,
};

enum EngineCommand {
    Analyze { request_id: RequestId, url: String },
}

/// Runs analysis requests on a background tokio runtime.
///
/// Commands go in over a channel; results come back as [`EngineEvent`]s and are
/// polled with [`EngineHandle::try_recv`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
            engine_info!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Engine backed by the real HTTP client.
    pub fn with_config(config: ApiConfig, settings: ClientSettings) -> Result<Self, RequestError> {
        let client = ReqwestAnalysisClient::new(config, settings)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn AnalysisClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze { request_id, url } => {
            let _ = event_tx.send(EngineEvent::RequestSent { request_id });
            let result = client.analyze(&url).await;
            let _ = event_tx.send(EngineEvent::RequestCompleted { request_id, result });
        }
    }
}
