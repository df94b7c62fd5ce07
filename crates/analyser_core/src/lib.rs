//! Analyser core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{AnalysisResult, Msg};
pub use state::{AppState, DisplayState, RequestId};
pub use update::update;
pub use validate::{validate_url, ValidationError};
pub use view_model::AppViewModel;
