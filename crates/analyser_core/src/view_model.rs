use crate::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub analysis: String,
    pub loading: bool,
    pub error: String,
    pub display: DisplayState,
    pub dirty: bool,
}

impl AppViewModel {
    /// The Analyse button is disabled while a request is pending.
    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Analysing..."
        } else {
            "Analyse"
        }
    }

    /// The result panel only exists while a non-empty analysis is the active display.
    pub fn show_result(&self) -> bool {
        self.display == DisplayState::Result
    }
}
