use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Which panel the form is currently showing. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Error,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url: String,
    analysis: String,
    loading: bool,
    error: String,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url: self.url.clone(),
            analysis: self.analysis.clone(),
            loading: self.loading,
            error: self.error.clone(),
            display: self.display(),
            dirty: self.dirty,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn display(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if !self.error.is_empty() {
            DisplayState::Error
        } else if !self.analysis.is_empty() {
            DisplayState::Result
        } else {
            DisplayState::Idle
        }
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.dirty = true;
    }

    /// Clears the previous outcome, raises the loading flag and hands out the id
    /// of the request about to be sent.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.error.clear();
        self.analysis.clear();
        self.loading = true;
        self.in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    pub(crate) fn finish_success(&mut self, analysis: String) {
        self.analysis = analysis;
        self.finish();
    }

    pub(crate) fn finish_failure(&mut self, message: String) {
        self.error = message;
        self.finish();
    }

    pub(crate) fn reset(&mut self) {
        self.url.clear();
        self.analysis.clear();
        self.error.clear();
        self.dirty = true;
    }

    fn finish(&mut self) {
        self.loading = false;
        self.in_flight = None;
        self.dirty = true;
    }
}
