#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed Analyse (or Enter in the input box).
    SubmitClicked,
    /// User asked to reset the form.
    ClearClicked,
    /// Engine finished a request.
    AnalysisCompleted {
        request_id: crate::RequestId,
        result: AnalysisResult,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of one analysis request as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    /// Markdown report returned by the service.
    Success(String),
    /// User-facing failure message.
    Failed(String),
}
