use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one analysis request for `url` to the remote service.
    RequestAnalysis { request_id: RequestId, url: String },
}
