//! Verification search request

use crate::domain::wire::{Operation, WireParams, WireRequest};

/// Look up one or more previous verification requests
///
/// A single id is sent as `request_id`; several ids are sent as repeated
/// `request_ids` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    request_ids: Vec<String>,
}

impl SearchRequest {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_ids: vec![request_id.into()],
        }
    }

    /// Search several requests at once
    ///
    /// An empty list is not rejected: the request goes out with no id at all
    /// and the server answers with its own error status.
    pub fn many<I, S>(request_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            request_ids: request_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn request_ids(&self) -> &[String] {
        &self.request_ids
    }
}

impl WireRequest for SearchRequest {
    fn operation(&self) -> Operation {
        Operation::Search
    }

    fn to_wire_params(&self) -> WireParams {
        let mut params = WireParams::new();
        match self.request_ids.as_slice() {
            [single] => params.push("request_id", single.as_str()),
            many => {
                for id in many {
                    params.push("request_ids", id.as_str());
                }
            }
        }
        params
    }
}
