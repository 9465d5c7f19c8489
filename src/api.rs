//! Transport-independent request/response surface.
//!
//! Renders dispatch outcomes into the response shape the web tier serves:
//! success bodies keyed `"Report Data Task IDs"` (update) or
//! `"Report Data Task ID"` (remove), failures `{"Error": <message>}` with
//! status 400 for caller-input errors and 500 for collaborator failures.

use serde_json::json;
use tracing::warn;

use crate::dispatch::{RemoveParams, ReportDataDispatcher, UpdateParams};
use crate::error::DispatchError;

/// Status code plus JSON body; the transport layer serializes these as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

pub struct ReportDataApi {
    dispatcher: ReportDataDispatcher,
}

impl ReportDataApi {
    pub fn new(dispatcher: ReportDataDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Handle an update (GET) request.
    pub async fn update_report_data(&self, params: UpdateParams) -> ApiResponse {
        match self.dispatcher.dispatch_update(params).await {
            Ok(task_ids) => ApiResponse {
                status: 200,
                body: json!({ "Report Data Task IDs": task_ids }),
            },
            Err(error) => error_response(error),
        }
    }

    /// Handle a remove (DELETE) request.
    pub async fn remove_report_data(&self, params: RemoveParams) -> ApiResponse {
        match self.dispatcher.dispatch_remove(params).await {
            Ok(task_id) => ApiResponse {
                status: 200,
                body: json!({ "Report Data Task ID": task_id }),
            },
            Err(error) => error_response(error),
        }
    }
}

fn error_response(error: DispatchError) -> ApiResponse {
    let status = if error.is_caller_error() { 400 } else { 500 };
    warn!(status = status, error = %error, "Report data request rejected");
    ApiResponse {
        status,
        body: json!({ "Error": error.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = error_response(DispatchError::required_parameter("schema"));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["Error"], "schema is a required parameter.");
    }

    #[test]
    fn test_collaborator_failures_are_500() {
        let response = error_response(DispatchError::Queue("unreachable".to_string()));
        assert_eq!(response.status, 500);
    }
}
