//! Executions sub-client — save, update, delete, list.

use crate::client::ChirpClient;
use crate::domain::execution::wire::{DeleteEnvelope, ExecutionEnvelope, ExecutionsEnvelope};
use crate::domain::execution::Execution;
use crate::domain::require_field;
use crate::error::SdkError;
use crate::http::Auth;

use serde_json::{json, Value};

/// Sub-client for execution operations. All of them authenticate with the
/// provider's token, read fresh at call time.
pub struct Executions<'a> {
    pub(crate) client: &'a ChirpClient,
}

impl<'a> Executions<'a> {
    /// Persist a new execution; returns the saved record as the server
    /// echoed it (ids and server-side fields filled in).
    pub async fn save(&self, execution: &Execution) -> Result<Execution, SdkError> {
        let url = format!("{}/api/execution", self.client.http.base_url());
        let envelope: ExecutionEnvelope = self
            .client
            .http
            .post(&url, Some(&json!({ "execution": execution })), Auth::Bearer)
            .await?;
        require_field(envelope.execution, envelope.message, "Error saving execution")
    }

    /// Update an existing execution; returns the updated record.
    pub async fn update(&self, execution: &Execution) -> Result<Execution, SdkError> {
        let url = format!("{}/api/execution", self.client.http.base_url());
        let envelope: ExecutionEnvelope = self
            .client
            .http
            .put(&url, Some(&json!({ "execution": execution })), Auth::Bearer)
            .await?;
        require_field(envelope.execution, envelope.message, "Error updating execution")
    }

    /// Delete an execution by id; returns the server's `result` value.
    pub async fn delete(&self, execution_id: &str) -> Result<Value, SdkError> {
        let url = format!(
            "{}/api/execution/{}",
            self.client.http.base_url(),
            urlencoding::encode(execution_id)
        );
        let envelope: DeleteEnvelope = self.client.http.delete(&url, Auth::Bearer).await?;
        require_field(envelope.result, envelope.message, "Error deleting execution")
    }

    /// List all executions belonging to the authenticated user.
    pub async fn list(&self) -> Result<Vec<Execution>, SdkError> {
        let url = format!("{}/api/execution/all", self.client.http.base_url());
        let envelope: ExecutionsEnvelope = self.client.http.get(&url, Auth::Bearer).await?;
        require_field(
            envelope.executions,
            envelope.message,
            "Error getting executions",
        )
    }
}
