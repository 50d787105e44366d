//! Teaching material attached to tasks.

use ava_auth::CallContext;
use ava_core::entities::{CreateTaskContent, TaskContent};
use reqwest::multipart::Form;

use crate::attachment::Attachment;
use crate::client::{ApiClient, Call, Download};
use crate::error::GatewayError;

impl ApiClient {
    /// Upload a file for a task: `taskContentStr` JSON part plus `file`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_task_content(
        &self,
        ctx: &CallContext,
        content: &CreateTaskContent,
        file: &Attachment,
    ) -> Result<TaskContent, GatewayError> {
        let json =
            serde_json::to_string(content).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let form = Form::new()
            .text("taskContentStr", json)
            .part("file", file.to_part()?);
        self.send(ctx, Call::post("/task-content/save").multipart(form))
            .await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn delete_task_content(
        &self,
        ctx: &CallContext,
        id: i64,
    ) -> Result<(), GatewayError> {
        self.send_unit(ctx, Call::delete(format!("/task-content/{id}")))
            .await
    }

    /// Download a task content file by its stored path.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn fetch_task_content(
        &self,
        ctx: &CallContext,
        file_path: &str,
    ) -> Result<Download, GatewayError> {
        let call = Call::get("/task-content/find")
            .query("filePath", file_path)
            .accept_any();
        self.send_bytes(ctx, call).await
    }
}
