//! Learner responses and their uploaded files.

use ava_auth::CallContext;
use ava_core::entities::{
    UserResponse, UserResponseContent, UserResponseContentRegister, UserResponseRegister,
};
use reqwest::multipart::Form;

use crate::attachment::Attachment;
use crate::client::{ApiClient, Call, Download};
use crate::error::GatewayError;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_user_response(
        &self,
        ctx: &CallContext,
        response: &UserResponseRegister,
    ) -> Result<UserResponse, GatewayError> {
        self.send(ctx, Call::post("/user-response").json(response)?)
            .await
    }

    /// Attach one file to a response: `userContentStr` JSON part plus `file`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_user_response_content(
        &self,
        ctx: &CallContext,
        content: &UserResponseContentRegister,
        file: &Attachment,
    ) -> Result<UserResponseContent, GatewayError> {
        let json =
            serde_json::to_string(content).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let form = Form::new()
            .text("userContentStr", json)
            .part("file", file.to_part()?);
        self.send(ctx, Call::post("/user-response-content/save").multipart(form))
            .await
    }

    /// Download a file a learner submitted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn fetch_user_response_content(
        &self,
        ctx: &CallContext,
        file_path: &str,
    ) -> Result<Download, GatewayError> {
        let call = Call::get("/user-response-content/find")
            .query("filePath", file_path)
            .accept_any();
        self.send_bytes(ctx, call).await
    }
}
