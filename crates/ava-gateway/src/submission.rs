//! Task response submission: one response record, then one upload per file.
//!
//! Steps run strictly in order and stop at the first failure. Nothing is
//! rolled back: whatever was created before the failure stays on the
//! backend and is reported in the error.

use std::fmt;

use ava_auth::CallContext;
use ava_core::entities::{
    UserResponse, UserResponseContent, UserResponseContentRegister, UserResponseRegister,
};
use thiserror::Error;

use crate::attachment::Attachment;
use crate::client::ApiClient;
use crate::error::GatewayError;

/// A learner's answer to a task.
#[derive(Debug, Clone)]
pub struct TaskSubmission {
    /// Id of the learner-to-task link being answered.
    pub task_user_id: i64,
    pub commentary: String,
    pub files: Vec<Attachment>,
}

/// Everything the backend created for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub response: UserResponse,
    /// One entry per file, in upload order.
    pub contents: Vec<UserResponseContent>,
}

/// The step a submission failed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStage {
    CreateResponse,
    /// Uploading the file at `index` (zero-based) in the submission.
    Upload { index: usize, file_name: String },
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateResponse => f.write_str("creating the response"),
            Self::Upload { index, file_name } => {
                write!(f, "uploading file {} ({file_name})", index + 1)
            }
        }
    }
}

/// A submission that stopped partway.
#[derive(Debug, Error)]
#[error("task submission failed while {stage}")]
pub struct SubmissionError {
    pub stage: SubmissionStage,
    /// The response record, if it was created before the failure.
    pub response: Option<UserResponse>,
    /// Files uploaded before the failure. These are not removed.
    pub uploaded: Vec<UserResponseContent>,
    #[source]
    pub source: GatewayError,
}

impl ApiClient {
    /// Submit a response to a task.
    ///
    /// Creates the response record with the commentary, then attaches each
    /// file in order. The content type of each file is inferred from its
    /// MIME type and name.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] at the first failed step. Later steps are
    /// not attempted and earlier ones are not undone.
    pub async fn submit_task_response(
        &self,
        ctx: &CallContext,
        submission: &TaskSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let register = UserResponseRegister {
            task_user_id: submission.task_user_id,
            commentary: submission.commentary.clone(),
        };
        let response = self
            .create_user_response(ctx, &register)
            .await
            .map_err(|source| SubmissionError {
                stage: SubmissionStage::CreateResponse,
                response: None,
                uploaded: Vec::new(),
                source,
            })?;
        tracing::debug!(
            response_id = response.id,
            files = submission.files.len(),
            "response created"
        );

        let mut contents = Vec::with_capacity(submission.files.len());
        for (index, file) in submission.files.iter().enumerate() {
            let content = UserResponseContentRegister {
                user_response_id: response.id,
                name: file.name.clone(),
                content_type: file.content_type(),
                link: None,
            };
            match self.create_user_response_content(ctx, &content, file).await {
                Ok(uploaded) => contents.push(uploaded),
                Err(source) => {
                    tracing::warn!(
                        response_id = response.id,
                        index,
                        file = %file.name,
                        committed = contents.len(),
                        "upload failed, stopping submission"
                    );
                    return Err(SubmissionError {
                        stage: SubmissionStage::Upload {
                            index,
                            file_name: file.name.clone(),
                        },
                        response: Some(response),
                        uploaded: contents,
                        source,
                    });
                }
            }
        }

        tracing::info!(
            response_id = response.id,
            uploaded = contents.len(),
            "task response submitted"
        );
        Ok(SubmissionReceipt { response, contents })
    }
}
