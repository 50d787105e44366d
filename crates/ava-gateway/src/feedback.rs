//! Teacher feedback on learner responses.

use ava_auth::CallContext;
use ava_core::entities::{Feedback, FeedbackRegister};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_feedback(
        &self,
        ctx: &CallContext,
        feedback: &FeedbackRegister,
    ) -> Result<Feedback, GatewayError> {
        self.send(ctx, Call::post("/feedback").json(feedback)?).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_feedback(
        &self,
        ctx: &CallContext,
        id: i64,
        feedback: &FeedbackRegister,
    ) -> Result<Feedback, GatewayError> {
        self.send(ctx, Call::put(format!("/feedback/{id}")).json(feedback)?)
            .await
    }

    /// Create or replace the feedback for a response in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn evaluate_feedback(
        &self,
        ctx: &CallContext,
        feedback: &FeedbackRegister,
    ) -> Result<Feedback, GatewayError> {
        self.send(ctx, Call::post("/feedback/evaluate").json(feedback)?)
            .await
    }
}
