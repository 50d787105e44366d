//! Learner-to-task links.

use ava_auth::CallContext;
use ava_core::entities::{TaskUser, TaskUserRegister};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_task_user(
        &self,
        ctx: &CallContext,
        link: &TaskUserRegister,
    ) -> Result<TaskUser, GatewayError> {
        self.send(ctx, Call::post("/user-task").json(link)?).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn task_user_by_user_and_task(
        &self,
        ctx: &CallContext,
        user_id: i64,
        task_id: i64,
    ) -> Result<TaskUser, GatewayError> {
        let call = Call::get(format!("/user-task/user/{user_id}/task/{task_id}"));
        self.send(ctx, call).await
    }
}
