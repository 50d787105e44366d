//! Tasks and their ordering inside a trail.

use ava_auth::CallContext;
use ava_core::entities::{Task, TaskOrderUpdate, UpdateTask};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_task(
        &self,
        ctx: &CallContext,
        id: i64,
        task: &UpdateTask,
    ) -> Result<Task, GatewayError> {
        self.send(ctx, Call::patch(format!("/task/update/{id}")).json(task)?)
            .await
    }

    /// Reorder tasks. The whole list is sent in one request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_task_order(
        &self,
        ctx: &CallContext,
        order: &[TaskOrderUpdate],
    ) -> Result<(), GatewayError> {
        self.send_unit(ctx, Call::post("/task/update-order-tasks/").json(order)?)
            .await
    }
}
