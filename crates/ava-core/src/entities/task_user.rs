use serde::{Deserialize, Serialize};

use crate::entities::UserResponse;

/// Body for `POST /user-task`: links a learner to a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUserRegister {
    pub user_id: i64,
    pub task_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUser {
    /// The task-user link id, used when submitting a response.
    pub id: i64,
    pub id_user: i64,
    pub task_id: i64,
    #[serde(default)]
    pub user_response: Option<UserResponse>,
}
