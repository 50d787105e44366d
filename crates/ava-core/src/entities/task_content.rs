use serde::{Deserialize, Serialize};

use crate::enums::TaskContentType;

/// Metadata part of a task content upload. `link` only applies to `LINK`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskContent {
    pub task_id: i64,
    pub name: String,
    pub task_content_type: TaskContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskContent {
    pub id: i64,
    pub task_id: i64,
    pub name: String,
    pub content_type: TaskContentType,
    pub content_url: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
