use serde::{Deserialize, Serialize};

use crate::enums::DifficultyLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub knowledge_trail_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub task_order: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `PATCH /task/update/{id}`. `due_date` only applies to ranked trails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub course_id: i64,
    pub knowledge_trail_id: i64,
    pub name: String,
    pub description: String,
    pub difficulty_level: DifficultyLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_order: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskOrderUpdate {
    pub task_id: i64,
    pub new_order: i32,
}
