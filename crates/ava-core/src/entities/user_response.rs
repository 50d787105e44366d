use serde::{Deserialize, Serialize};

use crate::enums::TaskContentType;

/// Body for `POST /user-response`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseRegister {
    pub task_user_id: i64,
    pub commentary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseContent {
    pub id: i64,
    pub content_url: String,
    pub content_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_response_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub task_user_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub contents: Vec<UserResponseContent>,
}

/// Metadata part of a response file upload (`userContentStr`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseContentRegister {
    pub user_response_id: i64,
    pub name: String,
    pub content_type: TaskContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
