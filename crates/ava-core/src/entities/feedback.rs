use serde::{Deserialize, Serialize};

/// Body for creating, updating or evaluating feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRegister {
    pub user_response_id: i64,
    pub teacher_id: i64,
    pub comment: String,
    pub grade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackTeacher {
    pub id: i64,
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub user_response_id: Option<i64>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub teacher: Option<FeedbackTeacher>,
}
