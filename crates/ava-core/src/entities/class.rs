use serde::{Deserialize, Serialize};

use crate::entities::{CourseRef, RoleRef};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, alias = "finalDate")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub img_class: Option<String>,
}

/// Body for creating or editing a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClass {
    pub code: Option<String>,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub semester: Option<i32>,
    pub course_id: Option<i64>,
    pub img_class: Option<String>,
}

// ---------------------------------------------------------------------------
// Class assessment (`/class/{id}/class-summary`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssessment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub knowledge_trail_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseContentAssessment {
    pub task_content_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponseAssessment {
    pub id: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub contents: Vec<ResponseContentAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackAssessment {
    pub id: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub grade: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUserAssessment {
    /// The task-user link id.
    pub id: i64,
    pub id_user: i64,
    pub task_id: i64,
    #[serde(default)]
    pub task: Option<TaskAssessment>,
    #[serde(default)]
    pub user_response: Option<UserResponseAssessment>,
    #[serde(default)]
    pub feedback: Option<FeedbackAssessment>,
}

impl TaskUserAssessment {
    /// Submitted and still waiting for a teacher's feedback.
    #[must_use]
    pub const fn awaiting_feedback(&self) -> bool {
        self.user_response.is_some() && self.feedback.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAssessment {
    pub id: i64,
    pub email: String,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    pub role: RoleRef,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub tasks_assessment: Vec<TaskUserAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssessment {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub final_date: Option<String>,
    #[serde(default)]
    pub img_class: Option<String>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub course: Option<CourseRef>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub users: Vec<UserAssessment>,
}

impl ClassAssessment {
    /// Submissions across the class still waiting for feedback.
    #[must_use]
    pub fn pending_feedback(&self) -> usize {
        self.users
            .iter()
            .flat_map(|u| &u.tasks_assessment)
            .filter(|t| t.awaiting_feedback())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_summary_counts_pending_feedback() {
        let json = r#"{
            "Id": 3,
            "nome": "Turma B",
            "course": {"id": 1, "name": "ADS"},
            "users": [{
                "id": 9, "email": "x@y", "nome": "Bia", "role": {"name": "USER"},
                "tasksAssessment": [
                    {"id": 1, "idUser": 9, "taskId": 4,
                     "userResponse": {"id": 11, "comment": "ok", "contents": []},
                     "feedback": null},
                    {"id": 2, "idUser": 9, "taskId": 5,
                     "userResponse": {"id": 12, "comment": null, "contents": null},
                     "feedback": {"id": 1, "comment": "bom", "grade": 9.5}},
                    {"id": 3, "idUser": 9, "taskId": 6, "userResponse": null, "feedback": null}
                ]
            }]
        }"#;
        let summary: ClassAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 3);
        assert_eq!(summary.pending_feedback(), 1);
    }
}
