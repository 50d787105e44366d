use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTask {
    pub task_id: i64,
    pub task_name: String,
    #[serde(default)]
    pub task_description: Option<String>,
}

/// Learner dashboard buckets from `/dashboard/user/general`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserGeneralDashboard {
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub waiting_feedback_tasks: Vec<DashboardTask>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub pending_tasks: Vec<DashboardTask>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub evaluated_tasks: Vec<DashboardTask>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminGeneralDashboard {
    pub total_active_users: u64,
    pub total_courses: u64,
    pub total_ranked_tasks: u64,
    pub total_tasks: u64,
    pub total_teachers: u64,
}
