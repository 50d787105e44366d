use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRanking {
    pub name: String,
    pub conclusion_percent: f64,
    pub tasks_sent: u32,
    pub tasks_reviewed: u32,
    pub total_tasks: u32,
    #[serde(default)]
    pub medium_grade: Option<f64>,
    #[serde(default)]
    pub last_response_date: Option<String>,
    pub points_earned: f64,
    pub place: u32,
}

/// Ranking of one knowledge trail within a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub name: String,
    pub knowledge_trail_id: i64,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub students_ranking: Vec<StudentRanking>,
}
