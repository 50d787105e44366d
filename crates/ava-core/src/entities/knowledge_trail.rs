use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeTrail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub section_id: Option<i64>,
    #[serde(default)]
    pub ranked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeTrail {
    pub name: String,
    pub section_id: i64,
    pub ranked: bool,
}

/// Task inside a ranked trail, with submission statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedTask {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub quantity_submissions: u32,
    #[serde(default)]
    pub last_submission: Option<String>,
    #[serde(default)]
    pub knowledge_trail_id: Option<i64>,
    #[serde(default)]
    pub knowledge_trail_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedKnowledgeTrail {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub tasks: Vec<RankedTask>,
}
