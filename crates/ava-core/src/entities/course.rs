use serde::{Deserialize, Serialize};

use crate::entities::Class;

/// Minimal course reference embedded in class and user records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub quantity_semester: i32,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub classes: Vec<Class>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub sections: Vec<Section>,
}

/// Body for creating or updating a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    pub name: String,
    pub quantity_semester: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_id: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskContentSummary {
    pub id: i64,
    pub content_type: String,
    pub content_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub task_order: Option<i32>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub contents: Vec<TaskContentSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeTrailSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ranked: Option<bool>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub knowledge_trails: Vec<KnowledgeTrailSummary>,
}

/// Course tree: sections → knowledge trails → tasks → contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseContentSummary {
    pub id: i64,
    pub name: String,
    pub quantity_semester: i32,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub sections: Vec<SectionSummary>,
}

impl CourseContentSummary {
    /// Total number of tasks across every section and trail.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.knowledge_trails)
            .map(|t| t.tasks.len())
            .sum()
    }
}
