//! Data-transfer structs mirrored from the LMS backend.
//!
//! Fields use the backend's camelCase spelling on the wire. The client holds
//! no authoritative state: every struct here is created, read, updated or
//! deleted only by a round-trip to the backend.

use serde::{Deserialize, Deserializer};

mod class;
mod course;
mod dashboard;
mod feedback;
mod knowledge_trail;
mod ranking;
mod task;
mod task_content;
mod task_user;
mod user;
mod user_response;

pub use class::{
    Class, ClassAssessment, CreateClass, FeedbackAssessment, ResponseContentAssessment,
    TaskAssessment, TaskUserAssessment, UserAssessment, UserResponseAssessment,
};
pub use course::{
    Course, CourseContentSummary, CourseRef, CreateCourse, KnowledgeTrailSummary, Section,
    SectionSummary, TaskContentSummary, TaskSummary,
};
pub use dashboard::{AdminGeneralDashboard, DashboardTask, UserGeneralDashboard};
pub use feedback::{Feedback, FeedbackRegister, FeedbackTeacher};
pub use knowledge_trail::{CreateKnowledgeTrail, KnowledgeTrail, RankedKnowledgeTrail, RankedTask};
pub use ranking::{RankingResponse, StudentRanking};
pub use task::{Task, TaskOrderUpdate, UpdateTask};
pub use task_content::{CreateTaskContent, TaskContent};
pub use task_user::{TaskUser, TaskUserRegister};
pub use user::{
    LoginData, RoleRef, TokenUser, UserClassRef, UserData, UserListFilter, UserLoginData,
    UserRegister, UserStatusUpdate, UserUpdate,
};
pub use user_response::{
    UserResponse, UserResponseContent, UserResponseContentRegister, UserResponseRegister,
};

/// Deserialize a list the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
