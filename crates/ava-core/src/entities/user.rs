use serde::{Deserialize, Serialize};

use crate::enums::{Role, UserStatus};

/// Role as embedded in user records: `{ "id": 1, "name": "ADMIN" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl RoleRef {
    /// The parsed role, or `None` when the name is outside the enumeration.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.name)
    }
}

/// Class membership as listed on a user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserClassRef {
    #[serde(default, alias = "Id")]
    pub id: Option<i64>,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub final_date: Option<String>,
    #[serde(default)]
    pub img_class: Option<String>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub course: Option<crate::entities::CourseRef>,
}

/// User record returned by `/user/{id}` and `/user/list-all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub email: String,
    pub role: RoleRef,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::entities::null_as_empty")]
    pub classes: Vec<UserClassRef>,
}

/// User record embedded in the session token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenUser {
    pub id: i64,
    pub email: String,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub role: RoleRef,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub id_institution: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_id: Option<Vec<i64>>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_id: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStatusUpdate {
    pub status: UserStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLoginData {
    pub email: String,
    pub password: String,
}

/// Payload of a successful `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    pub id: i64,
    pub token: String,
}

/// Filters for `/user/list-all`. Unset filters are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    pub name: Option<String>,
    pub role_id: Option<i64>,
    pub course_id: Option<i64>,
    pub class_id: Option<i64>,
}

impl UserListFilter {
    /// Query pairs in the backend's parameter spelling.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(role) = self.role_id {
            pairs.push(("role", role.to_string()));
        }
        if let Some(course) = self.course_id {
            pairs.push(("courseId", course.to_string()));
        }
        if let Some(class) = self.class_id {
            pairs.push(("idClass", class.to_string()));
        }
        pairs
    }
}
