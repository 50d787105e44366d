//! Courses.

use ava_auth::CallContext;
use ava_core::entities::{Course, CourseContentSummary, CreateCourse};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// List courses. A 404 yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn list_courses(&self, ctx: &CallContext) -> Result<Vec<Course>, GatewayError> {
        self.send_list_or_empty(ctx, Call::get("/course")).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_course(
        &self,
        ctx: &CallContext,
        course: &CreateCourse,
    ) -> Result<Course, GatewayError> {
        self.send(ctx, Call::post("/course").json(course)?).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_course(
        &self,
        ctx: &CallContext,
        id: i64,
        course: &CreateCourse,
    ) -> Result<(), GatewayError> {
        self.send_unit(ctx, Call::put(format!("/course/{id}")).json(course)?)
            .await
    }

    /// Full course tree: sections, knowledge trails, tasks and contents.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn course_content_summary(
        &self,
        ctx: &CallContext,
        id: i64,
    ) -> Result<CourseContentSummary, GatewayError> {
        self.send(ctx, Call::get(format!("/course/{id}/content-summary")))
            .await
    }
}
