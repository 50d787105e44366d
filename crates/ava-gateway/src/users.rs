//! User accounts.

use ava_auth::CallContext;
use ava_core::entities::{
    CourseContentSummary, UserData, UserListFilter, UserRegister, UserStatusUpdate, UserUpdate,
};
use ava_core::enums::{Role, UserStatus};
use reqwest::multipart::Form;

use crate::attachment::Attachment;
use crate::client::{ApiClient, Auth, Call};
use crate::error::GatewayError;

/// Path segment the registration endpoint expects for each role.
const fn registration_segment(role: Role) -> &'static str {
    match role {
        Role::Admin => "ADMIN",
        Role::Teacher => "TEACHER",
        Role::User => "STUDENT",
    }
}

impl ApiClient {
    /// List users, optionally filtered. A 404 yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn list_users(
        &self,
        ctx: &CallContext,
        filter: &UserListFilter,
    ) -> Result<Vec<UserData>, GatewayError> {
        let call = Call::get("/user/list-all")
            .auth(Auth::Public)
            .query_pairs(filter.query_pairs());
        self.send_list_or_empty(ctx, call).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn get_user(&self, ctx: &CallContext, id: i64) -> Result<UserData, GatewayError> {
        self.send(ctx, Call::get(format!("/user/{id}"))).await
    }

    /// Register a user with the given role. The optional image is sent as
    /// the `image` part next to the `user` JSON part.
    ///
    /// Self-registration has no session yet, so the credential is optional.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_user(
        &self,
        ctx: &CallContext,
        role: Role,
        user: &UserRegister,
        image: Option<&Attachment>,
    ) -> Result<(), GatewayError> {
        let json = serde_json::to_string(user).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let mut form = Form::new().text("user", json);
        if let Some(image) = image {
            form = form.part("image", image.to_part()?);
        }
        let call = Call::post(format!("/user/add/{}", registration_segment(role)))
            .auth(Auth::Optional)
            .multipart(form);
        self.send_unit(ctx, call).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_user(
        &self,
        ctx: &CallContext,
        id: i64,
        update: &UserUpdate,
    ) -> Result<(), GatewayError> {
        let call = Call::put(format!("/user/update/{id}")).json(update)?;
        self.send_unit(ctx, call).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn update_user_status(
        &self,
        ctx: &CallContext,
        id: i64,
        status: UserStatus,
    ) -> Result<(), GatewayError> {
        let call = Call::patch(format!("/user/status/{id}"))
            .auth(Auth::Optional)
            .json(&UserStatusUpdate { status })?;
        self.send_unit(ctx, call).await
    }

    /// A learner's view of a course: the course tree with their own
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn user_content_summary(
        &self,
        ctx: &CallContext,
        user_id: i64,
        course_id: i64,
    ) -> Result<CourseContentSummary, GatewayError> {
        let call = Call::get(format!("/user/{user_id}/{course_id}/content-summary"));
        self.send(ctx, call).await
    }
}
