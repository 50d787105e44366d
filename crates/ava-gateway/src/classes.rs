//! Classes.

use ava_auth::CallContext;
use ava_core::entities::{Class, ClassAssessment, CreateClass, RankedKnowledgeTrail};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// List classes. A 404 yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn list_classes(&self, ctx: &CallContext) -> Result<Vec<Class>, GatewayError> {
        self.send_list_or_empty(ctx, Call::get("/class/all")).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_class(
        &self,
        ctx: &CallContext,
        class: &CreateClass,
    ) -> Result<Class, GatewayError> {
        self.send(ctx, Call::post("/class/add").json(class)?).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn edit_class(
        &self,
        ctx: &CallContext,
        id: i64,
        class: &CreateClass,
    ) -> Result<(), GatewayError> {
        self.send_unit(ctx, Call::put(format!("/class/{id}/edit")).json(class)?)
            .await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn remove_class(&self, ctx: &CallContext, id: i64) -> Result<(), GatewayError> {
        self.send_unit(ctx, Call::delete(format!("/class/delete/{id}")))
            .await
    }

    /// Class members with each learner's tasks, responses and feedback.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn class_summary(
        &self,
        ctx: &CallContext,
        id: i64,
    ) -> Result<ClassAssessment, GatewayError> {
        self.send(ctx, Call::get(format!("/class/{id}/class-summary")))
            .await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn class_ranked_trails(
        &self,
        ctx: &CallContext,
        id: i64,
    ) -> Result<Vec<RankedKnowledgeTrail>, GatewayError> {
        self.send(ctx, Call::get(format!("/class/{id}/ranked-knowledge-trails")))
            .await
    }
}
