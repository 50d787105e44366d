//! Knowledge trails.

use ava_auth::CallContext;
use ava_core::entities::{CreateKnowledgeTrail, KnowledgeTrail, RankedKnowledgeTrail};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn create_knowledge_trail(
        &self,
        ctx: &CallContext,
        trail: &CreateKnowledgeTrail,
    ) -> Result<KnowledgeTrail, GatewayError> {
        self.send(ctx, Call::post("/knowledge-trail").json(trail)?)
            .await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn ranked_trails_by_class(
        &self,
        ctx: &CallContext,
        class_id: i64,
    ) -> Result<Vec<RankedKnowledgeTrail>, GatewayError> {
        let call = Call::get(format!("/knowledge-trail/ranked/by-class/{class_id}"));
        self.send(ctx, call).await
    }

    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn ranked_trails_by_course(
        &self,
        ctx: &CallContext,
        course_id: i64,
    ) -> Result<Vec<RankedKnowledgeTrail>, GatewayError> {
        let call = Call::get(format!("/knowledge-trail/ranked/by-course/{course_id}"));
        self.send(ctx, call).await
    }
}
