//! Class rankings.

use ava_auth::CallContext;
use ava_core::entities::RankingResponse;

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// Ranking of a class, one entry per knowledge trail. An empty
    /// `trail_ids` asks for every ranked trail.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn ranking_by_class(
        &self,
        ctx: &CallContext,
        class_id: i64,
        trail_ids: &[i64],
    ) -> Result<Vec<RankingResponse>, GatewayError> {
        let call = trail_ids.iter().fold(
            Call::get(format!("/ranking/by-class/{class_id}")),
            |call, id| call.query("knowledgeTrailIds", id),
        );
        self.send(ctx, call).await
    }
}
