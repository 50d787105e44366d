//! Dashboards.
//!
//! One endpoint serves both views; the backend picks the shape from the
//! caller's role.

use ava_auth::CallContext;
use ava_core::entities::{AdminGeneralDashboard, UserGeneralDashboard};

use crate::client::{ApiClient, Call};
use crate::error::GatewayError;

const GENERAL_DASHBOARD: &str = "/dashboard/user/general";

impl ApiClient {
    /// The logged-in learner's task buckets.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn user_general_dashboard(
        &self,
        ctx: &CallContext,
    ) -> Result<UserGeneralDashboard, GatewayError> {
        self.send(ctx, Call::get(GENERAL_DASHBOARD)).await
    }

    /// Platform totals, as returned to administrators.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails.
    pub async fn admin_general_dashboard(
        &self,
        ctx: &CallContext,
    ) -> Result<AdminGeneralDashboard, GatewayError> {
        self.send(ctx, Call::get(GENERAL_DASHBOARD)).await
    }
}
