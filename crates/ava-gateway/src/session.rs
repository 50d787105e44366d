//! Login.

use ava_auth::CallContext;
use ava_core::entities::{LoginData, UserLoginData};

use crate::client::{ApiClient, Auth, Call};
use crate::error::GatewayError;

impl ApiClient {
    /// Exchange credentials for a session token.
    ///
    /// The caller persists the result, see `ava_auth::persist_login`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the credentials are
    /// rejected.
    pub async fn login(
        &self,
        ctx: &CallContext,
        credentials: &UserLoginData,
    ) -> Result<LoginData, GatewayError> {
        let call = Call::post("/auth/login").auth(Auth::Public).json(credentials)?;
        self.send(ctx, call).await
    }
}
