use ava_auth::{AuthPayload, Landing, current_session, landing_route};
use ava_core::ExecutionContext;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    roles: Vec<String>,
    landing: &'static str,
    expires_at: Option<String>,
    token_source: &'static str,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source = match ctx.call.execution() {
        ExecutionContext::Server => "cookie",
        ExecutionContext::Browser => "session-store",
    };
    let payload = current_session(&ctx.call);
    let status = status_from(payload.as_ref(), ctx.call.bearer().is_some(), token_source);
    output(&status, flags.format)
}

fn status_from(
    payload: Option<&AuthPayload>,
    has_token: bool,
    token_source: &'static str,
) -> AuthStatusResponse {
    let role = payload.and_then(AuthPayload::primary_role);
    let note = match (payload, has_token) {
        (Some(_), _) => None,
        (None, true) => Some("stored token is malformed or expired".to_string()),
        (None, false) => Some("no session token found".to_string()),
    };
    AuthStatusResponse {
        authenticated: payload.is_some(),
        user_id: payload.and_then(AuthPayload::user_id),
        roles: payload.map(|p| p.role.clone()).unwrap_or_default(),
        landing: landing_route(role.map(|r| r.as_str()), Landing::AfterLogin),
        expires_at: payload
            .and_then(AuthPayload::expires_at)
            .map(|t| t.to_rfc3339()),
        token_source,
        note,
    }
}
