use ava_auth::cookie::{login_cookies, normalize_token};
use ava_auth::{Landing, decode_payload, landing_route};
use ava_core::entities::UserLoginData;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: i64,
    role: Option<String>,
    landing: &'static str,
    expires_at: Option<String>,
    /// `Set-Cookie` values a server would send with the login response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    set_cookie: Vec<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = UserLoginData {
        email: args.email.clone(),
        password: args.password.clone(),
    };

    let login = {
        let _spinner = Progress::spinner("logging in", flags);
        ctx.client.login(&ctx.call, &credentials).await?
    };
    ava_auth::persist_login(ctx.store.as_ref(), &login)?;

    let token = normalize_token(&login.token).unwrap_or_default();
    let payload = decode_payload(&token);
    let role = payload.as_ref().and_then(ava_auth::AuthPayload::primary_role);
    tracing::info!(user_id = login.id, role = ?role, "logged in");

    let set_cookie = if flags.server {
        login_cookies(&token, login.id).to_vec()
    } else {
        Vec::new()
    };

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: login.id,
            role: role.map(|r| r.as_str().to_string()),
            landing: landing_route(role.map(|r| r.as_str()), Landing::AfterLogin),
            expires_at: payload
                .as_ref()
                .and_then(ava_auth::AuthPayload::expires_at)
                .map(|t| t.to_rfc3339()),
            set_cookie,
        },
        flags.format,
    )
}
