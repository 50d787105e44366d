use ava_auth::cookie::logout_cookies;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    set_cookie: Vec<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ava_auth::logout(ctx.store.as_ref())?;
    let set_cookie = if flags.server {
        logout_cookies().to_vec()
    } else {
        Vec::new()
    };
    output(
        &AuthLogoutResponse {
            cleared: true,
            set_cookie,
        },
        flags.format,
    )
}
