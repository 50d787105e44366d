use ava_auth::{
    AuthPayload, Landing, RouteDecision, current_session, guard, has_route_access, landing_route,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct LandingResponse {
    role: Option<String>,
    landing: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
enum GuardResponse {
    Bypass {
        path: String,
    },
    Allow {
        path: String,
        user_id: Option<String>,
        roles: Vec<String>,
        /// Whether the session's role may open the page at all.
        role_access: bool,
    },
    Redirect {
        path: String,
        location: &'static str,
        clear_token: bool,
    },
}

/// `ava route ROLE`: no session or configuration involved.
pub fn handle_offline(args: &RouteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&landing_for(args.role.as_deref(), args.not_found), flags.format)
}

pub fn handle(args: &RouteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = current_session(&ctx.call);

    if let Some(path) = &args.path {
        return output(&guard_for(path, payload.as_ref()), flags.format);
    }

    let session_role = payload
        .as_ref()
        .and_then(AuthPayload::primary_role)
        .map(|r| r.as_str().to_string());
    let role = args.role.clone().or(session_role);
    output(&landing_for(role.as_deref(), args.not_found), flags.format)
}

fn landing_for(role: Option<&str>, not_found: bool) -> LandingResponse {
    let landing = if not_found {
        Landing::NotFound
    } else {
        Landing::AfterLogin
    };
    LandingResponse {
        role: role.map(str::to_string),
        landing: landing_route(role, landing),
    }
}

fn guard_for(path: &str, payload: Option<&AuthPayload>) -> GuardResponse {
    let path_owned = path.to_string();
    match guard(path, payload) {
        RouteDecision::Bypass => GuardResponse::Bypass { path: path_owned },
        RouteDecision::Allow { user_id, roles } => {
            let role = payload
                .and_then(AuthPayload::primary_role)
                .map(|r| r.as_str());
            GuardResponse::Allow {
                path: path_owned,
                user_id,
                roles,
                role_access: has_route_access(role, path),
            }
        }
        RouteDecision::Redirect {
            location,
            clear_token,
        } => GuardResponse::Redirect {
            path: path_owned,
            location,
            clear_token,
        },
    }
}
