//! Role-based navigation: default landing routes, route access checks, and
//! the request guard applied before protected pages.

use ava_core::enums::Role;

use crate::claims::{AuthPayload, has_any_role};

pub const LOGIN_ROUTE: &str = "/login";

/// Which landing table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Right after a successful login.
    AfterLogin,
    /// From the not-found page.
    NotFound,
}

/// Default route for a role. Total: unknown or absent roles get the
/// landing's fallback.
#[must_use]
pub fn landing_route(role: Option<&str>, landing: Landing) -> &'static str {
    match (role.and_then(Role::parse), landing) {
        (Some(Role::Admin), _) => "/admin",
        (Some(Role::Teacher), _) => "/professor/dashboard",
        (Some(Role::User) | None, Landing::AfterLogin) => "/home",
        (Some(Role::User), Landing::NotFound) => "/aluno/dashboard",
        (None, Landing::NotFound) => "/ranking",
    }
}

/// Whether a role may open `path`.
///
/// Login and registration are public. `/admin` is admin-only and
/// `/professor` teacher-only; everything else is open to any role.
#[must_use]
pub fn has_route_access(role: Option<&str>, path: &str) -> bool {
    const PUBLIC: [&str; 2] = ["/login", "/register"];
    if PUBLIC.iter().any(|p| path.starts_with(p)) {
        return true;
    }

    let role = role.and_then(Role::parse);
    if path.starts_with("/admin") {
        return role == Some(Role::Admin);
    }
    if path.starts_with("/professor") {
        return role == Some(Role::Teacher);
    }
    true
}

/// Outcome of [`guard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Framework asset or auth endpoint, not inspected.
    Bypass,
    /// Let the request through. Identity headers are forwarded downstream.
    Allow {
        /// The token's `sub` claim, not the numeric `id`.
        user_id: Option<String>,
        roles: Vec<String>,
    },
    /// Send the client to `location`, expiring the token cookie if asked.
    Redirect {
        location: &'static str,
        clear_token: bool,
    },
}

const BYPASS_PREFIXES: [&str; 4] = ["/_next", "/static", "/favicon", "/api/auth"];
const PROTECTED_SECTIONS: [&str; 6] = [
    "/home",
    "/turmas",
    "/professores",
    "/cursos",
    "/ranking",
    "/admin",
];
const ROLE_RULES: [(&str, &[&str]); 2] = [
    ("/dashboard", &["ADMIN"]),
    ("/reports", &["MANAGER", "ADMIN"]),
];

/// `path` equals `section` or lies below it.
fn in_section(path: &str, section: &str) -> bool {
    path.strip_prefix(section)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn is_protected(path: &str) -> bool {
    path == "/" || PROTECTED_SECTIONS.iter().any(|s| in_section(path, s))
}

/// Decide what to do with a page request.
///
/// `payload` is the already-decoded session token; `None` covers both a
/// missing and an invalid or expired token.
#[must_use]
pub fn guard(path: &str, payload: Option<&AuthPayload>) -> RouteDecision {
    if BYPASS_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteDecision::Bypass;
    }

    if is_protected(path) && payload.is_none() {
        tracing::debug!(path, "no valid session for protected route");
        return RouteDecision::Redirect {
            location: LOGIN_ROUTE,
            clear_token: true,
        };
    }

    if let Some((_, roles)) = ROLE_RULES.iter().find(|(section, _)| in_section(path, section))
        && !has_any_role(payload, roles)
    {
        tracing::debug!(path, "session lacks required role");
        return RouteDecision::Redirect {
            location: LOGIN_ROUTE,
            clear_token: false,
        };
    }

    RouteDecision::Allow {
        user_id: payload
            .map(|p| p.sub.trim().to_string())
            .filter(|sub| !sub.is_empty()),
        roles: payload.map(|p| p.role.clone()).unwrap_or_default(),
    }
}
