//! Route resolution behind the session gate.
//!
//! `/login` is always reachable. Without a session every other path
//! redirects to it. With a session, known paths render their page and
//! anything else renders the not-found page.

use shared::{Route, RouteDecision};

pub const LOGIN_PATH: &str = "/login";

/// Match a request path against the named routes.
///
/// Query strings, fragments and a trailing slash are ignored.
pub fn route_for_path(path: &str) -> Route {
    let path = path
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };

    Route::NAMED
        .into_iter()
        .find(|route| route.path() == Some(normalized))
        .unwrap_or(Route::NotFound)
}

pub fn resolve_route(path: &str, logged_in: bool) -> RouteDecision {
    match route_for_path(path) {
        Route::Login => RouteDecision::Render {
            route: Route::Login,
        },
        _ if !logged_in => RouteDecision::Redirect {
            to: LOGIN_PATH.to_string(),
        },
        route => RouteDecision::Render { route },
    }
}
