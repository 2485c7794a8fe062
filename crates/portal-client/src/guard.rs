//! Route guard: decides per navigation whether a view renders or redirects

use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

/// One guard step for a requested route (`None` for an unrecognized path).
pub fn check(is_logged_in: bool, requested: Option<Route>) -> GuardDecision {
    match requested {
        None => GuardDecision::Redirect(Route::Login),
        Some(Route::Login) if is_logged_in => GuardDecision::Redirect(Route::Home),
        Some(route) if route.is_protected() && !is_logged_in => GuardDecision::Redirect(Route::Login),
        Some(route) => GuardDecision::Render(route),
    }
}

/// Follows redirects until a view renders.
pub fn resolve(is_logged_in: bool, path: &str) -> Route {
    let mut decision = check(is_logged_in, Route::from_path(path));
    // Chains are at most two hops: unknown -> /login -> /.
    loop {
        match decision {
            GuardDecision::Render(route) => return route,
            GuardDecision::Redirect(to) => decision = check(is_logged_in, Some(to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_protected_views_redirect_to_login() {
        for route in Route::ALL.into_iter().filter(Route::is_protected) {
            assert_eq!(check(false, Some(route)), GuardDecision::Redirect(Route::Login));
            assert_eq!(resolve(false, route.path()), Route::Login);
        }
    }

    #[test]
    fn test_logged_in_protected_views_render_unchanged() {
        for route in Route::ALL.into_iter().filter(Route::is_protected) {
            assert_eq!(check(true, Some(route)), GuardDecision::Render(route));
            assert_eq!(resolve(true, route.path()), route);
        }
    }

    #[test]
    fn test_login_view() {
        assert_eq!(check(false, Some(Route::Login)), GuardDecision::Render(Route::Login));
        assert_eq!(check(true, Some(Route::Login)), GuardDecision::Redirect(Route::Home));
        assert_eq!(resolve(true, "/login"), Route::Home);
    }

    #[test]
    fn test_unknown_paths_redirect_to_login() {
        assert_eq!(check(false, None), GuardDecision::Redirect(Route::Login));
        assert_eq!(check(true, None), GuardDecision::Redirect(Route::Login));
        assert_eq!(resolve(false, "/missing"), Route::Login);
        assert_eq!(resolve(true, "/missing"), Route::Home);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for logged_in in [false, true] {
            for path in ["/", "/login", "/about", "/contact/form", "/missing"] {
                let first = resolve(logged_in, path);
                assert_eq!(resolve(logged_in, first.path()), first);
            }
        }
    }
}
