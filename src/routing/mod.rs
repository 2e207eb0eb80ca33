//! Path-to-handler routing.
//!
//! Routes live in a fixed-priority table evaluated first-match-wins. No
//! method discrimination happens here; that is the file handler's job.

/// A path-matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(p) => path == *p,
            Pattern::Prefix(p) => path.starts_with(p),
        }
    }
}

/// Identifies which handler answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo,
    UserAgent,
    Files,
}

// Order is significant: "/" must stay exact, and "/echo/" is tried before
// the shorter prefixes.
const ROUTE_TABLE: &[(Pattern, Route)] = &[
    (Pattern::Exact("/"), Route::Root),
    (Pattern::Prefix("/echo/"), Route::Echo),
    (Pattern::Prefix("/user-agent"), Route::UserAgent),
    (Pattern::Prefix("/files"), Route::Files),
];

/// Resolves a request path to a route. Pure function over the static table;
/// `None` means no handler matches.
pub fn resolve(path: &str) -> Option<Route> {
    ROUTE_TABLE
        .iter()
        .find(|(pattern, _)| pattern.matches(path))
        .map(|&(_, route)| route)
}
