//! Clean URL redirect resolution.
//!
//! Built sites use two routing conventions:
//!
//! - `/foo/` is rendered from `/foo/{README|index}.md`
//! - `/foo.html` is rendered from `/foo.md`
//!
//! Links and hand-typed URLs often omit both (`/foo`) or pick the wrong one
//! (`/foo/` for a standalone page). When a requested path has no exact
//! route, [`resolve_redirect`] picks the sibling that does exist:
//!
//! | Request  | Tried, in order           |
//! |----------|---------------------------|
//! | `/foo`   | `/foo.html`, then `/foo/` |
//! | `/foo/`  | `/foo.html`               |
//! | `/foo.html` | nothing                |

use crate::route::Routes;

const HTML_SUFFIX: &str = ".html";

/// Outcome of resolving a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Navigate to the requested path unchanged.
    Continue,
    /// Navigate to this path instead.
    Redirect(String),
}

impl Resolution {
    /// Redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Continue => None,
            Self::Redirect(target) => Some(target.as_str()),
        }
    }
}

/// Resolve a requested path against the registered routes.
///
/// Paths are compared verbatim: no case folding, no percent-decoding, and
/// query strings or fragments are not stripped. A path with no matching
/// sibling resolves to [`Resolution::Continue`] so the router can handle
/// it (usually by rendering its not-found page).
pub fn resolve_redirect<R>(routes: &R, path: &str) -> Resolution
where
    R: Routes + ?Sized,
{
    if routes.has_route(path) {
        return Resolution::Continue;
    }

    if let Some(stem) = path.strip_suffix('/') {
        let html = format!("{stem}{HTML_SUFFIX}");
        return redirect_if_exists(routes, html);
    }

    if path.ends_with(HTML_SUFFIX) {
        return Resolution::Continue;
    }

    let html = format!("{path}{HTML_SUFFIX}");
    if routes.has_route(&html) {
        return Resolution::Redirect(html);
    }
    redirect_if_exists(routes, format!("{path}/"))
}

fn redirect_if_exists<R>(routes: &R, candidate: String) -> Resolution
where
    R: Routes + ?Sized,
{
    if routes.has_route(&candidate) {
        Resolution::Redirect(candidate)
    } else {
        Resolution::Continue
    }
}
