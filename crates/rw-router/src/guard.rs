//! Pre-navigation hooks.
//!
//! A [`NavigationGuard`] runs before every navigation and decides whether it
//! proceeds, is redirected, or is cancelled. [`CleanUrlRedirect`] is the guard
//! that applies [`resolve_redirect`].

use crate::resolve::{Resolution, resolve_redirect};
use crate::route::RouteTable;

/// A requested navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Requested URL path.
    pub path: String,
}

impl NavigationRequest {
    /// Create a request for the given path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// How a guard resolves a pending navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed (to the next guard, then to the route).
    Continue,
    /// Abort this navigation and start a new one to the given path.
    Redirect(String),
    /// Abort this navigation.
    Cancel,
}

impl From<Resolution> for GuardDecision {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Continue => Self::Continue,
            Resolution::Redirect(target) => Self::Redirect(target),
        }
    }
}

/// Hook consulted before each navigation.
pub trait NavigationGuard: Send + Sync {
    /// Decide what happens to the navigation to `to`.
    fn before_each(&self, to: &NavigationRequest, routes: &RouteTable) -> GuardDecision;
}

impl<F> NavigationGuard for F
where
    F: Fn(&NavigationRequest, &RouteTable) -> GuardDecision + Send + Sync,
{
    fn before_each(&self, to: &NavigationRequest, routes: &RouteTable) -> GuardDecision {
        self(to, routes)
    }
}

/// Redirects clean URLs to the `.html` or trailing-slash route that exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct CleanUrlRedirect;

impl NavigationGuard for CleanUrlRedirect {
    fn before_each(&self, to: &NavigationRequest, routes: &RouteTable) -> GuardDecision {
        resolve_redirect(routes, &to.path).into()
    }
}
