//! Navigation with guards.
//!
//! [`Router`] owns the route table and runs registered guards before each
//! navigation. A redirect starts a fresh navigation to the target, so every
//! guard sees the redirected path too. Redirect chains are bounded by
//! [`RouterOptions::max_redirects`].

use crate::guard::{CleanUrlRedirect, GuardDecision, NavigationGuard, NavigationRequest};
use crate::route::RouteTable;

/// Default bound on consecutive redirects for one navigation.
pub const DEFAULT_MAX_REDIRECTS: u8 = 10;

/// Router construction options.
#[derive(Clone, Debug)]
pub struct RouterOptions {
    /// Register the [`CleanUrlRedirect`] guard.
    pub clean_urls: bool,
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: u8,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            clean_urls: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// A completed navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Final path after all redirects.
    pub path: String,
    /// Originally requested path, if the navigation was redirected.
    pub redirected_from: Option<String>,
}

impl Navigation {
    /// Whether any guard redirected the navigation.
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Error returned when a navigation does not complete.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// A guard cancelled the navigation.
    #[error("Navigation to {path} was cancelled")]
    Cancelled {
        /// Path being navigated to when the guard cancelled.
        path: String,
    },
    /// Guards kept redirecting past the configured limit.
    #[error("Navigation to {from} exceeded {limit} redirects (last target: {last})")]
    RedirectLimit {
        /// Originally requested path.
        from: String,
        /// Last redirect target seen.
        last: String,
        /// Configured limit.
        limit: u8,
    },
}

/// Client-side router: route table plus pre-navigation guards.
pub struct Router {
    routes: RouteTable,
    guards: Vec<Box<dyn NavigationGuard>>,
    max_redirects: u8,
}

impl Router {
    /// Create a router with the default options.
    #[must_use]
    pub fn new(routes: RouteTable) -> Self {
        Self::with_options(routes, &RouterOptions::default())
    }

    /// Create a router with explicit options.
    #[must_use]
    pub fn with_options(routes: RouteTable, options: &RouterOptions) -> Self {
        let mut router = Self {
            routes,
            guards: Vec::new(),
            max_redirects: options.max_redirects,
        };
        if options.clean_urls {
            router.before_each(CleanUrlRedirect);
        }
        router
    }

    /// Register a guard. Guards run in registration order.
    pub fn before_each(&mut self, guard: impl NavigationGuard + 'static) -> &mut Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Registered routes.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Navigate to `path`, running guards and following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Cancelled`] if a guard cancels, or
    /// [`NavigationError::RedirectLimit`] if redirects do not settle.
    pub fn navigate(&self, path: &str) -> Result<Navigation, NavigationError> {
        let mut request = NavigationRequest::new(path);
        let mut redirects: u8 = 0;

        loop {
            match self.run_guards(&request) {
                GuardDecision::Continue => {
                    let redirected_from = (redirects > 0).then(|| path.to_owned());
                    return Ok(Navigation {
                        path: request.path,
                        redirected_from,
                    });
                }
                GuardDecision::Cancel => {
                    tracing::debug!(path = %request.path, "Navigation cancelled");
                    return Err(NavigationError::Cancelled { path: request.path });
                }
                GuardDecision::Redirect(target) => {
                    if redirects >= self.max_redirects {
                        return Err(NavigationError::RedirectLimit {
                            from: path.to_owned(),
                            last: target,
                            limit: self.max_redirects,
                        });
                    }
                    redirects += 1;
                    tracing::debug!(from = %request.path, to = %target, "Redirecting navigation");
                    request = NavigationRequest::new(target);
                }
            }
        }
    }

    /// First non-continue decision among the guards.
    fn run_guards(&self, request: &NavigationRequest) -> GuardDecision {
        self.guards
            .iter()
            .map(|guard| guard.before_each(request, &self.routes))
            .find(|decision| *decision != GuardDecision::Continue)
            .unwrap_or(GuardDecision::Continue)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("guards", &self.guards.len())
            .field("max_redirects", &self.max_redirects)
            .finish()
    }
}
