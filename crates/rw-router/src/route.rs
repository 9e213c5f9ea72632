//! Route table.
//!
//! A [`RouteTable`] is the list of paths registered with the client-side
//! router, as produced by the site build. Lookups are exact string matches:
//! `/guide`, `/guide/` and `/guide.html` are three distinct routes.

use serde::{Deserialize, Serialize};

/// A registered navigable path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    path: String,
}

impl Route {
    /// Create a route for the given URL path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// URL path of the route (e.g., "/", "/guide/", "/guide/install.html").
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// Existence check over a collection of routes.
///
/// Implemented for everything the resolver may be handed: the owned
/// [`RouteTable`], plain slices of [`Route`], and slices of path strings.
pub trait Routes {
    /// Whether a route with exactly this path is registered.
    fn has_route(&self, path: &str) -> bool;
}

/// Ordered list of registered routes.
///
/// Keeps registration order for listing and allows duplicates, mirroring
/// how the router exposes its routes. Existence checks scan the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a route table from URL paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        paths.into_iter().map(Route::new).collect()
    }

    /// Register a route.
    pub fn push(&mut self, route: impl Into<Route>) {
        self.routes.push(route.into());
    }

    /// Whether a route with exactly this path is registered.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.path == path)
    }

    /// Iterate over routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Number of registered routes (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Route> for RouteTable {
    fn extend<T: IntoIterator<Item = Route>>(&mut self, iter: T) {
        self.routes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl Routes for RouteTable {
    fn has_route(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl Routes for [Route] {
    fn has_route(&self, path: &str) -> bool {
        self.iter().any(|route| route.path == path)
    }
}

impl Routes for Vec<Route> {
    fn has_route(&self, path: &str) -> bool {
        self.as_slice().has_route(path)
    }
}

impl Routes for [&str] {
    fn has_route(&self, path: &str) -> bool {
        self.iter().any(|p| *p == path)
    }
}

impl Routes for Vec<String> {
    fn has_route(&self, path: &str) -> bool {
        self.iter().any(|p| p == path)
    }
}
