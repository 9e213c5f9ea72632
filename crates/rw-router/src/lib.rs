//! Client-side routing for RW sites.
//!
//! This crate provides:
//! - [`RouteTable`]: Routes registered with the client-side router
//! - [`resolve_redirect`]: Clean URL resolution (`/foo` to `/foo.html` or `/foo/`)
//! - [`Router`]: Navigation with pre-navigation guards
//! - [`load_manifest`]: Reading the route manifest written by the site build
//!
//! # Quick Start
//!
//! ```
//! use rw_router::{Resolution, RouteTable, Router, resolve_redirect};
//!
//! let routes = RouteTable::from_paths(["/", "/guide/", "/faq.html"]);
//!
//! assert_eq!(
//!     resolve_redirect(&routes, "/faq"),
//!     Resolution::Redirect("/faq.html".to_owned())
//! );
//!
//! let router = Router::new(routes);
//! let nav = router.navigate("/guide").unwrap();
//! assert_eq!(nav.path, "/guide/");
//! ```

mod guard;
mod manifest;
mod resolve;
mod route;
mod router;

pub use guard::{CleanUrlRedirect, GuardDecision, NavigationGuard, NavigationRequest};
pub use manifest::{ManifestError, load_manifest, parse_json, parse_yaml};
pub use resolve::{Resolution, resolve_redirect};
pub use route::{Route, RouteTable, Routes};
pub use router::{DEFAULT_MAX_REDIRECTS, Navigation, NavigationError, Router, RouterOptions};
