//! `rw resolve` command implementation.

use clap::Args;
use rw_router::{NavigationError, Router};
use serde::Serialize;

use super::{Format, RouterArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Request paths to resolve (e.g., /guide, /guide/install/).
    #[arg(required = true)]
    paths: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    #[command(flatten)]
    pub router: RouterArgs,
}

/// Resolution of one request path.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ResolvedPath {
    /// Requested path.
    path: String,
    /// Path the router lands on.
    resolved: String,
    /// Whether the request was redirected.
    redirected: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the manifest cannot be loaded,
    /// or if a navigation does not complete.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let router = self.router.load_router(&output)?;
        let resolved = resolve_all(&router, &self.paths)?;

        match self.format {
            Format::Text => {
                for item in &resolved {
                    if item.redirected {
                        output.redirect(&item.path, &item.resolved)?;
                    } else {
                        output.result(&item.path)?;
                    }
                }
            }
            Format::Json => output.result(&serde_json::to_string_pretty(&resolved)?)?,
        }

        Ok(())
    }
}

/// Navigate each path in order, stopping at the first failed navigation.
fn resolve_all(router: &Router, paths: &[String]) -> Result<Vec<ResolvedPath>, NavigationError> {
    paths
        .iter()
        .map(|path| -> Result<ResolvedPath, NavigationError> {
            let nav = router.navigate(path)?;
            Ok(ResolvedPath {
                path: path.clone(),
                redirected: nav.is_redirect(),
                resolved: nav.path,
            })
        })
        .collect()
}
