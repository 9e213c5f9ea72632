//! CLI command implementations.

pub(crate) mod resolve;
pub(crate) mod routes;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rw_config::{CliSettings, Config};
use rw_router::{Router, RouterOptions, load_manifest};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use resolve::ResolveArgs;
pub(crate) use routes::RoutesArgs;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Arguments shared by commands that load the router.
#[derive(Args)]
pub(crate) struct RouterArgs {
    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route manifest, JSON or YAML (overrides config).
    #[arg(long, env = "RW_ROUTES")]
    routes: Option<PathBuf>,

    /// Disable clean URL redirects.
    #[arg(long)]
    no_clean_urls: bool,

    /// Maximum redirects followed per navigation (overrides config).
    #[arg(long)]
    max_redirects: Option<u8>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RouterArgs {
    /// Load configuration and the route manifest, and build the router.
    pub(crate) fn load_router(&self, output: &Output) -> Result<Router, CliError> {
        let cli_settings = CliSettings {
            routes: self.routes.clone(),
            clean_urls: self.no_clean_urls.then_some(false),
            max_redirects: self.max_redirects,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        build_router(&config, output)
    }
}

/// Build a router from resolved configuration.
fn build_router(config: &Config, output: &Output) -> Result<Router, CliError> {
    let router_config = &config.router_resolved;
    let routes = load_manifest(&router_config.routes)?;

    tracing::info!(
        config = %config_source(config),
        manifest = %router_config.routes.display(),
        routes = routes.len(),
        clean_urls = router_config.clean_urls,
        "Loaded route manifest"
    );
    if routes.is_empty() {
        output.warning(&format!(
            "Route manifest {} has no routes",
            router_config.routes.display()
        ));
    }

    let options = RouterOptions {
        clean_urls: router_config.clean_urls,
        max_redirects: router_config.max_redirects,
    };
    Ok(Router::with_options(routes, &options))
}

/// Describe where the configuration came from, for logs.
fn config_source(config: &Config) -> String {
    config
        .config_path
        .as_ref()
        .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string())
}
