//! `rw routes` command implementation.

use clap::Args;

use super::{Format, RouterArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    #[command(flatten)]
    pub router: RouterArgs,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the manifest cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let router = self.router.load_router(&output)?;
        let routes = router.routes();

        match self.format {
            Format::Text => {
                for route in routes {
                    output.result(route.path())?;
                }
                output.info(&format!("{} routes", routes.len()));
            }
            Format::Json => output.result(&serde_json::to_string_pretty(routes)?)?,
        }

        Ok(())
    }
}
