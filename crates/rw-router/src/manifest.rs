//! Route manifest loading.
//!
//! The site build writes the registered routes to a manifest file. Both
//! JSON and YAML are accepted, picked by file extension (`.yaml`/`.yml` for
//! YAML, anything else is read as JSON). Each entry is either a bare path
//! or an object with a `path` field, optionally wrapped in `{ routes: [...] }`:
//!
//! ```json
//! ["/", "/guide/", { "path": "/faq.html" }]
//! ```
//!
//! ```yaml
//! routes:
//!   - /
//!   - path: /guide/
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::route::{Route, RouteTable};

/// Error returned when a route manifest cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest file does not exist.
    #[error("Route manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the manifest.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// JSON parse error.
    #[error("Invalid JSON route manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("Invalid YAML route manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Manifest entry: a bare path or a route object.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Path(String),
    Route { path: String },
}

impl From<Entry> for Route {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Path(path) | Entry::Route { path } => Route::new(path),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<Entry>),
    Wrapped { routes: Vec<Entry> },
}

impl From<Manifest> for RouteTable {
    fn from(manifest: Manifest) -> Self {
        let (Manifest::List(entries) | Manifest::Wrapped { routes: entries }) = manifest;
        entries.into_iter().map(Route::from).collect()
    }
}

/// Parse a JSON route manifest.
///
/// # Errors
///
/// Returns [`ManifestError::Json`] if the content is not a valid manifest.
pub fn parse_json(content: &str) -> Result<RouteTable, ManifestError> {
    let manifest: Manifest = serde_json::from_str(content)?;
    Ok(manifest.into())
}

/// Parse a YAML route manifest.
///
/// # Errors
///
/// Returns [`ManifestError::Yaml`] if the content is not a valid manifest.
pub fn parse_yaml(content: &str) -> Result<RouteTable, ManifestError> {
    let manifest: Manifest = serde_yaml::from_str(content)?;
    Ok(manifest.into())
}

/// Load a route manifest from disk.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or malformed.
pub fn load_manifest(path: &Path) -> Result<RouteTable, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let table = if is_yaml(path) {
        parse_yaml(&content)?
    } else {
        parse_json(&content)?
    };

    tracing::debug!(path = %path.display(), routes = table.len(), "Loaded route manifest");
    Ok(table)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
