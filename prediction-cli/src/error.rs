//! Error types emitted by the Pure Prediction CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use prediction_core::{CatalogError, SettingsError};
use thiserror::Error;

/// Errors emitted by the Pure Prediction CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one half of the user location was supplied.
    #[error("--lat and --lon must be given together")]
    IncompleteLocation,
    /// The search radius was rejected.
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog JSON could not be decoded.
    #[error("failed to parse catalog at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The requested spot is not in the catalog.
    #[error("no spot with id {id:?} in catalog {path:?}")]
    UnknownSpot { id: String, path: Utf8PathBuf },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
