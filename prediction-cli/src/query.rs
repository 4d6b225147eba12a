//! Argument layering and resolution shared by the query commands.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use prediction_core::{Mode, SearchSettings, SpotCatalog, UserLocation};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::render::OutputFormat;
use crate::{
    ARG_CATALOG, ARG_FORMAT, ARG_LAT, ARG_LON, ARG_MODE, ARG_RADIUS_KM, ARG_SPOT_ID, CliError,
    ENV_BEST_CATALOG, ENV_DETAIL_CATALOG, ENV_DETAIL_SPOT_ID, ENV_RANK_CATALOG,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Score every spot of one mode and list them best first. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank the spots of one mode"
)]
#[ortho_config(prefix = "PURE")]
pub(crate) struct RankArgs {
    /// Path to the JSON spot catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Activity mode to rank (`land` or `boat`).
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<Mode>,
    /// Search radius in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Latitude of the user location.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user location.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Output format (`text` or `json`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// CLI arguments for the `best` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "best",
    long_about = "Report the single highest-scoring spot of one mode. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Show the best opportunity for one mode"
)]
#[ortho_config(prefix = "PURE")]
pub(crate) struct BestArgs {
    /// Path to the JSON spot catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Activity mode to search (`land` or `boat`).
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<Mode>,
    /// Search radius in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Latitude of the user location.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user location.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Output format (`text` or `json`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// CLI arguments for the `detail` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "detail",
    long_about = "Show the score, conditions, scoring factors, and justified \
                 alternatives for one spot. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Explain one spot and suggest better nearby spots"
)]
#[ortho_config(prefix = "PURE")]
pub(crate) struct DetailArgs {
    /// Path to the JSON spot catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Identifier of the spot to explain.
    #[arg(value_name = "spot-id")]
    #[serde(default)]
    pub(crate) spot_id: Option<String>,
    /// Activity mode used for alternatives (`land` or `boat`).
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<Mode>,
    /// Search radius in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Latitude of the user location.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user location.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Output format (`text` or `json`).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Merged query options before validation.
#[derive(Debug, Clone, Default)]
struct QueryOptions {
    catalog: Option<Utf8PathBuf>,
    mode: Option<Mode>,
    radius_km: Option<f64>,
    lat: Option<f64>,
    lon: Option<f64>,
    format: Option<OutputFormat>,
}

impl From<RankArgs> for QueryOptions {
    fn from(args: RankArgs) -> Self {
        Self {
            catalog: args.catalog,
            mode: args.mode,
            radius_km: args.radius_km,
            lat: args.lat,
            lon: args.lon,
            format: args.format,
        }
    }
}

impl From<BestArgs> for QueryOptions {
    fn from(args: BestArgs) -> Self {
        Self {
            catalog: args.catalog,
            mode: args.mode,
            radius_km: args.radius_km,
            lat: args.lat,
            lon: args.lon,
            format: args.format,
        }
    }
}

impl From<DetailArgs> for QueryOptions {
    fn from(args: DetailArgs) -> Self {
        Self {
            catalog: args.catalog,
            mode: args.mode,
            radius_km: args.radius_km,
            lat: args.lat,
            lon: args.lon,
            format: args.format,
        }
    }
}

/// Resolved options shared by `rank`, `best`, and `detail`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    /// Path to the JSON spot catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Validated mode and radius.
    pub(crate) settings: SearchSettings,
    /// User location, when both coordinates were supplied.
    pub(crate) location: Option<UserLocation>,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl QueryConfig {
    fn resolve(options: QueryOptions, catalog_env: &'static str) -> Result<Self, CliError> {
        let catalog = options.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: catalog_env,
        })?;

        let defaults = SearchSettings::default();
        let settings = SearchSettings::new(
            options.mode.unwrap_or(defaults.mode()),
            options.radius_km.unwrap_or(defaults.radius_km()),
        )?;

        let location = match (options.lat, options.lon) {
            (Some(lat), Some(lon)) => Some(UserLocation::new(lat, lon)),
            (None, None) => None,
            _ => return Err(CliError::IncompleteLocation),
        };

        Ok(Self {
            catalog,
            settings,
            location,
            format: options.format.unwrap_or_default(),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)
    }

    /// Load and decode the configured catalog.
    pub(crate) fn load_catalog(&self) -> Result<SpotCatalog, CliError> {
        load_catalog(&self.catalog)
    }
}

impl TryFrom<RankArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.into(), ENV_RANK_CATALOG)
    }
}

impl TryFrom<BestArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: BestArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.into(), ENV_BEST_CATALOG)
    }
}

/// Resolved `detail` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DetailConfig {
    /// Identifier of the spot to explain.
    pub(crate) spot_id: String,
    /// Shared query options.
    pub(crate) query: QueryConfig,
}

impl TryFrom<DetailArgs> for DetailConfig {
    type Error = CliError;

    fn try_from(args: DetailArgs) -> Result<Self, Self::Error> {
        let spot_id = args.spot_id.clone().ok_or(CliError::MissingArgument {
            field: ARG_SPOT_ID,
            env: ENV_DETAIL_SPOT_ID,
        })?;
        let query = QueryConfig::resolve(args.into(), ENV_DETAIL_CATALOG)?;
        Ok(Self { spot_id, query })
    }
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

impl BestArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

impl DetailArgs {
    pub(crate) fn into_config(self) -> Result<DetailConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DetailConfig::try_from(merged)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON-encoded [`SpotCatalog`] from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<SpotCatalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = SpotCatalog::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded {} spots from {path}", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
pub(crate) fn rank_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::try_from(merged)
}

#[cfg(test)]
pub(crate) fn detail_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DetailConfig, CliError> {
    let merged = DetailArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DetailConfig::try_from(merged)
}
