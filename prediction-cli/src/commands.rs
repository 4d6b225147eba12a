//! Query command implementations for the Pure Prediction CLI.

use std::io::Write;

use log::info;
use prediction_scorer::{AlternativeRecommender, ProximityScorer, SpotRanker, best};

use crate::CliError;
use crate::query::{BestArgs, DetailArgs, QueryConfig, RankArgs};
use crate::render::{write_best, write_detail, write_ranking};

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    rank_with_config(&config, writer)
}

pub(crate) fn rank_with_config(
    config: &QueryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = config.load_catalog()?;
    let context = config.settings.context(config.location);
    let ranked = SpotRanker::new(ProximityScorer::default()).rank(
        &catalog,
        config.settings.mode(),
        &context,
    );
    write_ranking(writer, &ranked, config.format)
}

pub(crate) fn run_best_with(args: BestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    best_with_config(&config, writer)
}

pub(crate) fn best_with_config(
    config: &QueryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = config.load_catalog()?;
    let context = config.settings.context(config.location);
    let ranked = SpotRanker::new(ProximityScorer::default()).rank(
        &catalog,
        config.settings.mode(),
        &context,
    );
    let top = best(&ranked);
    if top.is_none() {
        info!("no {} spots in {}", config.settings.mode(), config.catalog);
    }
    write_best(writer, top, config.format)
}

pub(crate) fn run_detail_with(
    args: DetailArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.query.validate_sources()?;
    detail_with_config(&config.spot_id, &config.query, writer)
}

pub(crate) fn detail_with_config(
    spot_id: &str,
    config: &QueryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = config.load_catalog()?;
    let context = config.settings.context(config.location);
    let detail = AlternativeRecommender::new(ProximityScorer::default())
        .detail(&catalog, spot_id, config.settings.mode(), &context)
        .ok_or_else(|| CliError::UnknownSpot {
            id: spot_id.to_owned(),
            path: config.catalog.clone(),
        })?;
    write_detail(writer, &detail, config.format)
}
