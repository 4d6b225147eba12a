//! Text and JSON renderings of command results.

use std::io::Write;

use clap::ValueEnum;
use prediction_core::RankedEntry;
use prediction_scorer::SpotDetail;
use serde::{Deserialize, Serialize};

use crate::CliError;

const EMPTY_RANKING: &str = "No spots loaded for this mode yet.";
const NO_BEST: &str = "No spots for this mode yet.";
const NO_ALTERNATIVES: &str = "No clearly better spots nearby.";

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Format a distance in kilometres to one decimal place.
///
/// `{:.1}` rounds an exact tie such as `0.25` to even; distances round it
/// away from zero instead, so `0.25` reads `0.3`. Only multiples of a
/// quarter are exact ties at one decimal.
pub(crate) fn km(distance: f64) -> String {
    let quarters = distance * 4.0;
    let tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if tie {
        format!("{:.1}", distance + 0.025_f64.copysign(distance))
    } else {
        format!("{distance:.1}")
    }
}

pub(crate) fn ranked_row(entry: &RankedEntry<'_>) -> String {
    format!(
        "{}  {} km · {}  {} ({})",
        entry.spot.name,
        km(entry.spot.distance_km),
        entry.spot.access,
        entry.percent(),
        entry.band()
    )
}

pub(crate) fn best_line(best: Option<&RankedEntry<'_>>) -> String {
    best.map_or_else(
        || NO_BEST.to_owned(),
        |entry| {
            format!(
                "{} · {} km away · score {}.",
                entry.spot.name,
                km(entry.spot.distance_km),
                entry.percent()
            )
        },
    )
}

pub(crate) fn detail_lines(detail: &SpotDetail<'_>) -> Vec<String> {
    let spot = detail.spot;
    let mut lines = vec![
        spot.name.clone(),
        format!(
            "{} km · {} · Mode {}",
            km(spot.distance_km),
            spot.access,
            spot.mode.label()
        ),
        String::new(),
        "Conditions".to_owned(),
    ];
    lines.extend(spot.conditions_summary().map(|line| format!("  {line}")));
    lines.push(String::new());
    lines.push("Why this score".to_owned());
    lines.extend(detail.factors.iter().map(|factor| format!("  {factor}")));
    lines.push(String::new());
    lines.push("Better nearby".to_owned());
    if detail.alternatives.is_empty() {
        lines.push(format!("  {NO_ALTERNATIVES}"));
    } else {
        lines.extend(detail.alternatives.iter().map(|pick| {
            format!(
                "  {} · {} km: {}",
                pick.spot.name,
                km(pick.spot.distance_km),
                pick.justification
            )
        }));
    }
    lines
}

pub(crate) fn write_ranking(
    writer: &mut dyn Write,
    entries: &[RankedEntry<'_>],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, &entries),
        OutputFormat::Text if entries.is_empty() => write_lines(writer, [EMPTY_RANKING.to_owned()]),
        OutputFormat::Text => write_lines(writer, entries.iter().map(ranked_row)),
    }
}

pub(crate) fn write_best(
    writer: &mut dyn Write,
    best: Option<&RankedEntry<'_>>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, &best),
        OutputFormat::Text => write_lines(writer, [best_line(best)]),
    }
}

pub(crate) fn write_detail(
    writer: &mut dyn Write,
    detail: &SpotDetail<'_>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, detail),
        OutputFormat::Text => write_lines(writer, detail_lines(detail)),
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_lines(
    writer: &mut dyn Write,
    lines: impl IntoIterator<Item = String>,
) -> Result<(), CliError> {
    for line in lines {
        writeln!(writer, "{line}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
