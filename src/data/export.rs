//! Flat-file export
//!
//! Writes the two tables as delimited files. The export is a derived artifact;
//! nothing in the server reads it back.

use serde_json::json;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::{DataError, DataResult};
use super::types::Dataset;

/// Table that can be exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    /// Finals: year, winner, runner-up, score
    Matches,
    /// Standings: country, ISO, wins, lat, lon
    Standings,
}

impl ExportTable {
    pub fn all() -> &'static [ExportTable] {
        &[ExportTable::Matches, ExportTable::Standings]
    }

    /// File name used on disk and in download headers
    pub fn file_name(&self, format: ExportFormat) -> String {
        let stem = match self {
            ExportTable::Matches => "world_cup_data",
            ExportTable::Standings => "world_cup_wins",
        };
        format!("{}.{}", stem, format.extension())
    }

    fn header(&self) -> &'static [&'static str] {
        match self {
            ExportTable::Matches => &["Year", "Winner", "Runner-Up", "Score"],
            ExportTable::Standings => &["Country", "ISO", "Wins", "lat", "lon"],
        }
    }
}

impl FromStr for ExportTable {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matches" | "data" => Ok(ExportTable::Matches),
            "standings" | "wins" => Ok(ExportTable::Standings),
            _ => Err(DataError::UnknownTable(s.to_string())),
        }
    }
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Parse a format name; unknown names fall back to CSV
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Render one table in the requested format
pub fn render_table(
    dataset: &Dataset,
    table: ExportTable,
    format: ExportFormat,
) -> DataResult<String> {
    match format {
        ExportFormat::Csv => format_csv(dataset, table),
        ExportFormat::Json => format_json(dataset, table),
    }
}

/// Format as CSV with a header row
fn format_csv(dataset: &Dataset, table: ExportTable) -> DataResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.header())?;

    match table {
        ExportTable::Matches => {
            for m in dataset.matches() {
                writer.write_record([
                    m.year.to_string(),
                    m.winner.clone(),
                    m.runner_up.clone(),
                    m.score.clone(),
                ])?;
            }
        }
        ExportTable::Standings => {
            for s in dataset.standings() {
                writer.write_record([
                    s.country.clone(),
                    s.iso_code.clone(),
                    s.wins.to_string(),
                    s.lat.to_string(),
                    s.lon.to_string(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DataError::Serialization(e.to_string()))
}

/// Format as a JSON array keyed by the CSV header names
fn format_json(dataset: &Dataset, table: ExportTable) -> DataResult<String> {
    let records: Vec<serde_json::Value> = match table {
        ExportTable::Matches => dataset
            .matches()
            .iter()
            .map(|m| {
                json!({
                    "Year": m.year,
                    "Winner": m.winner,
                    "Runner-Up": m.runner_up,
                    "Score": m.score
                })
            })
            .collect(),
        ExportTable::Standings => dataset
            .standings()
            .iter()
            .map(|s| {
                json!({
                    "Country": s.country,
                    "ISO": s.iso_code,
                    "Wins": s.wins,
                    "lat": s.lat,
                    "lon": s.lon
                })
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write every table as CSV into `dir`, returning the written paths
pub fn write_csv_files(dataset: &Dataset, dir: &Path) -> DataResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for &table in ExportTable::all() {
        let path = dir.join(table.file_name(ExportFormat::Csv));
        let body = format_csv(dataset, table)?;
        std::fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "Wrote export file");
        written.push(path);
    }

    Ok(written)
}
