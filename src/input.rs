use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::indices::ReflectancePixel;
use crate::landcover::CoverPixel;
use crate::policy::AnalysisLayer;
use crate::stats::{SourceError, Statistic, StatisticSource};
use crate::timeseries::MonthlySeries;

#[derive(Debug, Clone, Deserialize)]
pub struct InputFile {
    pub districts: Vec<DistrictRequest>,
}

/// Everything the dashboard sidebar and the statistics service hand over for
/// one district.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictRequest {
    pub state: String,
    pub district: String,
    pub target_year: u16,
    /// Defaults to the year before `target_year`.
    #[serde(default)]
    pub compare_year: Option<u16>,
    #[serde(default)]
    pub scenario: bool,
    #[serde(default = "default_layer")]
    pub layer: AnalysisLayer,
    #[serde(default)]
    pub shg_members: Option<u32>,
    #[serde(default)]
    pub stats: ReportedStats,
    #[serde(default)]
    pub mineral_pixels: Vec<ReflectancePixel>,
    #[serde(default)]
    pub landcover_pixels: Vec<CoverPixel>,
    #[serde(default)]
    pub series: Option<MonthlySeries>,
}

fn default_layer() -> AnalysisLayer {
    AnalysisLayer::LandCover
}

impl DistrictRequest {
    pub fn compare_year(&self) -> u16 {
        self.compare_year
            .unwrap_or_else(|| self.target_year.saturating_sub(1))
    }
}

/// A single statistic as the upstream service answered: a mean, or the
/// message of a failed query. JSON `null` means no data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reported {
    Value(f64),
    Failed { error: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportedStats {
    pub temperature_c: Option<Reported>,
    pub moisture_index: Option<Reported>,
    pub vegetation_index: Option<Reported>,
    pub annual_rainfall_mm: Option<Reported>,
    pub terrain_slope_deg: Option<Reported>,
    pub fertility_proxy: Option<Reported>,
}

impl StatisticSource for ReportedStats {
    fn fetch(&self, stat: Statistic) -> std::result::Result<Option<f64>, SourceError> {
        let reported = match stat {
            Statistic::TemperatureC => &self.temperature_c,
            Statistic::MoistureIndex => &self.moisture_index,
            Statistic::VegetationIndex => &self.vegetation_index,
            Statistic::AnnualRainfallMm => &self.annual_rainfall_mm,
            Statistic::TerrainSlopeDeg => &self.terrain_slope_deg,
            Statistic::FertilityProxy => &self.fertility_proxy,
        };
        match reported {
            None => Ok(None),
            Some(Reported::Value(v)) => Ok(Some(*v)),
            Some(Reported::Failed { error }) => Err(SourceError::Query {
                stat,
                message: error.clone(),
            }),
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<DistrictRequest>> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let input: InputFile = serde_json::from_str(&contents).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(input.districts)
}
