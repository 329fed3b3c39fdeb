use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preset::{Fallbacks, Preset, ScenarioDeltas};

/// One reduced-region statistic requested from the upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    TemperatureC,
    MoistureIndex,
    VegetationIndex,
    AnnualRainfallMm,
    TerrainSlopeDeg,
    FertilityProxy,
}

impl Statistic {
    pub const ALL: [Statistic; 6] = [
        Statistic::TemperatureC,
        Statistic::MoistureIndex,
        Statistic::VegetationIndex,
        Statistic::AnnualRainfallMm,
        Statistic::TerrainSlopeDeg,
        Statistic::FertilityProxy,
    ];

    /// Reduction scale in metres the upstream service is queried at.
    pub fn scale_m(&self) -> u32 {
        match self {
            Statistic::AnnualRainfallMm => 5000,
            _ => 1000,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::TemperatureC => write!(f, "temperature_c"),
            Statistic::MoistureIndex => write!(f, "moisture_index"),
            Statistic::VegetationIndex => write!(f, "vegetation_index"),
            Statistic::AnnualRainfallMm => write!(f, "annual_rainfall_mm"),
            Statistic::TerrainSlopeDeg => write!(f, "terrain_slope_deg"),
            Statistic::FertilityProxy => write!(f, "fertility_proxy"),
        }
    }
}

/// Upstream measurements as reported; `None` is "no data".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRegionStats {
    pub temperature_c: Option<f64>,
    pub moisture_index: Option<f64>,
    pub vegetation_index: Option<f64>,
    pub annual_rainfall_mm: Option<f64>,
    pub terrain_slope_deg: Option<f64>,
    pub fertility_proxy: Option<f64>,
}

impl RawRegionStats {
    fn slot(&mut self, stat: Statistic) -> &mut Option<f64> {
        match stat {
            Statistic::TemperatureC => &mut self.temperature_c,
            Statistic::MoistureIndex => &mut self.moisture_index,
            Statistic::VegetationIndex => &mut self.vegetation_index,
            Statistic::AnnualRainfallMm => &mut self.annual_rainfall_mm,
            Statistic::TerrainSlopeDeg => &mut self.terrain_slope_deg,
            Statistic::FertilityProxy => &mut self.fertility_proxy,
        }
    }
}

impl From<&RegionStats> for RawRegionStats {
    fn from(stats: &RegionStats) -> Self {
        RawRegionStats {
            temperature_c: Some(stats.temperature_c),
            moisture_index: Some(stats.moisture_index),
            vegetation_index: Some(stats.vegetation_index),
            annual_rainfall_mm: Some(stats.annual_rainfall_mm),
            terrain_slope_deg: Some(stats.terrain_slope_deg),
            fertility_proxy: Some(stats.fertility_proxy),
        }
    }
}

/// Fully populated statistics every score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub temperature_c: f64,
    pub moisture_index: f64,
    pub vegetation_index: f64,
    pub annual_rainfall_mm: f64,
    pub terrain_slope_deg: f64,
    pub fertility_proxy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimateScenario {
    pub active: bool,
    pub deltas: ScenarioDeltas,
}

impl ClimateScenario {
    pub fn new(active: bool, preset: &Preset) -> Self {
        ClimateScenario {
            active,
            deltas: preset.scenario.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.active {
            "2035 Climate Active"
        } else {
            "Current Baseline"
        }
    }
}

/// Substitute fallbacks for missing values, then apply the scenario once.
pub fn normalize(raw: &RawRegionStats, scenario: &ClimateScenario, preset: &Preset) -> RegionStats {
    let fb: &Fallbacks = &preset.fallbacks;
    let pick = |value: Option<f64>, fallback: f64| match value {
        Some(v) if !v.is_finite() => fallback,
        Some(v) if preset.zero_is_missing && v == 0.0 => fallback,
        Some(v) => v,
        None => fallback,
    };

    let mut stats = RegionStats {
        temperature_c: pick(raw.temperature_c, fb.temperature_c),
        moisture_index: pick(raw.moisture_index, fb.moisture_index),
        vegetation_index: pick(raw.vegetation_index, fb.vegetation_index),
        annual_rainfall_mm: pick(raw.annual_rainfall_mm, fb.annual_rainfall_mm),
        terrain_slope_deg: pick(raw.terrain_slope_deg, fb.terrain_slope_deg),
        fertility_proxy: pick(raw.fertility_proxy, fb.fertility_proxy),
    };

    if scenario.active {
        let d = &scenario.deltas;
        stats.temperature_c += d.temperature_offset_c;
        stats.annual_rainfall_mm *= d.rainfall_factor;
        stats.vegetation_index *= d.vegetation_factor;
        stats.moisture_index *= d.moisture_factor;
    }

    stats
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("query for {stat} failed: {message}")]
    Query { stat: Statistic, message: String },
}

/// The external earth-observation service, reduced to one mean per statistic.
pub trait StatisticSource {
    fn fetch(&self, stat: Statistic) -> Result<Option<f64>, SourceError>;
}

/// Query every statistic; a failed query degrades to "no data".
pub fn gather(source: &dyn StatisticSource) -> RawRegionStats {
    let mut raw = RawRegionStats::default();
    for stat in Statistic::ALL {
        tracing::debug!("reducing {stat} at {} m", stat.scale_m());
        *raw.slot(stat) = match source.fetch(stat) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{e}; using fallback");
                None
            }
        };
    }
    raw
}
