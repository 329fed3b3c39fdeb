use serde::{Deserialize, Serialize};

use crate::policy::AnalysisLayer;
use crate::stats::Statistic;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly samples for the target and comparison years; `None` where the
/// upstream query returned nothing (cloud cover, memory limits).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySeries {
    pub target: Vec<Option<f64>>,
    pub compare: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub months: [&'static str; 12],
    pub target_year: u16,
    pub compare_year: u16,
    pub target: Vec<f64>,
    pub baseline: Vec<f64>,
}

/// Twelve points; a missing month repeats the previous one, or 0 in January.
pub fn fill_gaps(samples: &[Option<f64>]) -> Vec<f64> {
    let mut filled = Vec::with_capacity(MONTHS.len());
    let mut last = 0.0;
    for month in 0..MONTHS.len() {
        if let Some(v) = samples.get(month).copied().flatten() {
            last = v;
        }
        filled.push(last);
    }
    filled
}

fn axis(stat: Statistic) -> (&'static str, &'static str) {
    match stat {
        Statistic::TemperatureC => (
            "Monthly Land Surface Temperature (LST)",
            "Temperature (°C)",
        ),
        Statistic::MoistureIndex => ("Monthly Moisture Index (NDWI)", "Moisture Index (NDWI)"),
        Statistic::VegetationIndex => ("Monthly Crop Biomass (NDVI)", "Vegetation Index (NDVI)"),
        _ => ("Monthly Precipitation Accumulation", "Rainfall (mm)"),
    }
}

/// `None` when neither year has a single sample to plot.
pub fn comparison_chart(
    layer: AnalysisLayer,
    target_year: u16,
    compare_year: u16,
    series: &MonthlySeries,
) -> Option<ComparisonChart> {
    let has_data = |s: &[Option<f64>]| s.iter().any(Option::is_some);
    if !has_data(&series.target) && !has_data(&series.compare) {
        return None;
    }

    let (title, y_label) = axis(layer.chart_statistic());
    Some(ComparisonChart {
        title,
        y_label,
        months: MONTHS,
        target_year,
        compare_year,
        target: fill_gaps(&series.target),
        baseline: fill_gaps(&series.compare),
    })
}
