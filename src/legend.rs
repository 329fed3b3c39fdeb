use serde::Serialize;

use crate::landcover::LandCoverClass;
use crate::policy::AnalysisLayer;
use crate::stats::RegionStats;

const DIVERGING: [&str; 6] = [
    "#d73027", "#fc8d59", "#fee08b", "#d9ef8b", "#91cf60", "#1a9850",
];

/// Color ramp and legend the map component renders for the active layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
    pub palette: Vec<&'static str>,
    pub labels: Vec<String>,
    /// RGB band assignment for composite layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<[&'static str; 3]>,
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Six labels: below-min, four steps across the range, above-max.
fn stepped_labels(min: f64, max: f64, decimals: usize, sep: &str, unit: &str) -> Vec<String> {
    let step = round_to((max - min) / 5.0, decimals);
    let mut labels = vec![format!("<{min:.decimals$}{unit}")];
    let mut lo = min;
    for k in 1..=3 {
        let hi = round_to(min + step * f64::from(k), decimals);
        labels.push(format!("{lo:.decimals$}{sep}{hi:.decimals$}{unit}"));
        lo = hi;
    }
    labels.push(format!("{lo:.decimals$}{sep}{max:.decimals$}{unit}"));
    labels.push(format!(">{max:.decimals$}{unit}"));
    labels
}

pub fn legend_for(layer: AnalysisLayer, stats: &RegionStats) -> Legend {
    match layer {
        AnalysisLayer::LandCover => Legend {
            title: "ESA + Sentinel Fusion",
            min: 1.0,
            max: 9.0,
            palette: LandCoverClass::ALL.iter().map(|c| c.color()).collect(),
            labels: LandCoverClass::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            bands: None,
        },
        AnalysisLayer::DroughtRisk => {
            let min = round_to(stats.temperature_c - 3.0, 1);
            let max = round_to(stats.temperature_c + 3.0, 1);
            Legend {
                title: "MODIS Thermal Profile",
                min,
                max,
                palette: vec![
                    "#313695", "#91bfdb", "#ffffbf", "#fc8d59", "#d73027", "#a50026",
                ],
                labels: stepped_labels(min, max, 1, "-", "°C"),
                bands: None,
            }
        }
        AnalysisLayer::Groundwater => {
            let min = round_to(stats.moisture_index - 0.2, 2);
            let max = round_to(stats.moisture_index + 0.2, 2);
            Legend {
                title: "Sentinel-2 Moisture Availability",
                min,
                max,
                palette: DIVERGING.to_vec(),
                labels: stepped_labels(min, max, 2, " to ", ""),
                bands: None,
            }
        }
        AnalysisLayer::CropHealth => {
            let min = round_to(stats.vegetation_index - 0.2, 2);
            let max = round_to(stats.vegetation_index + 0.3, 2);
            let mut labels = stepped_labels(min, max, 2, " to ", "");
            labels[0].push_str(" (Barren)");
            labels[5].push_str(" (Dense)");
            Legend {
                title: "Sentinel-2 Vegetation Density",
                min,
                max,
                palette: DIVERGING.to_vec(),
                labels,
                bands: None,
            }
        }
        AnalysisLayer::SoilFertility => Legend {
            title: "Orbital Soil Proxy",
            min: -0.1,
            max: 0.5,
            palette: vec![
                "#a50026", "#d73027", "#f46d43", "#fdae61", "#a6d96a", "#1a9850",
            ],
            labels: [
                "Severe Deficit",
                "Low Fertility",
                "Marginal",
                "Adequate",
                "High Fertility",
                "Optimal NPK Proxy",
            ]
            .map(String::from)
            .to_vec(),
            bands: None,
        },
        AnalysisLayer::TransportRisk => Legend {
            title: "CGIAR Topographic Relief",
            min: 0.0,
            max: 20.0,
            palette: vec!["#1a9850", "#91cf60", "#fee08b", "#fc8d59", "#d73027"],
            labels: [
                "Flat (Easy Access)",
                "Gentle Slope",
                "Moderate Incline",
                "Steep (Logistics Risk)",
                "Mountainous (High Transport Risk)",
            ]
            .map(String::from)
            .to_vec(),
            bands: None,
        },
        AnalysisLayer::Rainfall => rainfall_legend(stats.annual_rainfall_mm),
        AnalysisLayer::Mineral => Legend {
            title: "Landsat 8 SWIR Signatures",
            min: 0.5,
            max: 2.0,
            palette: vec!["#ff0000", "#00ff00", "#0000ff", "#ffffff"],
            labels: [
                "Iron Oxides (B4/B2)",
                "Ferrous Minerals (B6/B5)",
                "Clay / Hydrothermal (B6/B7)",
                "Mixed Mineralogy",
            ]
            .map(String::from)
            .to_vec(),
            bands: Some(["Iron", "Ferrous", "Clay"]),
        },
    }
}

fn rainfall_legend(rainfall_mm: f64) -> Legend {
    let r_min = (rainfall_mm - 300.0).max(0.0) as i64;
    let r_max = (rainfall_mm + 300.0) as i64;
    let step = (r_max - r_min) / 5;
    let edge = |k: i64| r_min + step * k;

    Legend {
        title: "CHIRPS Accumulation",
        min: r_min as f64,
        max: r_max as f64,
        palette: vec![
            "#ffffcc", "#c7e9b4", "#7fcdbb", "#41b6c4", "#2c7fb8", "#253494",
        ],
        labels: vec![
            format!("<{r_min} mm"),
            format!("{r_min}-{} mm", edge(1)),
            format!("{}-{} mm", edge(1), edge(2)),
            format!("{}-{} mm", edge(2), edge(3)),
            format!("{}-{r_max} mm", edge(3)),
            format!(">{r_max} mm"),
        ],
        bands: None,
    }
}
