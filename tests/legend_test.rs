use agrigeo_shield::legend::legend_for;
use agrigeo_shield::policy::AnalysisLayer;
use agrigeo_shield::preset::Preset;
use agrigeo_shield::stats::{normalize, ClimateScenario, RawRegionStats, RegionStats};

fn fallback_stats() -> RegionStats {
    let preset = Preset::default();
    normalize(
        &RawRegionStats::default(),
        &ClimateScenario::new(false, &preset),
        &preset,
    )
}

#[test]
fn test_thermal_legend_centres_on_temperature() {
    let mut stats = fallback_stats();
    stats.temperature_c = 30.0;
    let legend = legend_for(AnalysisLayer::DroughtRisk, &stats);
    assert_eq!(legend.min, 27.0);
    assert_eq!(legend.max, 33.0);
    assert_eq!(
        legend.labels,
        vec![
            "<27.0°C",
            "27.0-28.2°C",
            "28.2-29.4°C",
            "29.4-30.6°C",
            "30.6-33.0°C",
            ">33.0°C"
        ]
    );
    assert_eq!(legend.palette.len(), legend.labels.len());
}

#[test]
fn test_rainfall_legend_uses_whole_millimetres() {
    let legend = legend_for(AnalysisLayer::Rainfall, &fallback_stats());
    assert_eq!(legend.min, 1150.0);
    assert_eq!(legend.max, 1750.0);
    assert_eq!(
        legend.labels,
        vec![
            "<1150 mm",
            "1150-1270 mm",
            "1270-1390 mm",
            "1390-1510 mm",
            "1510-1750 mm",
            ">1750 mm"
        ]
    );
}

#[test]
fn test_rainfall_legend_floor_at_zero() {
    let mut stats = fallback_stats();
    stats.annual_rainfall_mm = 100.0;
    let legend = legend_for(AnalysisLayer::Rainfall, &stats);
    assert_eq!(legend.min, 0.0);
    assert_eq!(legend.max, 400.0);
    assert_eq!(legend.labels[1], "0-80 mm");
}

#[test]
fn test_vegetation_legend_annotates_extremes() {
    let legend = legend_for(AnalysisLayer::CropHealth, &fallback_stats());
    assert_eq!(legend.min, 0.35);
    assert_eq!(legend.max, 0.85);
    assert_eq!(legend.labels[0], "<0.35 (Barren)");
    assert_eq!(legend.labels[1], "0.35 to 0.45");
    assert_eq!(legend.labels[5], ">0.85 (Dense)");
}

#[test]
fn test_land_cover_legend_lists_all_classes() {
    let legend = legend_for(AnalysisLayer::LandCover, &fallback_stats());
    assert_eq!(legend.labels.len(), 9);
    assert_eq!(legend.labels[4], "Agroforestry");
    assert_eq!(legend.palette[7], "#0000FF");
}

#[test]
fn test_mineral_legend_is_composite() {
    let legend = legend_for(AnalysisLayer::Mineral, &fallback_stats());
    assert_eq!(legend.bands, Some(["Iron", "Ferrous", "Clay"]));
    assert!(legend_for(AnalysisLayer::TransportRisk, &fallback_stats())
        .bands
        .is_none());
}
