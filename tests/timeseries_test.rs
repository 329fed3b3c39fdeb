use agrigeo_shield::policy::AnalysisLayer;
use agrigeo_shield::timeseries::{comparison_chart, fill_gaps, MonthlySeries, MONTHS};

#[test]
fn test_fill_gaps_carries_forward() {
    let filled = fill_gaps(&[None, Some(2.0), None, Some(5.0)]);
    assert_eq!(filled.len(), 12);
    assert_eq!(&filled[..5], &[0.0, 2.0, 2.0, 5.0, 5.0]);
    assert_eq!(filled[11], 5.0);
}

#[test]
fn test_fill_gaps_empty() {
    assert_eq!(fill_gaps(&[]), vec![0.0; 12]);
}

#[test]
fn test_chart_requires_some_data() {
    let series = MonthlySeries {
        target: vec![None; 12],
        compare: vec![],
    };
    assert!(comparison_chart(AnalysisLayer::Rainfall, 2024, 2023, &series).is_none());
}

#[test]
fn test_chart_for_groundwater() {
    let series = MonthlySeries {
        target: vec![Some(0.1), Some(0.12)],
        compare: vec![None, Some(0.2)],
    };
    let chart = comparison_chart(AnalysisLayer::Groundwater, 2024, 2020, &series).unwrap();
    assert_eq!(chart.y_label, "Moisture Index (NDWI)");
    assert_eq!(chart.months, MONTHS);
    assert_eq!(chart.target_year, 2024);
    assert_eq!(chart.compare_year, 2020);
    assert_eq!(chart.target[11], 0.12);
    assert_eq!(chart.baseline[0], 0.0);
    assert_eq!(chart.baseline[1], 0.2);
}

#[test]
fn test_chart_axis_per_layer() {
    let series = MonthlySeries {
        target: vec![Some(1.0)],
        compare: vec![],
    };
    let label = |layer| {
        comparison_chart(layer, 2024, 2023, &series)
            .unwrap()
            .y_label
    };
    assert_eq!(label(AnalysisLayer::DroughtRisk), "Temperature (°C)");
    assert_eq!(label(AnalysisLayer::CropHealth), "Vegetation Index (NDVI)");
    assert_eq!(label(AnalysisLayer::SoilFertility), "Vegetation Index (NDVI)");
    assert_eq!(label(AnalysisLayer::Rainfall), "Rainfall (mm)");
    assert_eq!(label(AnalysisLayer::LandCover), "Rainfall (mm)");
}
