use agrigeo_shield::preset::Preset;
use agrigeo_shield::stats::{
    gather, normalize, ClimateScenario, RawRegionStats, RegionStats, SourceError, Statistic,
    StatisticSource,
};
use approx::assert_relative_eq;

fn reported(value: f64) -> RawRegionStats {
    RawRegionStats {
        temperature_c: Some(value),
        moisture_index: Some(value),
        vegetation_index: Some(value),
        annual_rainfall_mm: Some(value),
        terrain_slope_deg: Some(value),
        fertility_proxy: Some(value),
    }
}

fn measured() -> RawRegionStats {
    RawRegionStats {
        temperature_c: Some(31.2),
        moisture_index: Some(0.08),
        vegetation_index: Some(0.42),
        annual_rainfall_mm: Some(980.0),
        terrain_slope_deg: Some(6.5),
        fertility_proxy: Some(0.27),
    }
}

#[test]
fn test_missing_values_take_fallbacks() {
    let preset = Preset::default();
    let stats = normalize(
        &RawRegionStats::default(),
        &ClimateScenario::new(false, &preset),
        &preset,
    );
    assert_eq!(stats.temperature_c, 28.75);
    assert_eq!(stats.annual_rainfall_mm, 1450.45);
    assert_eq!(stats.vegetation_index, 0.55);
    assert_eq!(stats.moisture_index, 0.15);
    assert_eq!(stats.fertility_proxy, 0.40);
    assert_eq!(stats.terrain_slope_deg, 4.25);
}

#[test]
fn test_zero_is_the_missing_sentinel_by_default() {
    let preset = Preset::default();
    let scenario = ClimateScenario::new(false, &preset);
    let from_zero = normalize(&reported(0.0), &scenario, &preset);
    let from_none = normalize(&RawRegionStats::default(), &scenario, &preset);
    assert_eq!(from_zero, from_none);
}

#[test]
fn test_true_zero_survives_when_sentinel_disabled() {
    // A drought year can genuinely report zero rainfall.
    let preset = Preset {
        zero_is_missing: false,
        ..Preset::default()
    };
    let raw = RawRegionStats {
        annual_rainfall_mm: Some(0.0),
        ..RawRegionStats::default()
    };
    let stats = normalize(&raw, &ClimateScenario::new(false, &preset), &preset);
    assert_eq!(stats.annual_rainfall_mm, 0.0);
    assert_eq!(stats.temperature_c, 28.75);
}

#[test]
fn test_non_finite_values_take_fallbacks() {
    let preset = Preset::default();
    let raw = RawRegionStats {
        temperature_c: Some(f64::NAN),
        annual_rainfall_mm: Some(f64::INFINITY),
        ..measured()
    };
    let stats = normalize(&raw, &ClimateScenario::new(false, &preset), &preset);
    assert_eq!(stats.temperature_c, 28.75);
    assert_eq!(stats.annual_rainfall_mm, 1450.45);
    assert_eq!(stats.vegetation_index, 0.42);
}

#[test]
fn test_scenario_applies_deltas_after_fallbacks() {
    let preset = Preset::default();
    let stats = normalize(
        &RawRegionStats::default(),
        &ClimateScenario::new(true, &preset),
        &preset,
    );
    assert_relative_eq!(stats.temperature_c, 30.9, epsilon = 1e-9);
    assert_relative_eq!(stats.annual_rainfall_mm, 1298.15275, epsilon = 1e-9);
    assert_relative_eq!(stats.vegetation_index, 0.4675, epsilon = 1e-12);
    assert_relative_eq!(stats.moisture_index, 0.12, epsilon = 1e-12);
}

#[test]
fn test_scenario_leaves_slope_and_fertility_untouched() {
    let preset = Preset::default();
    let raw = measured();
    let base = normalize(&raw, &ClimateScenario::new(false, &preset), &preset);
    let future = normalize(&raw, &ClimateScenario::new(true, &preset), &preset);

    assert_eq!(
        base.terrain_slope_deg.to_bits(),
        future.terrain_slope_deg.to_bits()
    );
    assert_eq!(
        base.fertility_proxy.to_bits(),
        future.fertility_proxy.to_bits()
    );
    assert_ne!(base.temperature_c, future.temperature_c);
}

#[test]
fn test_normalize_is_idempotent_without_scenario() {
    let preset = Preset::default();
    let scenario = ClimateScenario::new(false, &preset);
    let partial = RawRegionStats {
        moisture_index: None,
        terrain_slope_deg: Some(0.0),
        ..measured()
    };
    let once = normalize(&partial, &scenario, &preset);
    let twice = normalize(&RawRegionStats::from(&once), &scenario, &preset);
    assert_eq!(once, twice);
}

#[test]
fn test_scenario_label() {
    let preset = Preset::default();
    assert_eq!(ClimateScenario::new(true, &preset).label(), "2035 Climate Active");
    assert_eq!(ClimateScenario::new(false, &preset).label(), "Current Baseline");
}

struct FlakySource;

impl StatisticSource for FlakySource {
    fn fetch(&self, stat: Statistic) -> Result<Option<f64>, SourceError> {
        match stat {
            Statistic::TemperatureC => Err(SourceError::Query {
                stat,
                message: "deadline exceeded".to_string(),
            }),
            Statistic::AnnualRainfallMm => Ok(None),
            Statistic::VegetationIndex => Ok(Some(0.61)),
            _ => Ok(Some(0.2)),
        }
    }
}

#[test]
fn test_failed_query_degrades_to_fallback() {
    let preset = Preset::default();
    let raw = gather(&FlakySource);
    assert_eq!(raw.temperature_c, None);
    assert_eq!(raw.annual_rainfall_mm, None);
    assert_eq!(raw.vegetation_index, Some(0.61));

    let stats: RegionStats = normalize(&raw, &ClimateScenario::new(false, &preset), &preset);
    assert_eq!(stats.temperature_c, 28.75);
    assert_eq!(stats.annual_rainfall_mm, 1450.45);
    assert_eq!(stats.vegetation_index, 0.61);
}

#[test]
fn test_statistic_scale() {
    assert_eq!(Statistic::AnnualRainfallMm.scale_m(), 5000);
    assert_eq!(Statistic::TemperatureC.scale_m(), 1000);
    assert_eq!(Statistic::FertilityProxy.to_string(), "fertility_proxy");
}
