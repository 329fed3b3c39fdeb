//! Named "house rules" for the normalizer and the score engine.
//!
//! Deployments disagree on fallback tables and rule weights, so every constant
//! the scoring pipeline uses lives here. A preset table in `agrigeo.toml` only
//! needs the fields it changes; everything else falls back to [`Preset::default`].

use serde::{Deserialize, Serialize};

pub const BASELINE: &str = "baseline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    /// Treat an upstream value of exactly `0.0` as unavailable.
    pub zero_is_missing: bool,
    pub fallbacks: Fallbacks,
    pub scenario: ScenarioDeltas,
    pub power: PowerWeights,
    pub employment: EmploymentWeights,
    pub drought: DroughtWeights,
    #[serde(rename = "yield")]
    pub yield_model: YieldModel,
}

impl Default for Preset {
    fn default() -> Self {
        Preset {
            zero_is_missing: true,
            fallbacks: Fallbacks::default(),
            scenario: ScenarioDeltas::default(),
            power: PowerWeights::default(),
            employment: EmploymentWeights::default(),
            drought: DroughtWeights::default(),
            yield_model: YieldModel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub temperature_c: f64,
    pub moisture_index: f64,
    pub vegetation_index: f64,
    pub annual_rainfall_mm: f64,
    pub terrain_slope_deg: f64,
    pub fertility_proxy: f64,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Fallbacks {
            temperature_c: 28.75,
            moisture_index: 0.15,
            vegetation_index: 0.55,
            annual_rainfall_mm: 1450.45,
            terrain_slope_deg: 4.25,
            fertility_proxy: 0.40,
        }
    }
}

/// The 2035 climate-risk perturbation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioDeltas {
    pub temperature_offset_c: f64,
    pub rainfall_factor: f64,
    pub vegetation_factor: f64,
    pub moisture_factor: f64,
}

impl Default for ScenarioDeltas {
    fn default() -> Self {
        ScenarioDeltas {
            temperature_offset_c: 2.15,
            rainfall_factor: 0.895,
            vegetation_factor: 0.85,
            moisture_factor: 0.80,
        }
    }
}

/// Additive terms of the Agri Power Score. Penalties are stored negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerWeights {
    pub base: f64,
    pub lush_vegetation: f64,
    pub sparse_vegetation: f64,
    pub heavy_rain: f64,
    pub moderate_rain: f64,
    pub scant_rain: f64,
    pub extreme_heat: f64,
    pub high_heat: f64,
    pub cool_climate: f64,
    pub fertile_soil: f64,
    pub poor_soil: f64,
    pub steep_terrain: f64,
    pub rolling_terrain: f64,
}

impl Default for PowerWeights {
    fn default() -> Self {
        PowerWeights {
            base: 50.0,
            lush_vegetation: 15.0,
            sparse_vegetation: -20.0,
            heavy_rain: 15.0,
            moderate_rain: 5.0,
            scant_rain: -20.0,
            extreme_heat: -20.0,
            high_heat: -10.0,
            cool_climate: 10.0,
            fertile_soil: 10.0,
            poor_soil: -10.0,
            steep_terrain: -15.0,
            rolling_terrain: -5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentWeights {
    pub power_weight: f64,
    pub slope_cap_deg: f64,
    pub flatness_weight: f64,
    pub rainfall_divisor: f64,
    pub floor: u32,
    pub ceiling: u32,
}

impl Default for EmploymentWeights {
    fn default() -> Self {
        EmploymentWeights {
            power_weight: 0.65,
            slope_cap_deg: 20.0,
            flatness_weight: 1.2,
            rainfall_divisor: 120.0,
            floor: 42,
            ceiling: 94,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DroughtWeights {
    pub severe_heat: u32,
    pub high_heat: u32,
    pub severe_deficit: u32,
    pub deficit: u32,
    pub bare_ground: u32,
    pub sparse_cover: u32,
    pub cap: u32,
}

impl Default for DroughtWeights {
    fn default() -> Self {
        DroughtWeights {
            severe_heat: 4,
            high_heat: 2,
            severe_deficit: 4,
            deficit: 2,
            bare_ground: 2,
            sparse_cover: 1,
            cap: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldModel {
    pub base_kg_per_ha: f64,
    pub ndvi_reference: f64,
    pub thermal_threshold_c: f64,
    pub thermal_penalty_per_degree: f64,
    pub rain_bonus_per_1000mm: f64,
    pub rain_bonus_cap: f64,
    pub floor_kg_per_ha: u32,
}

impl Default for YieldModel {
    fn default() -> Self {
        YieldModel {
            base_kg_per_ha: 2500.0,
            ndvi_reference: 0.4,
            thermal_threshold_c: 30.0,
            thermal_penalty_per_degree: 50.0,
            rain_bonus_per_1000mm: 200.0,
            rain_bonus_cap: 500.0,
            floor_kg_per_ha: 500,
        }
    }
}
