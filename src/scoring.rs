use serde::Serialize;

use crate::preset::{DroughtWeights, EmploymentWeights, PowerWeights, Preset, YieldModel};
use crate::stats::RegionStats;

pub const GREEN: &str = "#2ECC71";
pub const YELLOW: &str = "#F1C40F";
pub const ORANGE: &str = "#E67E22";
pub const RED: &str = "#E74C3C";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub value: u32,
    pub band: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBundle {
    /// Agri Power Score, 0-100.
    pub power: Score,
    /// Women Employment Potential Score, 42-94 with the default preset.
    pub employment: Score,
    /// 0-10, higher is worse.
    pub drought_risk: Score,
    /// kg/hectare.
    pub yield_estimate: Score,
}

pub fn compute_scores(stats: &RegionStats, preset: &Preset) -> ScoreBundle {
    let power = power_score(stats, &preset.power);
    let employment = employment_score(power, stats, &preset.employment);
    let drought = drought_risk_score(stats, &preset.drought);
    let yield_kg = yield_estimate(stats, &preset.yield_model);

    ScoreBundle {
        power: Score {
            value: power,
            band: power_band(power),
        },
        employment: Score {
            value: employment,
            band: employment_band(employment),
        },
        drought_risk: Score {
            value: drought,
            band: drought_band(drought),
        },
        yield_estimate: Score {
            value: yield_kg,
            band: yield_band(yield_kg),
        },
    }
}

pub fn power_score(stats: &RegionStats, w: &PowerWeights) -> u32 {
    let mut score = w.base;

    let veg = stats.vegetation_index;
    if veg > 0.4 {
        score += w.lush_vegetation;
    } else if veg < 0.2 {
        score += w.sparse_vegetation;
    }

    let rain = stats.annual_rainfall_mm;
    if rain > 1200.0 {
        score += w.heavy_rain;
    } else if rain > 800.0 {
        score += w.moderate_rain;
    } else if rain < 600.0 {
        score += w.scant_rain;
    }

    let temp = stats.temperature_c;
    if temp > 35.0 {
        score += w.extreme_heat;
    } else if temp > 32.0 {
        score += w.high_heat;
    } else if temp < 28.0 {
        score += w.cool_climate;
    }

    let fert = stats.fertility_proxy;
    if fert > 0.3 {
        score += w.fertile_soil;
    } else if fert < 0.15 {
        score += w.poor_soil;
    }

    let slope = stats.terrain_slope_deg;
    if slope > 15.0 {
        score += w.steep_terrain;
    } else if slope > 8.0 {
        score += w.rolling_terrain;
    }

    score.max(0.0).min(100.0) as u32
}

/// Derived from the power score, so compute that first.
pub fn employment_score(power: u32, stats: &RegionStats, w: &EmploymentWeights) -> u32 {
    let flatness = w.slope_cap_deg - stats.terrain_slope_deg.min(w.slope_cap_deg);
    let raw = f64::from(power) * w.power_weight
        + flatness * w.flatness_weight
        + stats.annual_rainfall_mm / w.rainfall_divisor;

    raw.max(f64::from(w.floor)).min(f64::from(w.ceiling)) as u32
}

pub fn drought_risk_score(stats: &RegionStats, w: &DroughtWeights) -> u32 {
    let mut risk = 0;

    let temp = stats.temperature_c;
    if temp >= 35.0 {
        risk += w.severe_heat;
    } else if temp >= 32.0 {
        risk += w.high_heat;
    }

    let rain = stats.annual_rainfall_mm;
    if rain < 800.0 {
        risk += w.severe_deficit;
    } else if rain < 1000.0 {
        risk += w.deficit;
    }

    let veg = stats.vegetation_index;
    if veg < 0.2 {
        risk += w.bare_ground;
    } else if veg < 0.4 {
        risk += w.sparse_cover;
    }

    risk.min(w.cap)
}

/// Heuristic yield in kg/hectare, never below the model floor.
pub fn yield_estimate(stats: &RegionStats, m: &YieldModel) -> u32 {
    let ndvi_multiplier = if stats.vegetation_index > 0.0 {
        stats.vegetation_index / m.ndvi_reference
    } else {
        0.0
    };
    let thermal_penalty =
        ((stats.temperature_c - m.thermal_threshold_c) * m.thermal_penalty_per_degree).max(0.0);
    let rain_bonus =
        (stats.annual_rainfall_mm / 1000.0 * m.rain_bonus_per_1000mm).min(m.rain_bonus_cap);

    let raw = (m.base_kg_per_ha * ndvi_multiplier - thermal_penalty + rain_bonus).trunc();
    raw.max(f64::from(m.floor_kg_per_ha)) as u32
}

pub fn power_band(value: u32) -> Band {
    match value {
        75.. => Band {
            label: "Highly Optimal & Resilient",
            color: GREEN,
        },
        40..=74 => Band {
            label: "Vulnerable / Requires Intervention",
            color: YELLOW,
        },
        _ => Band {
            label: "CRITICAL ECO-STRESS",
            color: RED,
        },
    }
}

pub fn employment_band(value: u32) -> Band {
    match value {
        75.. => Band {
            label: "High Feasibility",
            color: GREEN,
        },
        55..=74 => Band {
            label: "Moderate Feasibility",
            color: YELLOW,
        },
        _ => Band {
            label: "Challenging",
            color: RED,
        },
    }
}

pub fn drought_band(value: u32) -> Band {
    match value {
        0..=2 => Band {
            label: "Low",
            color: GREEN,
        },
        3..=5 => Band {
            label: "Moderate",
            color: YELLOW,
        },
        6..=7 => Band {
            label: "High",
            color: ORANGE,
        },
        _ => Band {
            label: "Severe",
            color: RED,
        },
    }
}

pub fn yield_band(kg_per_ha: u32) -> Band {
    match kg_per_ha {
        3000.. => Band {
            label: "Surplus",
            color: GREEN,
        },
        2000..=2999 => Band {
            label: "Stable",
            color: YELLOW,
        },
        _ => Band {
            label: "Deficit",
            color: RED,
        },
    }
}
