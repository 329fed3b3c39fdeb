//! Narrative and economic projections layered on top of the score bundle.

use serde::Serialize;

use crate::stats::RegionStats;

pub const MIN_SHG_MEMBERS: u32 = 10;
pub const MAX_SHG_MEMBERS: u32 = 500;
pub const DEFAULT_SHG_MEMBERS: u32 = 50;

const WORKING_DAYS: f64 = 150.0;
const DAILY_WAGE_INR: f64 = 450.0;
const ANNUAL_GROWTH: f64 = 1.15;
const PROJECTION_YEARS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlook {
    pub jobs_estimate: u32,
    pub confidence: &'static str,
    pub insight: String,
    pub income: IncomeProjection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeProjection {
    pub members: u32,
    pub season_revenue_inr: f64,
    pub year5_revenue_inr: f64,
}

pub fn build(stats: &RegionStats, power: u32, district: &str, shg_members: u32) -> Outlook {
    Outlook {
        jobs_estimate: jobs_estimate(stats, power),
        confidence: model_confidence(stats.vegetation_index),
        insight: strategic_insight(stats, power, district),
        income: income_projection(shg_members),
    }
}

/// Direct women's jobs the district could absorb.
pub fn jobs_estimate(stats: &RegionStats, power: u32) -> u32 {
    let raw = stats.vegetation_index * 1200.0
        + stats.annual_rainfall_mm / 8.0
        + f64::from(power) * 4.0;
    raw.max(0.0) as u32
}

/// Cloud and drought noise make sparse-vegetation yield estimates unreliable.
pub fn model_confidence(vegetation_index: f64) -> &'static str {
    if vegetation_index > 0.45 {
        "High (Stable Telemetry)"
    } else if vegetation_index > 0.25 {
        "Moderate (Rainfall Variability)"
    } else {
        "Low (Cloud/Drought Noise)"
    }
}

pub fn strategic_insight(stats: &RegionStats, power: u32, district: &str) -> String {
    let stress = match power {
        0..=39 => "severe environmental degradation",
        40..=74 => "moderate climatic vulnerability",
        _ => "robust agrarian health",
    };
    let terrain = if stats.terrain_slope_deg > 10.0 {
        "steep, high-altitude terrain"
    } else {
        "flat, highly accessible plains"
    };
    format!(
        "{district} currently exhibits {stress} characterized by {terrain} and an average \
         precipitation of {:.2}mm. There is immense, untapped potential for transitioning local \
         Women's Self Help Groups (SHGs) away from manual labor and into tech-driven \
         agricultural data enterprises.",
        stats.annual_rainfall_mm
    )
}

/// Workforce size is clamped to the range the dashboard slider allows.
pub fn income_projection(members: u32) -> IncomeProjection {
    let clamped = members.clamp(MIN_SHG_MEMBERS, MAX_SHG_MEMBERS);
    if clamped != members {
        tracing::warn!(
            "SHG workforce of {members} is outside {MIN_SHG_MEMBERS}-{MAX_SHG_MEMBERS}, \
             using {clamped}"
        );
    }
    let season = f64::from(clamped) * DAILY_WAGE_INR * WORKING_DAYS;
    IncomeProjection {
        members: clamped,
        season_revenue_inr: season,
        year5_revenue_inr: season * ANNUAL_GROWTH.powi(PROJECTION_YEARS),
    }
}
