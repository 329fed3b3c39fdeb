use serde::Serialize;

use crate::catalog;
use crate::error::Result;
use crate::export::{export_task, ExportTask};
use crate::indices::{mineral_indices, MineralIndices};
use crate::input::DistrictRequest;
use crate::landcover::{reclassify_raster, summarize, LandCoverSummary};
use crate::legend::{legend_for, Legend};
use crate::outlook::{self, Outlook};
use crate::policy::{self, AnalysisLayer, Biome, PolicyRecommendation};
use crate::preset::Preset;
use crate::scoring::{compute_scores, ScoreBundle};
use crate::stats::{gather, normalize, ClimateScenario, RegionStats};
use crate::timeseries::{comparison_chart, ComparisonChart};

const CHART_MASKED: &str =
    "Time-series dynamics temporarily masked by dense regional cloud cover or memory limits.";
const IMAGERY_MASKED: &str =
    "Imagery temporarily unavailable due to dense atmospheric cloud cover.";

/// The complete result for one district request.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub state: String,
    pub district: String,
    pub gaul_name: &'static str,
    pub target_year: u16,
    pub compare_year: u16,
    pub layer: AnalysisLayer,
    pub scenario: &'static str,
    pub stats: RegionStats,
    pub minerals: Option<MineralIndices>,
    pub land_cover: Option<LandCoverSummary>,
    pub scores: ScoreBundle,
    pub biome: Biome,
    pub base_crops: String,
    pub policy: PolicyRecommendation,
    pub outlook: Outlook,
    pub chart: Option<ComparisonChart>,
    pub legend: Legend,
    pub export: ExportTask,
    /// Non-fatal problems; the rest of the evaluation is still valid.
    pub advisories: Vec<String>,
}

pub fn evaluate(
    request: &DistrictRequest,
    preset: &Preset,
    default_members: u32,
) -> Result<Evaluation> {
    let district = catalog::resolve(&request.state, &request.district)?;
    tracing::debug!(
        "evaluating {} ({}) for {} on layer {}",
        district.display,
        request.state,
        request.target_year,
        request.layer.tag()
    );

    let scenario = ClimateScenario::new(request.scenario, preset);
    let raw = gather(&request.stats);
    let stats = normalize(&raw, &scenario, preset);
    let scores = compute_scores(&stats, preset);
    let biome = Biome::classify(stats.annual_rainfall_mm, stats.terrain_slope_deg);
    let policy = policy::select(request.layer, &stats, biome, district.display);
    let outlook = outlook::build(
        &stats,
        scores.power.value,
        district.display,
        request.shg_members.unwrap_or(default_members),
    );

    let mut advisories = Vec::new();

    let minerals = (!request.mineral_pixels.is_empty())
        .then(|| mineral_indices(&request.mineral_pixels));
    let land_cover = (!request.landcover_pixels.is_empty())
        .then(|| summarize(&reclassify_raster(&request.landcover_pixels)));

    let layer_imagery_missing = match request.layer {
        AnalysisLayer::Mineral => minerals.is_none(),
        AnalysisLayer::LandCover => land_cover.is_none(),
        _ => false,
    };
    if layer_imagery_missing {
        advisories.push(IMAGERY_MASKED.to_string());
    }

    let chart = request.series.as_ref().and_then(|series| {
        comparison_chart(
            request.layer,
            request.target_year,
            request.compare_year(),
            series,
        )
    });
    if chart.is_none() {
        advisories.push(CHART_MASKED.to_string());
    }

    for advisory in &advisories {
        tracing::warn!("{}: {advisory}", district.display);
    }

    Ok(Evaluation {
        state: request.state.clone(),
        district: district.display.to_string(),
        gaul_name: district.gaul_name,
        target_year: request.target_year,
        compare_year: request.compare_year(),
        layer: request.layer,
        scenario: scenario.label(),
        stats,
        minerals,
        land_cover,
        scores,
        biome,
        base_crops: biome.crop_list(),
        policy,
        outlook,
        chart,
        legend: legend_for(request.layer, &stats),
        export: export_task(request.layer, district.display, request.target_year),
        advisories,
    })
}
