use crate::engine::EngineResult;
use crate::evaluation::Evaluation;

use super::Reporter;

const RULE: &str = "==================================================";

/// The plain-text policy report handed to district officials.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn format(&self, result: &EngineResult, _verbose: bool) -> String {
        result
            .evaluations
            .iter()
            .map(policy_report)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `1234567.891` -> `1,234,567.89`
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

pub fn policy_report(e: &Evaluation) -> String {
    let s = &e.stats;
    let mut out = String::new();
    out.push_str(&format!("{RULE}\n"));
    out.push_str(&format!(
        "VIKSIT BHARAT REPORT: {}\n",
        e.district.to_uppercase()
    ));
    out.push_str(&format!("Active Intelligence Layer: {}\n", e.layer.plain_title()));
    out.push_str(&format!("Simulation Mode: {}\n", e.scenario));
    out.push_str(&format!("{RULE}\n"));

    out.push_str("1. ENVIRONMENTAL METRICS:\n");
    out.push_str(&format!(
        "- Agri Power Score: {}/100\n",
        e.scores.power.value
    ));
    out.push_str(&format!(
        "- Temp: {:.2}C | Rain: {:.2}mm | NDVI: {:.2} | Slope: {:.2} deg\n",
        s.temperature_c, s.annual_rainfall_mm, s.vegetation_index, s.terrain_slope_deg
    ));
    out.push_str(&format!(
        "- Drought Risk: {}/10 ({})\n",
        e.scores.drought_risk.value, e.scores.drought_risk.band.label
    ));
    out.push_str(&format!("- Detected Biome: {}\n\n", e.biome));

    out.push_str("2. ECONOMIC PROJECTIONS:\n");
    out.push_str(&format!(
        "- Employment Potential Score: {}/100\n",
        e.scores.employment.value
    ));
    out.push_str(&format!(
        "- Estimated Jobs Created: {} Local Roles\n",
        e.outlook.jobs_estimate
    ));
    out.push_str(&format!("- Recommended Startup: {}\n", e.policy.startup));
    out.push_str(&format!(
        "- Required Training: {}\n",
        e.policy.skills.join(", ")
    ));
    out.push_str(&format!(
        "- 5-Year Projected Income ({} women): INR {}\n\n",
        e.outlook.income.members,
        format_inr(e.outlook.income.year5_revenue_inr)
    ));

    out.push_str("3. SATELLITE ML YIELD PREDICTION:\n");
    out.push_str(&format!(
        "- {} kg/ha (Confidence: {})\n\n",
        e.scores.yield_estimate.value, e.outlook.confidence
    ));

    out.push_str("4. PRECISION AI ACTION PLAN:\n");
    out.push_str(&format!("{}\n", e.policy.action));
    out.push_str(&format!("{RULE}\n"));
    out.push_str("Generated securely by AgriGeo-Shield Platform\n");
    out
}
