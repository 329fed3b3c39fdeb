use owo_colors::OwoColorize;

use crate::engine::EngineResult;
use crate::evaluation::Evaluation;
use crate::scoring::{Score, GREEN, ORANGE, YELLOW};

use super::text::format_inr;
use super::Reporter;

pub struct CliReporter;

fn paint(text: String, score: &Score) -> String {
    match score.band.color {
        GREEN => text.green().to_string(),
        YELLOW => text.yellow().to_string(),
        ORANGE => text.bright_red().to_string(),
        _ => text.red().to_string(),
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!(
        "\n  {} {} {}\n",
        "──".dimmed(),
        title,
        "─".repeat(50 - title.chars().count().min(49)).dimmed()
    ));
}

impl Reporter for CliReporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}  (preset: {})\n",
            "agrigeo-shield".bold(),
            env!("CARGO_PKG_VERSION"),
            result.preset_name
        ));
        for e in &result.evaluations {
            district_block(&mut out, e, verbose);
        }
        out.push('\n');
        out
    }
}

fn district_block(out: &mut String, e: &Evaluation, verbose: bool) {
    let scores = &e.scores;
    out.push_str(&format!(
        "\n  {} · {} · {} vs {} · {}\n",
        e.district.bold(),
        e.state,
        e.target_year,
        e.compare_year,
        e.scenario.dimmed()
    ));
    out.push_str(&format!("  Layer: {}\n", e.layer.title()));

    out.push_str(&format!(
        "\n  Agri Power:  {} / 100 — {}\n",
        paint(scores.power.value.to_string(), &scores.power),
        scores.power.band.label
    ));
    out.push_str(&format!(
        "  Employment:  {} / 100 — {}\n",
        paint(scores.employment.value.to_string(), &scores.employment),
        scores.employment.band.label
    ));
    out.push_str(&format!(
        "  Drought:     {} / 10 — {}\n",
        paint(scores.drought_risk.value.to_string(), &scores.drought_risk),
        scores.drought_risk.band.label
    ));
    out.push_str(&format!(
        "  Yield:       {} kg/ha — {} ({})\n",
        paint(scores.yield_estimate.value.to_string(), &scores.yield_estimate),
        scores.yield_estimate.band.label,
        e.outlook.confidence
    ));

    let s = &e.stats;
    out.push_str(&format!(
        "\n  LST {:.2} °C · NDWI {:.2} · NDVI {:.2} · Slope {:.2}° · NPK {:.2} · \
         Rain {:.2} mm\n",
        s.temperature_c,
        s.moisture_index,
        s.vegetation_index,
        s.terrain_slope_deg,
        s.fertility_proxy,
        s.annual_rainfall_mm
    ));
    out.push_str(&format!("  {}\n", e.outlook.insight.dimmed()));

    section(out, "Biome");
    out.push_str(&format!("  {} — {}\n", e.biome, e.base_crops));
    out.push_str(&format!("  {}\n", e.policy.crop_adaptation));

    section(out, "Policy");
    out.push_str(&format!("  {}\n", e.policy.action));
    out.push_str(&format!("  {}: {}\n", "Startup".cyan(), e.policy.startup));
    out.push_str(&format!("  {}: {}\n", "Jobs".cyan(), e.policy.jobs.join(", ")));
    out.push_str(&format!(
        "  {}: {}\n",
        "Skills".cyan(),
        e.policy.skills.join(", ")
    ));
    out.push_str(&format!(
        "  {}: ~{} roles · year-5 income INR {} ({} women)\n",
        "Economy".cyan(),
        e.outlook.jobs_estimate,
        format_inr(e.outlook.income.year5_revenue_inr),
        e.outlook.income.members
    ));

    if let Some(cover) = &e.land_cover {
        section(out, "Land cover");
        for share in cover.classes.iter().filter(|c| c.pixels > 0) {
            out.push_str(&format!(
                "  {:>2} {:<13} {:>6.1}%\n",
                share.code,
                share.label,
                share.share * 100.0
            ));
        }
    }

    if let Some(m) = &e.minerals {
        let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.3}"));
        out.push_str(&format!(
            "  Minerals: iron {} · ferrous {} · clay {}\n",
            fmt(m.iron),
            fmt(m.ferrous),
            fmt(m.clay)
        ));
    }

    if verbose {
        section(out, "Map");
        out.push_str(&format!(
            "  {} ({} to {})\n",
            e.layer.map_header(),
            e.legend.min,
            e.legend.max
        ));
        for (color, label) in e.legend.palette.iter().zip(&e.legend.labels) {
            out.push_str(&format!("  {} {}\n", color.dimmed(), label));
        }
        out.push_str(&format!(
            "  Export: {}/{} @ {} m\n",
            e.export.folder, e.export.file_prefix, e.export.scale_m
        ));
        if let Some(chart) = &e.chart {
            out.push_str(&format!("  {} [{}]\n", chart.title, chart.y_label));
            for (i, month) in chart.months.iter().enumerate() {
                out.push_str(&format!(
                    "  {month} {:>10.2} {:>10.2}\n",
                    chart.target[i], chart.baseline[i]
                ));
            }
        }
    }

    for advisory in &e.advisories {
        out.push_str(&format!("  {} {}\n", " WARN".yellow(), advisory));
    }
}
