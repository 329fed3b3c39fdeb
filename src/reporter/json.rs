use serde::Serialize;

use crate::engine::EngineResult;
use crate::evaluation::Evaluation;

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    preset: &'a str,
    summary: SummaryJson,
    evaluations: &'a [Evaluation],
}

#[derive(Serialize)]
struct SummaryJson {
    districts: usize,
    fail_below: u32,
    failing: Vec<String>,
    advisories: usize,
}

impl Reporter for JsonReporter {
    fn format(&self, result: &EngineResult, _verbose: bool) -> String {
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            preset: &result.preset_name,
            summary: SummaryJson {
                districts: result.evaluations.len(),
                fail_below: result.fail_below,
                failing: result
                    .failing()
                    .iter()
                    .map(|e| e.district.clone())
                    .collect(),
                advisories: result
                    .evaluations
                    .iter()
                    .map(|e| e.advisories.len())
                    .sum(),
            },
            evaluations: &result.evaluations,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
