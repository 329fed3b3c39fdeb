pub mod cli;
pub mod json;
pub mod text;

use crate::engine::EngineResult;

pub trait Reporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String;
}

/// One `district<TAB>power score` line per evaluation.
pub fn score_only(result: &EngineResult) -> String {
    result
        .evaluations
        .iter()
        .map(|e| format!("{}\t{}\n", e.district, e.scores.power.value))
        .collect()
}
