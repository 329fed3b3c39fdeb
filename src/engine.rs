use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::evaluation::{evaluate, Evaluation};
use crate::input::{self, DistrictRequest};
use crate::policy::AnalysisLayer;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory searched for `agrigeo.toml`.
    pub config_dir: PathBuf,
    pub preset: Option<String>,
    /// Force the 2035 climate scenario on for every district.
    pub scenario: bool,
    /// Override every request's analysis layer.
    pub layer: Option<AnalysisLayer>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            config_dir: PathBuf::from("."),
            preset: None,
            scenario: false,
            layer: None,
        }
    }
}

pub struct EngineResult {
    pub evaluations: Vec<Evaluation>,
    pub preset_name: String,
    pub fail_below: u32,
}

impl EngineResult {
    /// Districts whose power score is under the `[ci] fail_below` gate.
    pub fn failing(&self) -> Vec<&Evaluation> {
        self.evaluations
            .iter()
            .filter(|e| e.scores.power.value < self.fail_below)
            .collect()
    }
}

pub fn run(input_path: &Path, options: &RunOptions) -> Result<EngineResult> {
    let config = Config::load(&options.config_dir)?;
    let requests = input::load(input_path)?;
    run_requests(requests, &config, options)
}

pub fn run_requests(
    mut requests: Vec<DistrictRequest>,
    config: &Config,
    options: &RunOptions,
) -> Result<EngineResult> {
    let (preset_name, preset) = config.resolve_preset(options.preset.as_deref())?;

    for request in &mut requests {
        if let Some(layer) = options.layer {
            request.layer = layer;
        }
        request.scenario |= options.scenario;
        if !config.is_layer_enabled(request.layer) {
            return Err(Error::LayerDisabled(request.layer.tag().to_string()));
        }
    }

    tracing::info!(
        "evaluating {} district(s) with preset `{preset_name}`",
        requests.len()
    );

    let evaluations = requests
        .par_iter()
        .map(|request| evaluate(request, &preset, config.report.shg_members))
        .collect::<Result<Vec<_>>>()?;

    Ok(EngineResult {
        evaluations,
        preset_name,
        fail_below: config.ci.fail_below,
    })
}
