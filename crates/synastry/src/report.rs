use serde::Serialize;

use crate::chart::Chart;
use crate::synastry::{ScoreWeights, SynastryResult, SCORE_WEIGHTS};

/// Serializable bundle of both charts and their comparison
#[derive(Debug, Serialize)]
pub struct SynastryReport<'a> {
    pub chart_a: &'a Chart,
    pub chart_b: &'a Chart,
    pub weights: ScoreWeights,
    pub synastry: &'a SynastryResult<'a>,
}

impl<'a> SynastryReport<'a> {
    pub fn new(result: &'a SynastryResult<'a>) -> Self {
        Self {
            chart_a: result.chart_a(),
            chart_b: result.chart_b(),
            weights: SCORE_WEIGHTS,
            synastry: result,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
