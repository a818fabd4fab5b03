use crate::aspects::AspectPair;
use crate::chart::Chart;
use crate::ephemeris::Point;
use serde::Serialize;

/// Weights applied to the four sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub venus_mars: f64,
    pub full_chart: f64,
    pub synastry_aspect: f64,
    pub house_overlay: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.venus_mars + self.full_chart + self.synastry_aspect + self.house_overlay
    }
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    venus_mars: 0.4,
    full_chart: 0.3,
    synastry_aspect: 0.2,
    house_overlay: 0.1,
};

/// Houses of the partner's chart that count as harmonious for an overlay
pub const HARMONIOUS_HOUSES: [u8; 5] = [1, 5, 7, 9, 11];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub venus_mars: f64,
    pub full_chart: f64,
    pub synastry_aspect: f64,
    pub house_overlay: f64,
}

impl SubScores {
    pub fn combined(&self, weights: &ScoreWeights) -> f64 {
        weights.venus_mars * self.venus_mars
            + weights.full_chart * self.full_chart
            + weights.synastry_aspect * self.synastry_aspect
            + weights.house_overlay * self.house_overlay
    }
}

/// A point of the first chart placed in the second chart's houses
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseOverlay {
    pub point: Point,
    pub house: u8,
    pub harmonious: bool,
}

/// Comparison of two charts. Borrows the charts it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct SynastryResult<'a> {
    #[serde(skip)]
    chart_a: &'a Chart,
    #[serde(skip)]
    chart_b: &'a Chart,
    scores: SubScores,
    combined: f64,
    aspects: Vec<AspectPair>,
    overlays: Vec<HouseOverlay>,
}

impl<'a> SynastryResult<'a> {
    pub(crate) fn new(
        chart_a: &'a Chart,
        chart_b: &'a Chart,
        scores: SubScores,
        aspects: Vec<AspectPair>,
        overlays: Vec<HouseOverlay>,
    ) -> Self {
        Self {
            chart_a,
            chart_b,
            combined: scores.combined(&SCORE_WEIGHTS),
            scores,
            aspects,
            overlays,
        }
    }

    pub fn chart_a(&self) -> &'a Chart {
        self.chart_a
    }

    pub fn chart_b(&self) -> &'a Chart {
        self.chart_b
    }

    pub fn scores(&self) -> &SubScores {
        &self.scores
    }

    pub fn venus_mars_score(&self) -> f64 {
        self.scores.venus_mars
    }

    pub fn full_chart_score(&self) -> f64 {
        self.scores.full_chart
    }

    pub fn synastry_aspect_score(&self) -> f64 {
        self.scores.synastry_aspect
    }

    pub fn house_overlay_score(&self) -> f64 {
        self.scores.house_overlay
    }

    pub fn combined_score(&self) -> f64 {
        self.combined
    }

    /// Matched cross-chart aspects of the synastry grid, for display
    pub fn aspects(&self) -> &[AspectPair] {
        &self.aspects
    }

    pub fn overlays(&self) -> &[HouseOverlay] {
        &self.overlays
    }
}
