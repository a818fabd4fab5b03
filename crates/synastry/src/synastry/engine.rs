use crate::aspects::{classify, mean_strength, AspectCalculator};
use crate::chart::Chart;
use crate::ephemeris::{house_of, EngineSettings, HouseCalculator, Point};
use crate::error::ChartError;
use crate::synastry::types::{HouseOverlay, SubScores, SynastryResult, HARMONIOUS_HOUSES};

/// Computes compatibility between two charts.
#[derive(Debug, Clone)]
pub struct SynastryEngine {
    house_calculator: HouseCalculator,
    calculator: AspectCalculator,
}

impl SynastryEngine {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            house_calculator: HouseCalculator::new(settings),
            calculator: AspectCalculator::new(),
        }
    }

    pub fn compare<'a>(
        &self,
        chart_a: &'a Chart,
        chart_b: &'a Chart,
    ) -> Result<SynastryResult<'a>, ChartError> {
        let venus_mars = self.venus_mars_score(chart_a, chart_b);
        let full_chart = self.full_chart_score(chart_a, chart_b);

        let grid = self.calculator.cross(
            &chart_a.longitudes_of(&Point::SYNASTRY),
            &chart_b.longitudes_of(&Point::SYNASTRY),
        );
        let synastry_aspect = mean_strength(&grid);
        let aspects = grid.into_iter().filter(|p| p.aspect.is_match()).collect();

        let overlays = self.house_overlays(chart_a, chart_b)?;
        let house_overlay = if overlays.is_empty() {
            0.0
        } else {
            overlays.iter().filter(|o| o.harmonious).count() as f64 / overlays.len() as f64
        };

        let scores = SubScores {
            venus_mars,
            full_chart,
            synastry_aspect,
            house_overlay,
        };
        let result = SynastryResult::new(chart_a, chart_b, scores, aspects, overlays);

        log::debug!(
            "Synastry scores: venus_mars={:.4} full_chart={:.4} synastry_aspect={:.4} house_overlay={:.4} combined={:.4}",
            venus_mars,
            full_chart,
            synastry_aspect,
            house_overlay,
            result.combined_score()
        );

        Ok(result)
    }

    /// Mean of Venus(A)-Mars(B) and Venus(B)-Mars(A) aspect strengths.
    pub fn venus_mars_score(&self, chart_a: &Chart, chart_b: &Chart) -> f64 {
        let ab = classify(chart_a.longitude(Point::Venus), chart_b.longitude(Point::Mars));
        let ba = classify(chart_b.longitude(Point::Venus), chart_a.longitude(Point::Mars));
        (ab.strength + ba.strength) / 2.0
    }

    /// Mean aspect strength over all 16x16 cross pairings.
    pub fn full_chart_score(&self, chart_a: &Chart, chart_b: &Chart) -> f64 {
        let pairs = self.calculator.cross(
            &chart_a.longitudes_of(&Point::ALL),
            &chart_b.longitudes_of(&Point::ALL),
        );
        mean_strength(&pairs)
    }

    /// Places chart A's overlay bodies in chart B's houses. B's cusps are
    /// recomputed from its birth data rather than read from the chart.
    pub fn house_overlays(
        &self,
        chart_a: &Chart,
        chart_b: &Chart,
    ) -> Result<Vec<HouseOverlay>, ChartError> {
        let houses_b = self
            .house_calculator
            .houses(chart_b.julian_day(), &chart_b.birth().location)?;

        Ok(Point::OVERLAY
            .iter()
            .map(|&point| {
                let house = house_of(chart_a.longitude(point), &houses_b.cusps);
                HouseOverlay {
                    point,
                    house,
                    harmonious: HARMONIOUS_HOUSES.contains(&house),
                }
            })
            .collect())
    }
}

impl Default for SynastryEngine {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}
