use chrono::{NaiveDate, NaiveTime};

use crate::chart::{Chart, ChartBuilder};
use crate::ephemeris::EngineSettings;
use crate::error::ChartError;
use crate::geocode::{GeocodeResult, Geocoder};
use crate::synastry::{SynastryEngine, SynastryResult};

/// Birth request with a free-form place name
#[derive(Debug, Clone, PartialEq)]
pub struct BirthRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
}

/// Resolves place names through a geocoder and hands coordinates to the
/// chart builder and synastry engine.
pub struct SynastryService<G> {
    geocoder: G,
    builder: ChartBuilder,
    engine: SynastryEngine,
}

impl<G: Geocoder> SynastryService<G> {
    pub fn new(geocoder: G, settings: EngineSettings) -> Self {
        Self {
            geocoder,
            builder: ChartBuilder::new(settings),
            engine: SynastryEngine::new(&settings),
        }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn engine(&self) -> &SynastryEngine {
        &self.engine
    }

    /// Look up a place, substituting an empty result on failure or miss.
    pub async fn resolve(&self, place: &str) -> GeocodeResult {
        match self.geocoder.geocode(place).await {
            Ok(Some(result)) => result,
            Ok(None) => {
                log::warn!("No geocode result for '{}', using empty location", place);
                GeocodeResult::default()
            }
            Err(e) => {
                log::warn!("Geocoding '{}' failed: {}; using empty location", place, e);
                GeocodeResult::default()
            }
        }
    }

    pub async fn chart_for(&self, request: &BirthRequest) -> Result<Chart, ChartError> {
        let geo = self.resolve(&request.place).await;
        self.builder.build(request.date, request.time, geo.location())
    }

    /// Build both charts, resolving the two places concurrently.
    pub async fn charts_for(
        &self,
        a: &BirthRequest,
        b: &BirthRequest,
    ) -> Result<(Chart, Chart), ChartError> {
        let (chart_a, chart_b) = tokio::join!(self.chart_for(a), self.chart_for(b));
        log::info!("Built charts for '{}' and '{}'", a.place, b.place);
        Ok((chart_a?, chart_b?))
    }

    pub fn compare<'a>(
        &self,
        chart_a: &'a Chart,
        chart_b: &'a Chart,
    ) -> Result<SynastryResult<'a>, ChartError> {
        self.engine.compare(chart_a, chart_b)
    }
}
