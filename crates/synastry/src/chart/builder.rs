use crate::aspects::AspectCalculator;
use crate::chart::data::{BirthData, Chart};
use crate::ephemeris::{
    house_of, julian_day_from_datetime, BodyPosition, EngineSettings, GeoLocation, HouseCalculator,
    MeanMotionEphemeris, Point, ZodiacSign,
};
use crate::error::ChartError;
use chrono::{NaiveDate, NaiveTime};

/// Assembles natal charts from birth data.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    settings: EngineSettings,
    ephemeris: MeanMotionEphemeris,
    house_calculator: HouseCalculator,
}

impl ChartBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            ephemeris: MeanMotionEphemeris::new(&settings),
            house_calculator: HouseCalculator::new(&settings),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn house_calculator(&self) -> &HouseCalculator {
        &self.house_calculator
    }

    /// Build a chart for a UT date and time at `location`.
    pub fn build(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        location: GeoLocation,
    ) -> Result<Chart, ChartError> {
        self.build_from(BirthData {
            date,
            time,
            location,
        })
    }

    pub fn build_from(&self, birth: BirthData) -> Result<Chart, ChartError> {
        let jd = julian_day_from_datetime(birth.date, birth.time)?;
        let houses = self.house_calculator.houses(jd, &birth.location)?;

        let primary = self.ephemeris.primary_longitudes(jd)?;
        let mut longitudes = [0.0; 16];
        longitudes[..12].copy_from_slice(&primary);
        longitudes[Point::Fortuna.index()] = self.ephemeris.fortuna(jd);
        longitudes[Point::Vertex.index()] = self.ephemeris.vertex(jd, birth.location.lat);
        longitudes[Point::Ascendant.index()] = houses.ascendant;
        longitudes[Point::Midheaven.index()] = houses.midheaven;

        let positions = Point::ALL.map(|point| {
            let lon = longitudes[point.index()];
            BodyPosition {
                point,
                lon,
                sign: ZodiacSign::from_longitude(lon),
                house: house_of(lon, &houses.cusps),
            }
        });

        let primary_pairs: Vec<(Point, f64)> =
            Point::PRIMARY.iter().map(|&p| (p, longitudes[p.index()])).collect();
        let aspects = AspectCalculator::new().intra_chart(&primary_pairs);

        log::debug!(
            "Built chart for {} {} at ({:.4}, {:.4}): jd={:.5}, asc={:.2}, {} aspects",
            birth.date,
            birth.time,
            birth.location.lat,
            birth.location.lon,
            jd,
            houses.ascendant,
            aspects.len()
        );

        Ok(Chart::new(birth, jd, positions, houses, aspects))
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
