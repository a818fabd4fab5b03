use crate::aspects::AspectPair;
use crate::ephemeris::{BodyPosition, GeoLocation, HousePositions, Point};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Date, UT time and place of a birth event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
}

/// A natal chart. Built once by `ChartBuilder`, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    birth: BirthData,
    julian_day: f64,
    positions: [BodyPosition; 16],
    houses: HousePositions,
    aspects: Vec<AspectPair>,
}

impl Chart {
    pub(crate) fn new(
        birth: BirthData,
        julian_day: f64,
        positions: [BodyPosition; 16],
        houses: HousePositions,
        aspects: Vec<AspectPair>,
    ) -> Self {
        Self {
            birth,
            julian_day,
            positions,
            houses,
            aspects,
        }
    }

    pub fn birth(&self) -> &BirthData {
        &self.birth
    }

    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// All 16 positions in `Point::ALL` order
    pub fn positions(&self) -> &[BodyPosition; 16] {
        &self.positions
    }

    pub fn position(&self, point: Point) -> &BodyPosition {
        &self.positions[point.index()]
    }

    pub fn longitude(&self, point: Point) -> f64 {
        self.position(point).lon
    }

    pub fn house(&self, point: Point) -> u8 {
        self.position(point).house
    }

    pub fn houses(&self) -> &HousePositions {
        &self.houses
    }

    /// Matched aspects among the primary bodies
    pub fn aspects(&self) -> &[AspectPair] {
        &self.aspects
    }

    /// `(point, longitude)` pairs for a subset of points
    pub fn longitudes_of(&self, points: &[Point]) -> Vec<(Point, f64)> {
        points.iter().map(|&p| (p, self.longitude(p))).collect()
    }
}
