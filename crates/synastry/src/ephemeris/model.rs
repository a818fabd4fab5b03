use crate::ephemeris::normalize_degrees;
use crate::ephemeris::time::julian_centuries;
use crate::ephemeris::types::{EngineSettings, Point, ZodiacType};
use crate::error::ChartError;

/// Mean longitude at J2000.0 (degrees) and its rate (degrees per Julian
/// century) for each primary body, indexed by `Point` ordinal.
const MEAN_ELEMENTS: [(f64, f64); 12] = [
    (280.46646, 36000.76983),          // Sun
    (218.3164477, 481267.88123421),    // Moon
    (252.250906, 149472.6746358),      // Mercury
    (181.979801, 58517.815676),        // Venus
    (355.433, 19140.2993313),          // Mars
    (34.351484, 3034.9056746),         // Jupiter
    (50.077471, 1222.1137943),         // Saturn
    (314.055005, 428.4669983),         // Uranus
    (304.348665, 218.4862002),         // Neptune
    (238.92903833, 145.20780515),      // Pluto
    (125.04452, -1934.136261),         // TrueNode
    (251.0, 710.06),                   // Chiron
];

/// Calibration epoch for the Fortuna and Vertex extrapolations.
pub const REFERENCE_JD: f64 = 2451545.0;
/// Latitude of the calibration chart.
pub const REFERENCE_LATITUDE: f64 = 36.7378;

const FORTUNA_AT_REFERENCE: f64 = 62.0;
const FORTUNA_DAILY_MOTION: f64 = 13.1763;
const VERTEX_AT_REFERENCE: f64 = 207.0;
const VERTEX_HOURLY_MOTION: f64 = 0.25;
const VERTEX_PER_DEGREE_LATITUDE: f64 = 0.1;

/// Linear mean-motion position model.
#[derive(Debug, Clone, Copy)]
pub struct MeanMotionEphemeris {
    ayanamsa: Option<f64>,
}

impl MeanMotionEphemeris {
    pub fn new(settings: &EngineSettings) -> Self {
        let ayanamsa = match settings.zodiac {
            ZodiacType::Sidereal => Some(settings.ayanamsa.degrees()),
            ZodiacType::Tropical => None,
        };
        Self { ayanamsa }
    }

    /// Ecliptic longitude of a primary body at the given Julian Day.
    ///
    /// Derived points (Fortuna, Vertex, angles) have no orbital elements and
    /// are rejected.
    pub fn longitude_of(&self, point: Point, jd: f64) -> Result<f64, ChartError> {
        let (l0, rate) = MEAN_ELEMENTS
            .get(point.index())
            .copied()
            .ok_or_else(|| ChartError::UnsupportedBody {
                body: point.id().to_string(),
            })?;

        let tropical = l0 + rate * julian_centuries(jd);
        let longitude = match self.ayanamsa {
            Some(offset) => tropical - offset,
            None => tropical,
        };
        Ok(normalize_degrees(longitude))
    }

    /// Longitudes of all twelve primary bodies, in `Point::PRIMARY` order.
    pub fn primary_longitudes(&self, jd: f64) -> Result<[f64; 12], ChartError> {
        let mut out = [0.0; 12];
        for (slot, point) in out.iter_mut().zip(Point::PRIMARY) {
            *slot = self.longitude_of(point, jd)?;
        }
        Ok(out)
    }

    /// Part of Fortune, extrapolated from the calibration chart.
    pub fn fortuna(&self, jd: f64) -> f64 {
        normalize_degrees(FORTUNA_AT_REFERENCE + FORTUNA_DAILY_MOTION * (jd - REFERENCE_JD))
    }

    /// Vertex, extrapolated from the calibration chart and shifted by the
    /// observer's latitude.
    pub fn vertex(&self, jd: f64, latitude: f64) -> f64 {
        let hours = (jd - REFERENCE_JD) * 24.0;
        normalize_degrees(
            VERTEX_AT_REFERENCE
                + VERTEX_HOURLY_MOTION * hours
                + VERTEX_PER_DEGREE_LATITUDE * (latitude - REFERENCE_LATITUDE),
        )
    }
}

impl Default for MeanMotionEphemeris {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}
