use crate::ephemeris::normalize_degrees;
use crate::ephemeris::time::{julian_centuries, J2000};
use crate::ephemeris::types::{EngineSettings, GeoLocation, HousePositions, HouseSystem};
use crate::error::ChartError;

/// House cusp calculator.
#[derive(Debug, Clone, Copy)]
pub struct HouseCalculator {
    system: HouseSystem,
    precise: bool,
}

impl HouseCalculator {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            system: settings.house_system,
            precise: settings.precise_sidereal_time,
        }
    }

    pub fn system(&self) -> HouseSystem {
        self.system
    }

    /// Greenwich mean sidereal time in degrees (not normalized).
    pub fn gmst_degrees(&self, jd: f64) -> f64 {
        let t = julian_centuries(jd);
        let mut gmst = 280.46061837 + 360.98564736629 * (jd - J2000) + 0.000387933 * t * t;
        if self.precise {
            gmst -= t * t * t / 38710000.0;
        }
        gmst
    }

    /// Local sidereal time in hours, within [0, 24).
    pub fn local_sidereal_time(&self, jd: f64, longitude: f64) -> f64 {
        let lst = ((self.gmst_degrees(jd) + longitude) / 15.0).rem_euclid(24.0);
        if lst >= 24.0 {
            0.0
        } else {
            lst
        }
    }

    /// Compute house cusps, ascendant and midheaven.
    ///
    /// Cusps are spaced 30 degrees apart starting at the local sidereal
    /// angle, for every supported system.
    pub fn houses(&self, jd: f64, location: &GeoLocation) -> Result<HousePositions, ChartError> {
        location.validate()?;

        let start = self.local_sidereal_time(jd, location.lon) * 15.0;
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(start + i as f64 * 30.0);
        }

        Ok(HousePositions {
            system: self.system,
            cusps,
            ascendant: cusps[0],
            midheaven: cusps[9],
        })
    }
}

impl Default for HouseCalculator {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

/// House number (1-12) of the arc containing `longitude`.
///
/// Arc `i` spans `[cusps[i], cusps[i + 1])`, wrapping through 0 when the
/// next cusp is smaller.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if start <= end {
            lon >= start && lon < end
        } else {
            lon >= start || lon < end
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    // Only reachable for cusps that are not cyclically ordered
    log::warn!("Longitude {lon} not covered by house cusps {cusps:?}; defaulting to house 1");
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gmst_at_j2000() {
        let calc = HouseCalculator::default();
        assert_abs_diff_eq!(calc.gmst_degrees(J2000), 280.46061837, epsilon = 1e-9);
        let lst = calc.local_sidereal_time(J2000, 0.0);
        assert_abs_diff_eq!(lst, 280.46061837 / 15.0, epsilon = 1e-9);
    }

    #[test]
    fn precise_variant_differs_away_from_epoch() {
        let plain = HouseCalculator::default();
        let precise = HouseCalculator::new(&EngineSettings {
            precise_sidereal_time: true,
            ..EngineSettings::default()
        });
        let jd = J2000 + 36525.0 * 5.0;
        assert!(precise.gmst_degrees(jd) < plain.gmst_degrees(jd));
        assert_eq!(precise.gmst_degrees(J2000), plain.gmst_degrees(J2000));
    }

    #[test]
    fn equal_division_from_ascendant() {
        let calc = HouseCalculator::default();
        let location = GeoLocation::new(51.48, 0.0).unwrap();
        let houses = calc.houses(J2000, &location).unwrap();
        assert_eq!(houses.ascendant, houses.cusps[0]);
        assert_eq!(houses.midheaven, houses.cusps[9]);
        for i in 0..12 {
            let next = houses.cusps[(i + 1) % 12];
            let gap = normalize_degrees(next - houses.cusps[i]);
            assert_abs_diff_eq!(gap, 30.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let calc = HouseCalculator::default();
        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.1), (0.0, -200.0)] {
            let err = calc.houses(J2000, &GeoLocation { lat, lon }).unwrap_err();
            assert!(matches!(err, ChartError::InvalidCoordinate { .. }));
        }
    }

    #[test]
    fn house_of_handles_wrapping_arc() {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_degrees(350.0 + i as f64 * 30.0);
        }
        assert_eq!(house_of(355.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
        assert_eq!(house_of(20.0, &cusps), 2);
        assert_eq!(house_of(349.999, &cusps), 12);
        assert_eq!(house_of(350.0, &cusps), 1);
    }
}
