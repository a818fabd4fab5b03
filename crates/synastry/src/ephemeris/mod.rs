pub mod houses;
pub mod model;
pub mod time;
pub mod types;

pub use houses::{house_of, HouseCalculator};
pub use model::MeanMotionEphemeris;
pub use time::{julian_centuries, julian_day_from_datetime, to_julian_day, J2000};
pub use types::{
    Ayanamsa, BodyPosition, EngineSettings, GeoLocation, HousePositions, HouseSystem, Point,
    ZodiacSign, ZodiacType,
};

/// Fold any finite angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}
