use thiserror::Error;

/// Errors raised while building charts or comparing them.
///
/// All variants describe bad input rather than transient failure; retrying
/// with the same arguments yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date {year:04}-{month:02}-{day:02} {hour}h: {message}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: f64,
        message: String,
    },
    #[error("Invalid coordinate lat={lat}, lon={lon}. Latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("Unsupported body: {body}")]
    UnsupportedBody { body: String },
    #[error("Unsupported house system: {system}. Valid systems: {valid:?}")]
    UnsupportedHouseSystem { system: String, valid: Vec<String> },
}
