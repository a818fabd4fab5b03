
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod geocode;
pub mod report;
pub mod service;
pub mod synastry;

pub use aspects::{classify, AspectKind, AspectMatch};
pub use chart::{BirthData, Chart, ChartBuilder};
pub use ephemeris::{normalize_degrees, to_julian_day, EngineSettings, GeoLocation, Point};
pub use error::ChartError;
pub use geocode::{CachedGeocoder, GeocodeResult, Geocoder, StaticGeocoder};
pub use report::SynastryReport;
pub use service::{BirthRequest, SynastryService};
pub use synastry::{SynastryEngine, SynastryResult};
