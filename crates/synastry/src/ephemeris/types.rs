use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ChartError> {
        let location = Self { lat, lon };
        location.validate()?;
        Ok(location)
    }

    /// Check that latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn validate(&self) -> Result<(), ChartError> {
        let lat_ok = self.lat.is_finite() && self.lat.abs() <= 90.0;
        let lon_ok = self.lon.is_finite() && self.lon.abs() <= 180.0;
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(ChartError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

/// Every point carried by a chart: twelve primary bodies followed by four
/// derived points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Point {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    TrueNode,
    Chiron,
    Fortuna,
    Vertex,
    #[serde(rename = "asc")]
    Ascendant,
    #[serde(rename = "mc")]
    Midheaven,
}

impl Point {
    /// All 16 chart points, in ordinal order.
    pub const ALL: [Point; 16] = [
        Point::Sun,
        Point::Moon,
        Point::Mercury,
        Point::Venus,
        Point::Mars,
        Point::Jupiter,
        Point::Saturn,
        Point::Uranus,
        Point::Neptune,
        Point::Pluto,
        Point::TrueNode,
        Point::Chiron,
        Point::Fortuna,
        Point::Vertex,
        Point::Ascendant,
        Point::Midheaven,
    ];

    /// Bodies with orbital elements; these form the intra-chart aspect set.
    pub const PRIMARY: [Point; 12] = [
        Point::Sun,
        Point::Moon,
        Point::Mercury,
        Point::Venus,
        Point::Mars,
        Point::Jupiter,
        Point::Saturn,
        Point::Uranus,
        Point::Neptune,
        Point::Pluto,
        Point::TrueNode,
        Point::Chiron,
    ];

    /// Ten planets plus the two angles, used for the synastry aspect grid.
    pub const SYNASTRY: [Point; 12] = [
        Point::Sun,
        Point::Moon,
        Point::Mercury,
        Point::Venus,
        Point::Mars,
        Point::Jupiter,
        Point::Saturn,
        Point::Uranus,
        Point::Neptune,
        Point::Pluto,
        Point::Ascendant,
        Point::Midheaven,
    ];

    /// Personal and social planets overlaid onto a partner's houses.
    pub const OVERLAY: [Point; 6] = [
        Point::Sun,
        Point::Moon,
        Point::Venus,
        Point::Mars,
        Point::Jupiter,
        Point::Saturn,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_primary(self) -> bool {
        self.index() < Point::PRIMARY.len()
    }

    pub fn id(self) -> &'static str {
        match self {
            Point::Sun => "sun",
            Point::Moon => "moon",
            Point::Mercury => "mercury",
            Point::Venus => "venus",
            Point::Mars => "mars",
            Point::Jupiter => "jupiter",
            Point::Saturn => "saturn",
            Point::Uranus => "uranus",
            Point::Neptune => "neptune",
            Point::Pluto => "pluto",
            Point::TrueNode => "true_node",
            Point::Chiron => "chiron",
            Point::Fortuna => "fortuna",
            Point::Vertex => "vertex",
            Point::Ascendant => "asc",
            Point::Midheaven => "mc",
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Point {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let point = match key.as_str() {
            "north_node" | "node" => Some(Point::TrueNode),
            "ascendant" => Some(Point::Ascendant),
            "midheaven" => Some(Point::Midheaven),
            other => Point::ALL.iter().copied().find(|p| p.id() == other),
        };
        point.ok_or_else(|| ChartError::UnsupportedBody {
            body: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    const ORDER: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing a longitude (30 degrees per sign, Aries at 0).
    pub fn from_longitude(longitude: f64) -> Self {
        let idx = (crate::ephemeris::normalize_degrees(longitude) / 30.0) as usize;
        Self::ORDER[idx % 12]
    }
}

/// A computed chart position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub point: Point,
    /// Longitude in degrees (0-360)
    pub lon: f64,
    pub sign: ZodiacSign,
    /// House index 1-12
    pub house: u8,
}

/// House system positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub system: HouseSystem,
    /// Index 0 is the 1st house cusp
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacType {
    Tropical,
    Sidereal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    FaganBradley,
    Lahiri,
    Custom(f64),
}

impl Ayanamsa {
    /// Offset in degrees subtracted from tropical longitudes.
    pub fn degrees(self) -> f64 {
        match self {
            Ayanamsa::FaganBradley => 24.9,
            Ayanamsa::Lahiri => 23.8,
            Ayanamsa::Custom(value) => value,
        }
    }
}

/// House system identifiers accepted by the engine.
///
/// Both systems use equal 30 degree division from the ascendant; `Placidus`
/// is kept as a label for output parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum HouseSystem {
    Placidus,
    Equal,
}

impl HouseSystem {
    const NAMES: &'static [(&'static str, HouseSystem)] = &[
        ("placidus", HouseSystem::Placidus),
        ("equal", HouseSystem::Equal),
    ];

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::Equal => "equal",
        }
    }
}

impl FromStr for HouseSystem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, system)| *system)
            .ok_or_else(|| ChartError::UnsupportedHouseSystem {
                system: s.to_string(),
                valid: Self::NAMES.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

impl TryFrom<String> for HouseSystem {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Settings for ephemeris and house calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub zodiac: ZodiacType,
    pub ayanamsa: Ayanamsa,
    pub house_system: HouseSystem,
    /// Subtract the cubic term when computing sidereal time
    pub precise_sidereal_time: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            zodiac: ZodiacType::Sidereal,
            ayanamsa: Ayanamsa::FaganBradley,
            house_system: HouseSystem::Placidus,
            precise_sidereal_time: false,
        }
    }
}
