use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use synastry::ephemeris::{Ayanamsa, EngineSettings, GeoLocation, HouseSystem, ZodiacType};
use synastry::{BirthRequest, StaticGeocoder};

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceToml {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct BirthToml {
    date: NaiveDate,
    #[serde(default = "default_time")]
    time: NaiveTime,
    place: String,
}

fn default_time() -> NaiveTime {
    NaiveTime::MIN
}

/// `[engine]` table. The house system stays a raw identifier until
/// `parse_config` resolves it, so an unknown name surfaces as a `ChartError`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct EngineToml {
    zodiac: ZodiacType,
    ayanamsa: Ayanamsa,
    house_system: String,
    precise_sidereal_time: bool,
}

impl Default for EngineToml {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self {
            zodiac: settings.zodiac,
            ayanamsa: settings.ayanamsa,
            house_system: settings.house_system.name().to_string(),
            precise_sidereal_time: settings.precise_sidereal_time,
        }
    }
}

impl EngineToml {
    fn into_settings(self) -> anyhow::Result<EngineSettings> {
        let house_system = self
            .house_system
            .parse::<HouseSystem>()
            .context("Invalid [engine] house_system")?;
        Ok(EngineSettings {
            zodiac: self.zodiac,
            ayanamsa: self.ayanamsa,
            house_system,
            precise_sidereal_time: self.precise_sidereal_time,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PairToml {
    a: BirthToml,
    b: BirthToml,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: EngineToml,
    #[serde(default)]
    places: Vec<PlaceToml>,
    #[serde(default)]
    pair: Option<PairToml>,
}

/// Parsed configuration for a synastry run
#[derive(Debug, Clone, Default)]
pub struct SynastryConfig {
    pub engine: EngineSettings,
    pub places: Vec<PlaceToml>,
    pub pair: Option<(BirthRequest, BirthRequest)>,
}

impl SynastryConfig {
    /// Geocoder populated from the `[[places]]` table.
    pub fn geocoder(&self) -> StaticGeocoder {
        let mut geocoder = StaticGeocoder::new();
        for place in &self.places {
            geocoder.insert(&place.name, place.latitude, place.longitude);
        }
        geocoder
    }
}

fn into_request(birth: BirthToml) -> BirthRequest {
    BirthRequest {
        date: birth.date,
        time: birth.time,
        place: birth.place,
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<SynastryConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse synastry config: {e}"))?;

    for place in &root.places {
        GeoLocation::new(place.latitude, place.longitude)
            .with_context(|| format!("Place '{}' has invalid coordinates", place.name))?;
    }

    Ok(SynastryConfig {
        engine: root.engine.into_settings()?,
        places: root.places,
        pair: root.pair.map(|p| (into_request(p.a), into_request(p.b))),
    })
}

/// Read a config file. Falls back to `configs/synastry.toml` when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SynastryConfig> {
    let paths: Vec<&Path> = match path {
        Some(p) => vec![p],
        None => vec![
            Path::new("configs/synastry.toml"),
            Path::new("../../configs/synastry.toml"),
        ],
    };
    for p in &paths {
        if let Ok(text) = fs::read_to_string(p) {
            log::debug!("Loaded synastry config from {}", p.display());
            return parse_config(&text);
        }
    }
    anyhow::bail!("Could not load synastry config from {:?}", paths);
}

#[cfg(test)]
mod tests {
    use super::*;
    use synastry::ChartError;

    const SAMPLE: &str = r#"
[engine]
zodiac = "tropical"
ayanamsa = "lahiri"
house_system = "equal"

[[places]]
name = "Fresno, CA"
latitude = 36.7378
longitude = -119.7871

[[places]]
name = "London"
latitude = 51.5074
longitude = -0.1278

[pair.a]
date = "1990-06-15"
time = "14:30:00"
place = "Fresno, CA"

[pair.b]
date = "1992-11-03"
place = "London"
"#;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(cfg.engine.zodiac, ZodiacType::Tropical);
        assert_eq!(cfg.engine.ayanamsa, Ayanamsa::Lahiri);
        assert_eq!(cfg.engine.house_system, HouseSystem::Equal);
        assert!(!cfg.engine.precise_sidereal_time);
        assert_eq!(cfg.places.len(), 2);
        assert_eq!(cfg.geocoder().len(), 2);

        let (a, b) = cfg.pair.unwrap();
        assert_eq!(a.place, "Fresno, CA");
        assert_eq!(a.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(b.time, NaiveTime::MIN);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.engine, EngineSettings::default());
        assert!(cfg.pair.is_none());
    }

    #[test]
    fn custom_ayanamsa() {
        let cfg = parse_config("[engine]\nayanamsa = { custom = 24.1 }\n").unwrap();
        assert_eq!(cfg.engine.ayanamsa, Ayanamsa::Custom(24.1));
        assert_eq!(cfg.engine.zodiac, ZodiacType::Sidereal);
    }

    #[test]
    fn rejects_unknown_house_system() {
        let err = parse_config("[engine]\nhouse_system = \"koch\"\n").unwrap_err();
        match err.downcast_ref::<ChartError>() {
            Some(ChartError::UnsupportedHouseSystem { system, valid }) => {
                assert_eq!(system, "koch");
                assert_eq!(valid, &vec!["placidus".to_string(), "equal".to_string()]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn house_system_is_case_insensitive() {
        let cfg = parse_config("[engine]\nhouse_system = \"Placidus\"\n").unwrap();
        assert_eq!(cfg.engine.house_system, HouseSystem::Placidus);
        let cfg = parse_config("[engine]\nhouse_system = \"EQUAL\"\n").unwrap();
        assert_eq!(cfg.engine.house_system, HouseSystem::Equal);
    }

    #[test]
    fn rejects_out_of_range_place() {
        let text = "[[places]]\nname = \"Nowhere\"\nlatitude = 95.0\nlongitude = 0.0\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChartError>(),
            Some(ChartError::InvalidCoordinate { .. })
        ));
        assert!(format!("{err:#}").contains("Nowhere"));
    }

    #[test]
    fn rejects_nan_place() {
        let text = "[[places]]\nname = \"Void\"\nlatitude = nan\nlongitude = 0.0\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ChartError>(),
            Some(ChartError::InvalidCoordinate { .. })
        ));
    }
}
