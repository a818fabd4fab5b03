//! Geocoding collaborator contract plus a caching decorator and a
//! table-backed implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::ephemeris::GeoLocation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl GeocodeResult {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

/// Resolves free-form place names to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, location_text: &str) -> anyhow::Result<Option<GeocodeResult>>;
}

/// Caches lookups by the exact location string, including misses.
/// Failed lookups are not cached.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: RwLock<HashMap<String, Option<GeocodeResult>>>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn geocode(&self, location_text: &str) -> anyhow::Result<Option<GeocodeResult>> {
        if let Some(hit) = self.cache.read().await.get(location_text) {
            log::debug!("Geocode cache hit for '{}'", location_text);
            return Ok(hit.clone());
        }

        let result = self.inner.geocode(location_text).await?;
        self.cache
            .write()
            .await
            .insert(location_text.to_string(), result.clone());
        Ok(result)
    }
}

/// Geocoder backed by a fixed table of named places.
/// Lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeocodeResult>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.insert(name, latitude, longitude);
        self
    }

    pub fn insert(&mut self, name: &str, latitude: f64, longitude: f64) {
        self.places.insert(
            Self::key(name),
            GeocodeResult {
                latitude,
                longitude,
                display_name: name.trim().to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, location_text: &str) -> anyhow::Result<Option<GeocodeResult>> {
        Ok(self.places.get(&Self::key(location_text)).cloned())
    }
}
