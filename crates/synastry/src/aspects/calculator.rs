use crate::aspects::types::{AspectMatch, AspectPair, ASPECT_CATALOG};
use crate::ephemeris::{normalize_degrees, Point};

/// Angular separation folded into [0, 180]
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let raw = (normalize_degrees(lon_a) - normalize_degrees(lon_b)).abs();
    raw.min(360.0 - raw)
}

/// Classify the angle between two longitudes against the aspect catalog.
pub fn classify(lon_a: f64, lon_b: f64) -> AspectMatch {
    let angle = angular_separation(lon_a, lon_b);

    ASPECT_CATALOG
        .iter()
        .find_map(|def| {
            let orb = (angle - def.exact_angle).abs();
            (orb <= def.max_orb).then(|| AspectMatch {
                kind: Some(def.kind),
                orb,
                strength: def.base_strength * (1.0 - orb / def.max_orb),
            })
        })
        .unwrap_or(AspectMatch::NONE)
}

/// Aspect calculator over sets of chart points
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Matched aspects among all unordered pairs of `positions`.
    pub fn intra_chart(&self, positions: &[(Point, f64)]) -> Vec<AspectPair> {
        let mut pairs = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (from, lon_a) = positions[i];
                let (to, lon_b) = positions[j];
                let aspect = classify(lon_a, lon_b);
                if aspect.is_match() {
                    pairs.push(AspectPair { from, to, aspect });
                }
            }
        }
        pairs
    }

    /// Every pairing of `a` against `b`, including unmatched ones.
    pub fn cross(&self, a: &[(Point, f64)], b: &[(Point, f64)]) -> Vec<AspectPair> {
        a.iter()
            .flat_map(|&(from, lon_a)| {
                b.iter().map(move |&(to, lon_b)| AspectPair {
                    from,
                    to,
                    aspect: classify(lon_a, lon_b),
                })
            })
            .collect()
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean strength of a set of pairs, 0 when the set is empty
pub fn mean_strength(pairs: &[AspectPair]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    pairs.iter().map(|p| p.aspect.strength).sum::<f64>() / pairs.len() as f64
}
