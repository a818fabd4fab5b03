use crate::ephemeris::Point;
use serde::{Deserialize, Serialize};

/// Catalog of recognised aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Semisextile,
    Sextile,
    Square,
    Trine,
    Sesquiquadrate,
    Quincunx,
    Opposition,
}

/// Static definition of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub exact_angle: f64,
    pub max_orb: f64,
    pub base_strength: f64,
}

/// Aspect catalog in ascending angle order. The orbs do not overlap, so the
/// first entry in range is the only one.
pub const ASPECT_CATALOG: [AspectDefinition; 8] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        exact_angle: 0.0,
        max_orb: 8.0,
        base_strength: 1.0,
    },
    AspectDefinition {
        kind: AspectKind::Semisextile,
        exact_angle: 30.0,
        max_orb: 3.0,
        base_strength: 0.3,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        exact_angle: 60.0,
        max_orb: 6.0,
        base_strength: 0.8,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        exact_angle: 90.0,
        max_orb: 8.0,
        base_strength: 0.6,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        exact_angle: 120.0,
        max_orb: 8.0,
        base_strength: 0.9,
    },
    AspectDefinition {
        kind: AspectKind::Sesquiquadrate,
        exact_angle: 135.0,
        max_orb: 3.0,
        base_strength: 0.4,
    },
    AspectDefinition {
        kind: AspectKind::Quincunx,
        exact_angle: 150.0,
        max_orb: 3.0,
        base_strength: 0.3,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        exact_angle: 180.0,
        max_orb: 8.0,
        base_strength: 0.7,
    },
];

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Semisextile => "Semisextile",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn definition(self) -> AspectDefinition {
        ASPECT_CATALOG[self as usize]
    }
}

/// Outcome of classifying the angle between two longitudes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    /// Matched aspect, `None` when no catalog entry is within orb
    pub kind: Option<AspectKind>,
    /// Deviation from the exact angle (0 when unmatched)
    pub orb: f64,
    /// Base strength tapered linearly to 0 at the orb boundary
    pub strength: f64,
}

impl AspectMatch {
    pub const NONE: AspectMatch = AspectMatch {
        kind: None,
        orb: 0.0,
        strength: 0.0,
    };

    pub fn name(&self) -> &'static str {
        self.kind.map(AspectKind::name).unwrap_or("None")
    }

    pub fn is_match(&self) -> bool {
        self.kind.is_some()
    }
}

/// An aspect between two chart points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    pub from: Point,
    pub to: Point,
    pub aspect: AspectMatch,
}
