pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, classify, mean_strength, AspectCalculator};
pub use types::{AspectDefinition, AspectKind, AspectMatch, AspectPair, ASPECT_CATALOG};
