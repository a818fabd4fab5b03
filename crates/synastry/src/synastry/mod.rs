pub mod engine;
pub mod types;

pub use engine::SynastryEngine;
pub use types::{
    HouseOverlay, ScoreWeights, SubScores, SynastryResult, HARMONIOUS_HOUSES, SCORE_WEIGHTS,
};
