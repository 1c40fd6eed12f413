use serde::{Deserialize, Serialize};

/// Defines the side of the strain axis where the gap closes and the material yields
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum GapSide {
    /// The gap closes under tension (positive strains)
    Tension,

    /// The gap closes under compression (negative strains)
    Compression,
}

impl GapSide {
    /// Converts the legacy boolean flag (true means tension)
    pub fn from_behavior(behavior: bool) -> Self {
        if behavior {
            GapSide::Tension
        } else {
            GapSide::Compression
        }
    }

    /// Returns the magnitude of value with the sign of this side
    pub fn signed(&self, value: f64) -> f64 {
        match self {
            GapSide::Tension => f64::abs(value),
            GapSide::Compression => -f64::abs(value),
        }
    }

    /// Tells whether `a` lies beyond `b` in the loading direction
    ///
    /// ```text
    /// Tension:     a > b
    /// Compression: a < b
    /// ```
    pub fn beyond(&self, a: f64, b: f64) -> bool {
        match self {
            GapSide::Tension => a > b,
            GapSide::Compression => a < b,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
