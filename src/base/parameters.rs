use super::GapSide;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for uniaxial stress-strain relations
///
/// The JSON representation carries the model name as a tag, e.g.,
///
/// ```text
/// { "name": "PlasticGap", "young": 200.0, "yield_stress": 20.0,
///   "gap": 0.01, "hardening_ratio": 0.02, "side": "Tension" }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "name")]
pub enum ParamUniaxial {
    /// Linear elastic model
    LinearElastic {
        /// Young's modulus
        young: f64,

        /// Density (may be zero)
        #[serde(default)]
        density: f64,
    },

    /// Bilinear elastoplastic model with a one-sided gap
    PlasticGap {
        /// Young's modulus
        young: f64,

        /// Yield stress (only the magnitude is used)
        yield_stress: f64,

        /// Gap strain offset (only the magnitude is used)
        gap: f64,

        /// Post-yield hardening ratio in `[0, 1)`
        hardening_ratio: f64,

        /// Side of the strain axis where the gap closes
        side: GapSide,
    },
}

impl ParamUniaxial {
    /// Checks the physical plausibility of the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        match *self {
            ParamUniaxial::LinearElastic { young, density } => {
                if !young.is_finite() || young <= 0.0 {
                    return Err("young must be > 0.0");
                }
                if !density.is_finite() || density < 0.0 {
                    return Err("density must be ≥ 0.0");
                }
            }
            ParamUniaxial::PlasticGap {
                young,
                yield_stress,
                gap,
                hardening_ratio,
                ..
            } => {
                if !young.is_finite() || young <= 0.0 {
                    return Err("young must be > 0.0");
                }
                if !yield_stress.is_finite() {
                    return Err("yield_stress must be finite");
                }
                if !gap.is_finite() {
                    return Err("gap must be finite");
                }
                if !hardening_ratio.is_finite() || hardening_ratio < 0.0 || hardening_ratio >= 1.0 {
                    return Err("hardening_ratio must be in [0.0, 1.0)");
                }
            }
        }
        Ok(())
    }

    /// Returns the name of the model
    pub fn name(&self) -> &'static str {
        match self {
            ParamUniaxial::LinearElastic { .. } => "LinearElastic",
            ParamUniaxial::PlasticGap { .. } => "PlasticGap",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
