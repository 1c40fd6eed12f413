use super::{GapSide, ParamUniaxial};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a gap-plasticity material
    ///
    /// The yield strain is `Sy/E = 0.1` and the gap is `0.01`.
    pub fn param_plastic_gap(side: GapSide) -> ParamUniaxial {
        ParamUniaxial::PlasticGap {
            young: 200.0,
            yield_stress: 20.0,
            gap: 0.01,
            hardening_ratio: 0.02,
            side,
        }
    }

    /// Returns sample parameters for a gap-plasticity material with a closed gap
    pub fn param_plastic_no_gap(side: GapSide) -> ParamUniaxial {
        ParamUniaxial::PlasticGap {
            young: 200.0,
            yield_stress: 20.0,
            gap: 0.0,
            hardening_ratio: 0.02,
            side,
        }
    }

    /// Returns sample parameters for a linear elastic material
    pub fn param_linear_elastic() -> ParamUniaxial {
        ParamUniaxial::LinearElastic {
            young: 1000.0,
            density: 2.0,
        }
    }
}
