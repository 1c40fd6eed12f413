use super::{LinearElastic, PlasticGap, UniaxialMaterial};
use crate::base::ParamUniaxial;
use crate::StrError;

/// Holds the actual uniaxial model implementation
pub struct UniaxialModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn UniaxialMaterial>,
}

impl UniaxialModel {
    /// Allocates a new instance
    pub fn new(param: &ParamUniaxial) -> Result<Self, StrError> {
        let actual: Box<dyn UniaxialMaterial> = match *param {
            // Linear elastic model
            ParamUniaxial::LinearElastic { young, density } => Box::new(LinearElastic::new(young, density)?),

            // Gap-plasticity model
            ParamUniaxial::PlasticGap {
                young,
                yield_stress,
                gap,
                hardening_ratio,
                side,
            } => Box::new(PlasticGap::new(young, yield_stress, gap, hardening_ratio, side)?),
        };
        Ok(UniaxialModel { actual })
    }

    /// Allocates one independent model per integration point
    pub fn new_array(param: &ParamUniaxial, n_integ_point: usize) -> Result<Vec<Box<dyn UniaxialMaterial>>, StrError> {
        let model = UniaxialModel::new(param)?;
        Ok((0..n_integ_point).map(|_| model.actual.copy_material()).collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
