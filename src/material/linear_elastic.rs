use super::{uniaxial_strain, UniaxialMaterial};
use crate::base::ParamUniaxial;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Implements a uniaxial linear elastic model
#[derive(Clone, Debug)]
pub struct LinearElastic {
    /// Young's modulus E
    young: f64,

    /// Density
    density: f64,

    /// Trial strain
    strain: f64,

    /// Last converged strain
    strain_converged: f64,
}

impl LinearElastic {
    /// Allocates a new instance
    pub fn new(young: f64, density: f64) -> Result<Self, StrError> {
        ParamUniaxial::LinearElastic { young, density }.validate()?;
        Ok(LinearElastic {
            young,
            density,
            strain: 0.0,
            strain_converged: 0.0,
        })
    }
}

impl UniaxialMaterial for LinearElastic {
    fn name(&self) -> &'static str {
        "LinearElastic"
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn poisson_ratio(&self) -> f64 {
        0.0
    }

    fn bulk_modulus(&self) -> f64 {
        0.0
    }

    fn shear_modulus(&self) -> f64 {
        0.0
    }

    fn elasticity_modulus(&self) -> f64 {
        self.young
    }

    /// Returns the strain energy density W = ½ E ε²
    fn energy(&self) -> f64 {
        0.5 * self.young * self.strain * self.strain
    }

    fn strain(&self) -> Vector {
        Vector::from(&[self.strain])
    }

    fn stress(&self) -> Vector {
        Vector::from(&[self.young * self.strain])
    }

    fn strain_rate(&self) -> Vector {
        Vector::new(1)
    }

    fn total_stress(&self) -> Vector {
        self.stress()
    }

    fn damping(&self) -> Matrix {
        Matrix::new(1, 1)
    }

    fn tangent_stiffness(&self) -> Matrix {
        Matrix::from(&[[self.young]])
    }

    fn initial_tangent_stiffness(&self) -> Matrix {
        Matrix::from(&[[self.young]])
    }

    fn update_state(&mut self, strain: &Vector, _integration_flag: usize) -> Result<(), StrError> {
        self.strain = uniaxial_strain(strain)?;
        Ok(())
    }

    fn commit_state(&mut self) {
        self.strain_converged = self.strain;
    }

    fn reverse_state(&mut self) {
        self.strain = self.strain_converged;
    }

    fn initial_state(&mut self) {
        self.strain = 0.0;
        self.strain_converged = 0.0;
    }

    fn copy_material(&self) -> Box<dyn UniaxialMaterial> {
        let mut copy = self.clone();
        copy.initial_state();
        Box::new(copy)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
