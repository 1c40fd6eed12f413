use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Specifies the essential functions for uniaxial material models
///
/// An instance is associated with a single integration point. The solver calls
/// `update_state` any number of times per step (trial evaluations), then either
/// `commit_state` (converged) or `reverse_state` (rejected).
pub trait UniaxialMaterial: Send {
    /// Returns the name of the model
    fn name(&self) -> &'static str;

    /// Indicates that the model carries a viscous (rate-dependent) term
    fn viscous(&self) -> bool {
        false
    }

    /// Returns the density
    fn density(&self) -> f64;

    /// Returns the Poisson's coefficient
    fn poisson_ratio(&self) -> f64;

    /// Returns the bulk modulus
    fn bulk_modulus(&self) -> f64;

    /// Returns the shear modulus
    fn shear_modulus(&self) -> f64;

    /// Returns the Young's modulus
    fn elasticity_modulus(&self) -> f64;

    /// Returns the energy at the current strain
    fn energy(&self) -> f64;

    /// Returns the strain vector (one component)
    fn strain(&self) -> Vector;

    /// Returns the stress vector (one component)
    fn stress(&self) -> Vector;

    /// Returns the strain rate vector (one component)
    fn strain_rate(&self) -> Vector;

    /// Returns the total stress vector (one component)
    fn total_stress(&self) -> Vector;

    /// Returns the viscous damping matrix (1 × 1)
    fn damping(&self) -> Matrix;

    /// Returns the tangent stiffness matrix (1 × 1) at the current (trial) state
    fn tangent_stiffness(&self) -> Matrix;

    /// Returns the stiffness matrix (1 × 1) at the initial state
    fn initial_tangent_stiffness(&self) -> Matrix;

    /// Computes the trial stress and tangent given the trial strain
    ///
    /// This function must not change the history (committed) variables.
    fn update_state(&mut self, strain: &Vector, integration_flag: usize) -> Result<(), StrError>;

    /// Accepts the current trial state as converged
    fn commit_state(&mut self);

    /// Returns the strain to the last converged value
    fn reverse_state(&mut self);

    /// Brings the model back to the state at construction time
    fn initial_state(&mut self);

    /// Returns a new independent instance with the same parameters and the initial state
    fn copy_material(&self) -> Box<dyn UniaxialMaterial>;
}

/// Extracts the single strain component from a strain vector
pub(crate) fn uniaxial_strain(strain: &Vector) -> Result<f64, StrError> {
    if strain.dim() != 1 {
        return Err("strain vector must have one component");
    }
    let value = strain[0];
    if !value.is_finite() {
        return Err("strain must be finite");
    }
    Ok(value)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::uniaxial_strain;
    use russell_lab::Vector;

    #[test]
    fn uniaxial_strain_captures_errors() {
        assert_eq!(
            uniaxial_strain(&Vector::new(2)).err(),
            Some("strain vector must have one component")
        );
        assert_eq!(
            uniaxial_strain(&Vector::new(0)).err(),
            Some("strain vector must have one component")
        );
        assert_eq!(
            uniaxial_strain(&Vector::from(&[f64::NAN])).err(),
            Some("strain must be finite")
        );
    }

    #[test]
    fn uniaxial_strain_works() {
        assert_eq!(uniaxial_strain(&Vector::from(&[0.25])).unwrap(), 0.25);
    }
}
