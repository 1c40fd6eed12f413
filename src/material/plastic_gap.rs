use super::{uniaxial_strain, UniaxialMaterial};
use crate::base::{GapSide, ParamUniaxial, GAP_TOLERANCE};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Implements a uniaxial bilinear elastoplastic model with a one-sided gap
///
/// The material carries no stress until the strain exceeds the gap. Afterwards,
/// it responds elastically with modulus `E` up to the yield strain, and with
/// the hardening modulus `η E` beyond that. The elastic window
/// `[min_yield_strain, max_yield_strain]` slides when a converged strain sets a
/// new extreme, encoding the plastic history.
///
/// With [GapSide::Compression], the yield stress and gap are negative and all
/// comparisons are mirrored; "min" and "max" then refer to the bounds nearest
/// and farthest from the origin along the negative axis.
///
/// ```text
///  σ
///  │            ╱ η E
///  │          ╱
///  │        ╱ fy
///  │       ╱
///  │  E   ╱
///  │     ╱
///  └────┴──────────── ε
///      gap
/// ```
#[derive(Clone, Debug)]
pub struct PlasticGap {
    /// Young's modulus E
    young: f64,

    /// Signed yield stress fy
    fy: f64,

    /// Signed gap strain
    gap: f64,

    /// Hardening ratio η
    ratio: f64,

    /// Side of the strain axis where the gap closes
    side: GapSide,

    /// Trial strain
    strain: f64,

    /// Last converged strain
    strain_converged: f64,

    /// Stress corresponding to the trial strain
    stress: f64,

    /// Tangent modulus corresponding to the trial strain
    tangent: f64,

    /// Lower bound of the elastic window (gap side)
    min_yield_strain: f64,

    /// Upper bound of the elastic window (yield side)
    max_yield_strain: f64,
}

impl PlasticGap {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus (> 0)
    /// * `yield_stress` -- yield stress; only the magnitude is used
    /// * `gap` -- gap strain; only the magnitude is used
    /// * `hardening_ratio` -- post-yield ratio η in `[0, 1)`
    /// * `side` -- the side of the strain axis where the gap closes
    pub fn new(young: f64, yield_stress: f64, gap: f64, hardening_ratio: f64, side: GapSide) -> Result<Self, StrError> {
        ParamUniaxial::PlasticGap {
            young,
            yield_stress,
            gap,
            hardening_ratio,
            side,
        }
        .validate()?;
        let mut model = PlasticGap {
            young,
            fy: side.signed(yield_stress),
            gap: side.signed(gap),
            ratio: hardening_ratio,
            side,
            strain: 0.0,
            strain_converged: 0.0,
            stress: 0.0,
            tangent: 0.0,
            min_yield_strain: 0.0,
            max_yield_strain: 0.0,
        };
        model.initial_state();
        Ok(model)
    }

    /// Returns the signed yield stress
    pub fn yield_stress(&self) -> f64 {
        self.fy
    }

    /// Returns the signed gap strain
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the hardening ratio
    pub fn hardening_ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the side of the strain axis where the gap closes
    pub fn side(&self) -> GapSide {
        self.side
    }

    /// Returns the last converged strain
    pub fn strain_converged(&self) -> f64 {
        self.strain_converged
    }

    /// Returns the elastic window `(min_yield_strain, max_yield_strain)`
    pub fn yield_bounds(&self) -> (f64, f64) {
        (self.min_yield_strain, self.max_yield_strain)
    }

    /// Returns the (1,1) entry of the initial stiffness
    fn initial_modulus(&self) -> f64 {
        if f64::abs(self.gap) < GAP_TOLERANCE {
            self.young
        } else {
            0.0
        }
    }
}

impl UniaxialMaterial for PlasticGap {
    fn name(&self) -> &'static str {
        "PlasticGap"
    }

    fn density(&self) -> f64 {
        0.0
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

    /// Returns zero because the energy is not computed by this model
    fn energy(&self) -> f64 {
        0.0
    }

    fn strain(&self) -> Vector {
        Vector::from(&[self.strain])
    }

    fn stress(&self) -> Vector {
        Vector::from(&[self.stress])
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
        Matrix::from(&[[self.tangent]])
    }

    /// Returns E if the gap is (numerically) closed; zero otherwise
    fn initial_tangent_stiffness(&self) -> Matrix {
        Matrix::from(&[[self.initial_modulus()]])
    }

    /// Computes the trial stress and tangent
    ///
    /// ```text
    /// beyond max:  σ = fy + (ε - gap - fy/E) η E   and   Eₜ = η E
    /// before min:  σ = 0                           and   Eₜ = 0
    /// otherwise:   σ = E (ε - min)                 and   Eₜ = E
    /// ```
    fn update_state(&mut self, strain: &Vector, _integration_flag: usize) -> Result<(), StrError> {
        self.strain = uniaxial_strain(strain)?;
        let (e, fy, eta) = (self.young, self.fy, self.ratio);
        if self.side.beyond(self.strain, self.max_yield_strain) {
            self.stress = fy + (self.strain - self.gap - fy / e) * eta * e;
            self.tangent = eta * e;
        } else if self.side.beyond(self.min_yield_strain, self.strain) {
            self.stress = 0.0;
            self.tangent = 0.0;
        } else {
            self.stress = e * (self.strain - self.min_yield_strain);
            self.tangent = e;
        }
        Ok(())
    }

    /// Moves the elastic window if the converged strain sets a new extreme
    fn commit_state(&mut self) {
        let (e, fy, eta) = (self.young, self.fy, self.ratio);
        if self.side.beyond(self.strain, self.max_yield_strain) {
            // new excursion along the hardening line; unloading follows E
            self.max_yield_strain = self.strain;
            self.min_yield_strain = self.strain - self.stress / e;
        } else if self.side.beyond(self.min_yield_strain, self.strain) && self.side.beyond(self.strain, self.gap) {
            // re-anchor the window at the new minimum; the upper bound lands on the hardening line
            self.max_yield_strain = fy / e + (self.strain - eta * self.gap) / (1.0 - eta);
            self.min_yield_strain = self.strain;
        }
        self.strain_converged = self.strain;
    }

    /// Resets the trial strain only; stress and tangent are recomputed by the next update
    fn reverse_state(&mut self) {
        self.strain = self.strain_converged;
    }

    fn initial_state(&mut self) {
        self.min_yield_strain = self.gap;
        self.max_yield_strain = self.gap + self.fy / self.young;
        self.strain_converged = 0.0;
        self.strain = 0.0;
        self.stress = 0.0;
        self.tangent = self.initial_modulus();
    }

    fn copy_material(&self) -> Box<dyn UniaxialMaterial> {
        let mut copy = self.clone();
        copy.initial_state();
        Box::new(copy)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
