//! Gapsim implements a uniaxial gap-plasticity material model for nonlinear finite element simulations
//!
//! The material carries no stress until a gap strain is exceeded (on the tension or compression
//! side); afterwards it follows a bilinear elastoplastic law with kinematic-like hysteresis.
//!
//! # Example
//!
//! ```
//! use gapsim::prelude::*;
//! use russell_lab::Vector;
//!
//! fn main() -> Result<(), StrError> {
//!     let mut model = PlasticGap::new(200.0, 20.0, 0.01, 0.02, GapSide::Tension)?;
//!     model.update_state(&Vector::from(&[0.05]), 0)?;
//!     assert_eq!(model.tangent_stiffness().get(0, 0), 200.0);
//!     model.commit_state();
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
