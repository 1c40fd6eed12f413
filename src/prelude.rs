//! Makes available common structures needed to drive a material model
//!
//! You may write `use gapsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, GapSide, ParamUniaxial, SampleParams, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::material::{LinearElastic, PlasticGap, ResponseInput, StrainPath, StressStrainPlot};
pub use crate::material::{UniaxialMaterial, UniaxialModel, UniaxialState, UniaxialStates};
pub use crate::StrError;
