//! Implements uniaxial material models

mod linear_elastic;
mod plastic_gap;
mod response_input;
mod strain_path;
mod stress_strain_plot;
mod uniaxial_model;
mod uniaxial_state;
mod uniaxial_trait;
pub use crate::material::linear_elastic::*;
pub use crate::material::plastic_gap::*;
pub use crate::material::response_input::*;
pub use crate::material::strain_path::*;
pub use crate::material::stress_strain_plot::*;
pub use crate::material::uniaxial_model::*;
pub use crate::material::uniaxial_state::*;
pub use crate::material::uniaxial_trait::*;
