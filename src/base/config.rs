use crate::StrError;
use std::fmt;

/// Holds configuration data for driving a material along a strain path
pub struct Config {
    /// Number of trial (iteration) evaluations before each commit
    pub n_iterations: usize,

    /// Performs one rejected (reversed) trial evaluation before each step
    ///
    /// The rejected trial overshoots the target strain by `rejection_overshoot` times
    /// the step increment; the material is then reversed to the last converged state.
    pub simulate_rejections: bool,

    /// Multiplier of the step increment used by the rejected trial
    pub rejection_overshoot: f64,

    /// Shows the committed state at each step
    pub verbose_steps: bool,

    /// Shows the trial state at each iteration
    pub verbose_iterations: bool,
}

impl Config {
    /// Allocates a new instance
    pub fn new() -> Self {
        Config {
            n_iterations: 1,
            simulate_rejections: false,
            rejection_overshoot: 2.0,
            verbose_steps: false,
            verbose_iterations: false,
        }
    }

    /// Sets the number of trial evaluations before each commit
    pub fn set_n_iterations(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_iterations must be ≥ 1");
        }
        self.n_iterations = value;
        Ok(self)
    }

    /// Enables or disables the simulation of rejected trials
    pub fn set_simulate_rejections(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.simulate_rejections = flag;
        Ok(self)
    }

    /// Sets the overshoot multiplier of the rejected trials
    pub fn set_rejection_overshoot(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !value.is_finite() || value <= 0.0 {
            return Err("rejection_overshoot must be > 0.0");
        }
        self.rejection_overshoot = value;
        Ok(self)
    }

    /// Shows the committed state at each step
    pub fn set_verbose_steps(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose_steps = flag;
        Ok(self)
    }

    /// Shows the trial state at each iteration
    pub fn set_verbose_iterations(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose_iterations = flag;
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "n_iterations = {:?}\n", self.n_iterations).unwrap();
        write!(f, "simulate_rejections = {:?}\n", self.simulate_rejections).unwrap();
        write!(f, "rejection_overshoot = {:?}\n", self.rejection_overshoot).unwrap();
        write!(f, "verbose_steps = {:?}\n", self.verbose_steps).unwrap();
        write!(f, "verbose_iterations = {:?}\n", self.verbose_iterations).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
