use super::{UniaxialMaterial, UniaxialState, UniaxialStates};
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;

/// Holds a sequence of target strains that drive a uniaxial model
///
/// Following the path emulates the interaction with a nonlinear solver:
/// a few trial evaluations per step (possibly including a rejected one),
/// followed by a commit.
pub struct StrainPath {
    /// Holds the target strains (one per step)
    pub strains: Vec<f64>,
}

impl StrainPath {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        StrainPath { strains: Vec::new() }
    }

    /// Generates a monotonic path from zero to `strain_max`
    pub fn new_monotonic(strain_max: f64, n_increments: usize) -> Result<Self, StrError> {
        StrainPath::new_cyclic(&[strain_max], n_increments)
    }

    /// Generates a path through a sequence of peaks starting from zero
    ///
    /// Each branch (from the previous peak to the next) is split into `n_increments` steps.
    ///
    /// # Input
    ///
    /// * `peaks` -- the strains at the reversal points, e.g., `[0.2, 0.05, 0.3]`
    /// * `n_increments` -- number of steps per branch
    pub fn new_cyclic(peaks: &[f64], n_increments: usize) -> Result<Self, StrError> {
        if n_increments < 1 {
            return Err("n_increments must be ≥ 1");
        }
        let mut path = StrainPath::new();
        let mut start = 0.0;
        for &peak in peaks {
            for i in 0..n_increments {
                let m = (i + 1) as f64 / (n_increments as f64);
                path.push_strain(start + m * (peak - start))?;
            }
            start = peak;
        }
        Ok(path)
    }

    /// Pushes a new target strain
    pub fn push_strain(&mut self, strain: f64) -> Result<&mut Self, StrError> {
        if !strain.is_finite() {
            return Err("strain must be finite");
        }
        self.strains.push(strain);
        Ok(self)
    }

    /// Drives the model along the path and returns the converged states
    ///
    /// The first entry corresponds to the model state before the first step.
    pub fn follow(&self, model: &mut dyn UniaxialMaterial, config: &Config) -> Result<UniaxialStates, StrError> {
        let mut states = UniaxialStates::new(model.name());
        states.all.push(UniaxialState::from(model));
        let mut strain = Vector::new(1);
        let mut previous = model.strain()[0];
        print_header(config);
        for (step, target) in self.strains.iter().enumerate() {
            let increment = target - previous;

            // rejected trial
            if config.simulate_rejections {
                strain[0] = previous + config.rejection_overshoot * increment;
                model.update_state(&strain, 0)?;
                print_iteration(config, 0, model, true);
                model.reverse_state();
            }

            // trial evaluations toward the target
            for k in 0..config.n_iterations {
                let m = (k + 1) as f64 / (config.n_iterations as f64);
                strain[0] = previous + m * increment;
                model.update_state(&strain, 0)?;
                print_iteration(config, k + 1, model, false);
            }

            // converged
            model.commit_state();
            let state = UniaxialState::from(model);
            print_step(config, step, &state);
            states.all.push(state);
            previous = *target;
        }
        print_footer(config);
        Ok(states)
    }
}

/// Prints the header before stepping
fn print_header(config: &Config) {
    if config.verbose_steps || config.verbose_iterations {
        println!("\nGAPSIM === STRAIN PATH ===========================================");
        println!("\"iter\" means iteration; \"rej\" means rejected (reversed) trial\n");
        println!("{}", "─".repeat(66));
        println!("{:>6} {:>5} {:>3} {:>16} {:>16} {:>12}", "step", "iter", "rej", "ε", "σ", "Eₜ");
        println!("{}", "─".repeat(66));
    }
}

/// Prints the trial state
fn print_iteration(config: &Config, iteration: usize, model: &dyn UniaxialMaterial, rejected: bool) {
    if config.verbose_iterations {
        let state = UniaxialState::from(model);
        let str_rej = if rejected { "✗" } else { "" };
        println!(
            "{:>6} {:>5} {:>3} {:>16.8e} {:>16.8e} {:>12.4e}",
            "·", iteration, str_rej, state.strain, state.stress, state.tangent
        );
    }
}

/// Prints the converged state
fn print_step(config: &Config, step: usize, state: &UniaxialState) {
    if config.verbose_steps {
        println!(
            "{:>6} {:>5} {:>3} {:>16.8e} {:>16.8e} {:>12.4e}",
            step + 1,
            "·",
            "",
            state.strain,
            state.stress,
            state.tangent
        );
    }
}

/// Prints the horizontal line at the end of the path
fn print_footer(config: &Config) {
    if config.verbose_steps || config.verbose_iterations {
        println!("{}", "─".repeat(66));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
