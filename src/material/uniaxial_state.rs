use super::UniaxialMaterial;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a snapshot of the state at a single integration point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniaxialState {
    /// Holds the strain ε
    pub strain: f64,

    /// Holds the stress σ
    pub stress: f64,

    /// Holds the tangent modulus dσ/dε
    pub tangent: f64,
}

/// Holds a sequence of converged states
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniaxialStates {
    /// Holds the name of the model that generated the states
    pub model_name: String,

    /// Holds all converged states
    pub all: Vec<UniaxialState>,
}

impl UniaxialState {
    /// Captures the current (possibly trial) state of a model
    pub fn from(model: &dyn UniaxialMaterial) -> Self {
        UniaxialState {
            strain: model.strain()[0],
            stress: model.stress()[0],
            tangent: model.tangent_stiffness().get(0, 0),
        }
    }
}

impl UniaxialStates {
    /// Allocates a new instance
    pub fn new(model_name: &str) -> Self {
        UniaxialStates {
            model_name: model_name.to_string(),
            all: Vec::new(),
        }
    }

    /// Returns the strains
    pub fn strains(&self) -> Vec<f64> {
        self.all.iter().map(|s| s.strain).collect()
    }

    /// Returns the stresses
    pub fn stresses(&self) -> Vec<f64> {
        self.all.iter().map(|s| s.stress).collect()
    }

    /// Reads a JSON file with the states
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let states = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(states)
    }

    /// Writes a JSON file with the states
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for UniaxialState {
    /// Returns a nicely formatted string representing the state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(v) => write!(
                f,
                "ε = {:.3$}, σ = {:.3$}, Eₜ = {:.3$}",
                self.strain, self.stress, self.tangent, v
            ),
            None => write!(f, "ε = {:?}, σ = {:?}, Eₜ = {:?}", self.strain, self.stress, self.tangent),
        }
    }
}

impl fmt::Display for UniaxialStates {
    /// Returns a table with all states
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "{}\n", self.model_name)?;
        write!(f, "{:>5} {:>15} {:>15} {:>15}\n", "step", "ε", "σ", "Eₜ")?;
        for (i, state) in self.all.iter().enumerate() {
            write!(
                f,
                "{:>5} {:>15.4$e} {:>15.4$e} {:>15.4$e}\n",
                i, state.strain, state.stress, state.tangent, precision
            )?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
