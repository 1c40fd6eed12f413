use super::StrainPath;
use crate::base::{Config, ParamUniaxial};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the input data to compute the response of a material along a strain path
///
/// Either `strains` (one target per step) or `peaks` (split into `n_increments`
/// steps per branch) must be given.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResponseInput {
    /// Holds the material parameters
    pub param: ParamUniaxial,

    /// Holds the target strains
    #[serde(default)]
    pub strains: Vec<f64>,

    /// Holds the strains at the reversal points
    #[serde(default)]
    pub peaks: Vec<f64>,

    /// Holds the number of steps per branch between peaks
    #[serde(default = "default_n_increments")]
    pub n_increments: usize,

    /// Holds the number of trial evaluations per step
    #[serde(default = "default_n_iterations")]
    pub n_iterations: usize,

    /// Simulates a rejected trial before each step
    #[serde(default)]
    pub simulate_rejections: bool,
}

fn default_n_increments() -> usize {
    10
}

fn default_n_iterations() -> usize {
    1
}

impl ResponseInput {
    /// Reads a JSON file with the input data
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
        let data = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(data)
    }

    /// Returns the strain path
    pub fn strain_path(&self) -> Result<StrainPath, StrError> {
        match (self.strains.is_empty(), self.peaks.is_empty()) {
            (false, true) => {
                let mut path = StrainPath::new();
                for strain in &self.strains {
                    path.push_strain(*strain)?;
                }
                Ok(path)
            }
            (true, false) => StrainPath::new_cyclic(&self.peaks, self.n_increments),
            (true, true) => Err("either strains or peaks must be given"),
            (false, false) => Err("strains and peaks cannot be given together"),
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> Result<Config, StrError> {
        let mut config = Config::new();
        config
            .set_n_iterations(self.n_iterations)?
            .set_simulate_rejections(self.simulate_rejections)?;
        Ok(config)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ResponseInput;
    use crate::base::{GapSide, ParamUniaxial};

    #[test]
    fn deserialize_works() {
        let json = r#"{
            "param": {
                "name": "PlasticGap",
                "young": 200.0,
                "yield_stress": 20.0,
                "gap": 0.01,
                "hardening_ratio": 0.02,
                "side": "Tension"
            },
            "peaks": [0.2, 0.0],
            "n_increments": 4
        }"#;
        let input: ResponseInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.param,
            ParamUniaxial::PlasticGap {
                young: 200.0,
                yield_stress: 20.0,
                gap: 0.01,
                hardening_ratio: 0.02,
                side: GapSide::Tension,
            }
        );
        assert_eq!(input.n_iterations, 1);
        assert_eq!(input.simulate_rejections, false);
        let path = input.strain_path().unwrap();
        assert_eq!(path.strains.len(), 8);
        let config = input.config().unwrap();
        assert_eq!(config.n_iterations, 1);
    }

    #[test]
    fn strain_path_captures_errors() {
        let json = r#"{ "param": { "name": "LinearElastic", "young": 1.0 } }"#;
        let mut input: ResponseInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.n_increments, 10);
        assert_eq!(input.strain_path().err(), Some("either strains or peaks must be given"));
        input.strains = vec![0.1];
        input.peaks = vec![0.1];
        assert_eq!(
            input.strain_path().err(),
            Some("strains and peaks cannot be given together")
        );
        input.peaks.clear();
        assert_eq!(input.strain_path().unwrap().strains, &[0.1]);
        input.n_iterations = 0;
        assert_eq!(input.config().err(), Some("n_iterations must be ≥ 1"));
    }

    #[test]
    fn read_json_captures_errors() {
        assert_eq!(
            ResponseInput::read_json("/tmp/gapsim/__not_found__.json").err(),
            Some("cannot open file")
        );
    }
}
