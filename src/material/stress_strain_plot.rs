use super::UniaxialStates;
use crate::StrError;
use plotpy::{Curve, Legend, Plot};
use std::ffi::OsStr;

/// Draws uniaxial stress-strain curves
pub struct StressStrainPlot {
    plot: Plot,
    percentage_strains: bool,
    with_legend: bool,
}

impl StressStrainPlot {
    /// Allocates a new instance
    pub fn new() -> Self {
        StressStrainPlot {
            plot: Plot::new(),
            percentage_strains: false,
            with_legend: false,
        }
    }

    /// Shows strains as percentages
    pub fn set_percentage_strains(&mut self, flag: bool) -> &mut Self {
        self.percentage_strains = flag;
        self
    }

    /// Draws the stress-strain curve
    ///
    /// # Input
    ///
    /// * `states` -- the converged states
    /// * `extra` -- is a function `|curve| {}` to configure the curve
    pub fn draw<F>(&mut self, states: &UniaxialStates, mut extra: F) -> &mut Self
    where
        F: FnMut(&mut Curve),
    {
        let x: Vec<_> = if self.percentage_strains {
            states.all.iter().map(|s| 100.0 * s.strain).collect()
        } else {
            states.strains()
        };
        let y = states.stresses();
        let mut curve = Curve::new();
        curve.set_label(&states.model_name);
        extra(&mut curve);
        curve.draw(&x, &y);
        self.plot.add(&curve);
        self.with_legend = true;
        self
    }

    /// Saves the figure
    ///
    /// # Input
    ///
    /// * `figure_path` -- may be a String, &str, or Path
    pub fn save<S>(&mut self, figure_path: &S) -> Result<(), StrError>
    where
        S: AsRef<OsStr> + ?Sized,
    {
        if self.with_legend {
            let mut legend = Legend::new();
            legend.draw();
            self.plot.add(&legend);
        }
        let x_label = if self.percentage_strains {
            "$\\varepsilon$ [%]"
        } else {
            "$\\varepsilon$"
        };
        self.plot.grid_and_labels(x_label, "$\\sigma$");
        self.plot.save(figure_path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StressStrainPlot;
    use crate::base::{Config, GapSide, DEFAULT_TEST_DIR};
    use crate::material::{PlasticGap, StrainPath};

    const SAVE_FIGURE: bool = false;

    #[test]
    fn stress_strain_plot_works() {
        let path = StrainPath::new_cyclic(&[0.25, 0.0, 0.35, 0.1], 10).unwrap();
        let config = Config::new();
        let mut tension = PlasticGap::new(200.0, 20.0, 0.01, 0.02, GapSide::Tension).unwrap();
        let states_t = path.follow(&mut tension, &config).unwrap();
        let mut compression = PlasticGap::new(200.0, 20.0, 0.01, 0.02, GapSide::Compression).unwrap();
        let mirrored: Vec<_> = path.strains.iter().map(|e| -e).collect();
        let path_c = StrainPath { strains: mirrored };
        let states_c = path_c.follow(&mut compression, &config).unwrap();
        assert_eq!(states_t.all.len(), states_c.all.len());
        for (t, c) in states_t.all.iter().zip(states_c.all.iter()) {
            assert_eq!(t.stress, -c.stress);
        }

        let mut ssp = StressStrainPlot::new();
        ssp.set_percentage_strains(true)
            .draw(&states_t, |curve| {
                curve.set_marker_style(".").set_label("tension");
            })
            .draw(&states_c, |curve| {
                curve.set_line_style("--").set_label("compression");
            });
        if SAVE_FIGURE {
            ssp.save(&format!("{}/test_stress_strain_plot_1.svg", DEFAULT_TEST_DIR))
                .unwrap();
        }
    }
}
