use gapsim::prelude::*;
use russell_lab::{approx_eq, Vector};

// Gap-plasticity material driven step by step
//
// TEST GOAL
//
// Verifies the trial/commit cycle of the gap-plasticity model through the
// generic material interface, as a solver would call it.
//
// PARAMETERS
//
// * E = 200, Sy = 20, gap = 0.01, η = 0.02, gap on the tension side
// * Initial elastic window: [0.01, 0.11]
//
//  σ
//  │                 ● 20.36 (ε = 0.20)
//  │          20 ╱───
//  │           ╱
//  │      8  ●
//  │       ╱
//  └──────┴─────────────── ε
//       0.01

const YOUNG: f64 = 200.0;
const YIELD_STRESS: f64 = 20.0;
const GAP: f64 = 0.01;
const RATIO: f64 = 0.02;

fn trial(model: &mut dyn UniaxialMaterial, strain: f64) -> Result<(f64, f64), StrError> {
    model.update_state(&Vector::from(&[strain]), 0)?;
    Ok((model.stress()[0], model.tangent_stiffness().get(0, 0)))
}

#[test]
fn test_plastic_gap_scenario() -> Result<(), StrError> {
    let param = ParamUniaxial::PlasticGap {
        young: YOUNG,
        yield_stress: YIELD_STRESS,
        gap: GAP,
        hardening_ratio: RATIO,
        side: GapSide::Tension,
    };
    let mut model = UniaxialModel::new(&param)?;
    let mat = model.actual.as_mut();

    // initial state
    assert_eq!(mat.initial_tangent_stiffness().get(0, 0), 0.0);
    assert_eq!(mat.strain()[0], 0.0);
    assert_eq!(mat.stress()[0], 0.0);

    // solver iterations within the first step (the last one converges)
    trial(mat, 0.2)?;
    trial(mat, 0.001)?;
    let (sigma, tangent) = trial(mat, 0.05)?;
    approx_eq(sigma, 8.0, 1e-13);
    assert_eq!(tangent, YOUNG);
    mat.commit_state();

    // the window did not move: 0.1 is still elastic from 0.01
    let (sigma, tangent) = trial(mat, 0.1)?;
    approx_eq(sigma, 18.0, 1e-13);
    assert_eq!(tangent, YOUNG);

    // hardening
    let (sigma, tangent) = trial(mat, 0.20)?;
    approx_eq(sigma, 20.36, 1e-13);
    approx_eq(tangent, RATIO * YOUNG, 1e-15);
    mat.commit_state();

    // the window moved to [0.0982, 0.20]
    let (sigma, tangent) = trial(mat, 0.0982 + 1e-9)?;
    approx_eq(sigma, 0.0, 1e-6);
    assert_eq!(tangent, YOUNG);
    let (sigma, tangent) = trial(mat, 0.0982 - 1e-9)?;
    assert_eq!(sigma, 0.0);
    assert_eq!(tangent, 0.0);

    // abandoned iteration
    trial(mat, 0.35)?;
    mat.reverse_state();
    assert_eq!(mat.strain()[0], 0.20);
    let (sigma, _) = trial(mat, 0.20)?;
    approx_eq(sigma, 20.36, 1e-13);

    // restart the analysis
    mat.initial_state();
    let (sigma, tangent) = trial(mat, 0.05)?;
    approx_eq(sigma, 8.0, 1e-13);
    assert_eq!(tangent, YOUNG);
    Ok(())
}

#[test]
fn test_plastic_gap_scenario_compression() -> Result<(), StrError> {
    let param = SampleParams::param_plastic_gap(GapSide::Compression);
    let mut model = UniaxialModel::new(&param)?;
    let mat = model.actual.as_mut();

    let (sigma, tangent) = trial(mat, 0.05)?;
    assert_eq!(sigma, 0.0);
    assert_eq!(tangent, 0.0);

    let (sigma, tangent) = trial(mat, -0.05)?;
    approx_eq(sigma, -8.0, 1e-13);
    assert_eq!(tangent, YOUNG);
    mat.commit_state();

    let (sigma, tangent) = trial(mat, -0.20)?;
    approx_eq(sigma, -20.36, 1e-13);
    approx_eq(tangent, RATIO * YOUNG, 1e-15);
    mat.commit_state();

    // elastic unloading from the new extreme
    let (sigma, tangent) = trial(mat, -0.15)?;
    approx_eq(sigma, -10.36, 1e-12);
    assert_eq!(tangent, YOUNG);
    Ok(())
}

#[test]
fn test_plastic_gap_without_gap() -> Result<(), StrError> {
    let param = SampleParams::param_plastic_no_gap(GapSide::Tension);
    let mut model = UniaxialModel::new(&param)?;
    let mat = model.actual.as_mut();
    assert_eq!(mat.initial_tangent_stiffness().get(0, 0), YOUNG);
    assert_eq!(mat.tangent_stiffness().get(0, 0), YOUNG);

    // elastic right from zero strain
    let (sigma, tangent) = trial(mat, 0.05)?;
    approx_eq(sigma, 10.0, 1e-13);
    assert_eq!(tangent, YOUNG);

    // yield at Sy/E = 0.1
    let (sigma, tangent) = trial(mat, 0.15)?;
    approx_eq(sigma, 20.0 + 0.05 * RATIO * YOUNG, 1e-13);
    approx_eq(tangent, RATIO * YOUNG, 1e-15);
    Ok(())
}
