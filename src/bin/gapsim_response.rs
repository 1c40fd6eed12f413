use gapsim::prelude::*;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "gapsim_response",
    about = "Computes the stress-strain response of a uniaxial material along a strain path"
)]
struct Options {
    /// JSON file with the material parameters and the strain path
    input: String,

    /// Output directory for the history (JSON) and figure (SVG) files
    #[structopt(short, long, default_value = "/tmp/gapsim/results")]
    out_dir: String,

    /// Shows the trial state at each iteration
    #[structopt(short, long)]
    verbose: bool,

    /// Saves the stress-strain figure
    #[structopt(short, long)]
    plot: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let input = ResponseInput::read_json(&options.input)?;
    let path = input.strain_path()?;
    let mut config = input.config()?;
    config
        .set_verbose_steps(true)?
        .set_verbose_iterations(options.verbose)?;

    // run
    let mut model = UniaxialModel::new(&input.param)?;
    let states = path.follow(model.actual.as_mut(), &config)?;

    // write history
    let fn_stem = Path::new(&options.input)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("cannot get the stem of the input filename")?;
    let path_json = format!("{}/{}.json", options.out_dir, fn_stem);
    states.write_json(&path_json)?;

    // save figure
    let path_svg = format!("{}/{}.svg", options.out_dir, fn_stem);
    if options.plot {
        let mut ssp = StressStrainPlot::new();
        ssp.draw(&states, |curve| {
            curve.set_marker_style(".");
        });
        ssp.save(&path_svg)?;
    }

    // message
    let thin_line = format!("{:─^1$}", "", path_json.len());
    println!("\n\n{}", thin_line);
    println!("The history file is:");
    println!("{}", path_json);
    if options.plot {
        println!("The figure file is:");
        println!("{}", path_svg);
    }
    println!("{}\n\n", thin_line);
    Ok(())
}
