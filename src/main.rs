use std::env;
use std::process::ExitCode;

use log::error;
use sliderpath::{SliderPath, Vector2};

const USAGE: &str = "usage: sliderpath <curve-data> <start-x> <start-y> <length>
example: sliderpath 'B|100:50|200:0' 0 0 250";

fn run(args: &[String]) -> Result<(), String> {
    let [curve_data, x, y, length] = args else {
        return Err(USAGE.to_string());
    };
    let number = |value: &String| {
        value
            .parse::<f64>()
            .map_err(|err| format!("{:?} is not a number: {}", value, err))
    };
    let start = Vector2::new(number(x)?, number(y)?);

    let mut slider =
        SliderPath::parse(curve_data, start, number(length)?).map_err(|err| err.to_string())?;
    let calculated = slider.calculate().map_err(|err| err.to_string())?;

    for point in calculated.path.iter() {
        println!("{},{}", point.x, point.y);
    }
    println!("# distance {}", calculated.distance());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
