extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelband;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches};
use std::process;
use std::str::FromStr;

use mandelband::config::{
    DEFAULT_BOUNDS, DEFAULT_DIMENSIONS, DEFAULT_ITERATIONS, DEFAULT_OUTPUT,
};
use mandelband::{
    render_participant, Bounds, Config, Dimensions, EnvRuntime, FixedRuntime, Identity, Runtime,
    Session,
};

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn parse<T: FromStr>(s: &str, what: &str) -> Result<T, String> {
    T::from_str(s).map_err(|_| format!("Could not parse {} from {:?}", what, s))
}

const ITERATIONS: &str = "iterations";
const BOUNDS: &str = "bounds";
const DIMENSIONS: &str = "dimensions";
const FILE: &str = "file";
const THREADS: &str = "threads";
const RANK: &str = "rank";
const PARTICIPANTS: &str = "participants";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelband")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders one horizontal band of the Mandelbrot set per participant")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("n")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("Iteration cap [default: 255]"),
        )
        .arg(
            Arg::with_name(BOUNDS)
                .long(BOUNDS)
                .short("b")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(4)
                .value_names(&["xmin", "xmax", "ymin", "ymax"])
                .validator(|s| validate_number::<f64>(&s, "Could not parse a plane bound"))
                .help("Bounds of the complex plane [default: -1.78 0.78 -0.961 0.961]"),
        )
        .arg(
            Arg::with_name(DIMENSIONS)
                .long(DIMENSIONS)
                .short("d")
                .takes_value(true)
                .number_of_values(2)
                .value_names(&["width", "height"])
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value() as usize,
                        "Could not parse image dimension",
                        "Image dimensions must be positive",
                    )
                })
                .help("Size of the whole image in pixels [default: 4096 3072]"),
        )
        .arg(
            Arg::with_name(FILE)
                .long(FILE)
                .short("f")
                .takes_value(true)
                .help("Base output file; the rank is appended [default: mandel.ppm]"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads each participant renders with"),
        )
        .arg(
            Arg::with_name(RANK)
                .long(RANK)
                .takes_value(true)
                .requires(PARTICIPANTS)
                .validator(|s| validate_number::<usize>(&s, "Could not parse rank"))
                .help("This participant's rank, instead of asking the launcher"),
        )
        .arg(
            Arg::with_name(PARTICIPANTS)
                .long(PARTICIPANTS)
                .takes_value(true)
                .requires(RANK)
                .validator(|s| validate_number::<usize>(&s, "Could not parse participant count"))
                .help("Number of participants, instead of asking the launcher"),
        )
        .get_matches()
}

fn config_from(matches: &ArgMatches) -> Result<Config, String> {
    let iterations = match matches.value_of(ITERATIONS) {
        Some(n) => parse(n, "iteration count")?,
        None => DEFAULT_ITERATIONS,
    };

    let (x_min, x_max, y_min, y_max) = match matches.values_of(BOUNDS) {
        Some(values) => {
            let values = values
                .map(|v| parse::<f64>(v, "plane bound"))
                .collect::<Result<Vec<f64>, String>>()?;
            (values[0], values[1], values[2], values[3])
        }
        None => DEFAULT_BOUNDS,
    };
    let bounds = Bounds::new(x_min, x_max, y_min, y_max).map_err(|e| e.to_string())?;

    let (width, height) = match matches.values_of(DIMENSIONS) {
        Some(values) => {
            let values = values
                .map(|v| parse::<usize>(v, "image dimension"))
                .collect::<Result<Vec<usize>, String>>()?;
            (values[0], values[1])
        }
        None => DEFAULT_DIMENSIONS,
    };
    let dimensions = Dimensions::new(width, height).map_err(|e| e.to_string())?;

    let output = matches.value_of(FILE).unwrap_or(DEFAULT_OUTPUT);
    let threads = match matches.value_of(THREADS) {
        Some(t) => parse(t, "thread count")?,
        None => 1,
    };

    Config::new(iterations, bounds, dimensions, output)
        .map(|c| c.with_threads(threads))
        .map_err(|e| e.to_string())
}

fn identity_from(matches: &ArgMatches) -> Result<Option<Identity>, String> {
    match (matches.value_of(RANK), matches.value_of(PARTICIPANTS)) {
        (Some(rank), Some(count)) => {
            let rank = parse(rank, "rank")?;
            let count = parse(count, "participant count")?;
            Identity::new(rank, count)
                .map(Some)
                .map_err(|e| e.to_string())
        }
        _ => Ok(None),
    }
}

fn run<R: Runtime>(config: &Config, runtime: R) -> mandelband::Result<()> {
    let session = Session::start(runtime)?;
    render_participant(config, session.identity())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    let (config, identity) = match (config_from(&matches), identity_from(&matches)) {
        (Ok(config), Ok(identity)) => (config, identity),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    debug!("{:?}", config);

    let outcome = match identity {
        Some(identity) => run(&config, FixedRuntime(identity)),
        None => run(&config, EnvRuntime),
    };
    if let Err(e) = outcome {
        eprintln!("Render failure: {}", e);
        process::exit(1);
    }
}
