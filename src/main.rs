use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use cvkit::{Config, CvKit};
use cvkit::utils::logger::Logger;
use cvkit::commands::{CommandFactory, CvKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("cvkit")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Sample, crop, zoom and overlay images with regions that always fit")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sample")
                .short('s')
                .long("sample")
                .help("Take a sample that is moved inside the image if it would not fit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .short('c')
                .long("crop")
                .help("Crop a region, shrinking it if it runs off the edge")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("zoom")
                .short('z')
                .long("zoom")
                .help("Zoom into the image by LEVEL (at least 1)")
                .value_name("LEVEL")
                .required(false),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Blend this image onto the input")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Region size as 'w,h'")
                .value_name("W,H")
                .required(false),
        )
        .arg(
            Arg::new("pos")
                .long("pos")
                .help("Top-left position as 'x,y' (random for samples when omitted)")
                .value_name("X,Y")
                .required(false),
        )
        .arg(
            Arg::new("centre")
                .long("centre")
                .help("Zoom centre as 'x,y' (image middle when omitted)")
                .value_name("X,Y")
                .required(false),
        )
        .arg(
            Arg::new("annotate")
                .long("annotate")
                .help("Save the input with the sample framed to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .help("Take COUNT random samples, saved as OUTPUT_N")
                .value_name("COUNT")
                .required(false),
        )
        .arg(
            Arg::new("blend")
                .long("blend")
                .help("Overlay blend ratio between 0 (invisible) and 1 (opaque)")
                .value_name("RATIO")
                .required(false),
        )
        .arg(
            Arg::new("additive")
                .long("additive")
                .help("Add the overlay to the input, making black transparent")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-warnings")
                .long("no-warnings")
                .help("Suppress warnings about shrunk crops and overlays")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the default settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("record")
                .long("record")
                .help("Write a record of resolved regions to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if matches.get_flag("no-warnings") {
        config.suppress_warnings = true;
    }

    let kit = match CvKit::new(matches.get_one::<String>("record").map(|s| s.as_str())) {
        Ok(k) => k.with_config(config),
        Err(e) => {
            eprintln!("Error initializing cvkit: {}", e);
            process::exit(1);
        }
    };

    let factory = CvKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
