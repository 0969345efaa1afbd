use clap::Parser;
use enroll::{Args, Config};
use log::{error, info};
use std::process;

fn main() {
    let args = Args::parse();

    let source = Config::source(args.config.as_deref());
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = enroll::logging::init(&config.logging, args.log_level) {
        eprintln!("{}", e);
        process::exit(1);
    }

    match &source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }
    info!("Starting enroll");
    if let Err(e) = enroll::run(args, config) {
        error!("{}", e);
        process::exit(1);
    }
}
