mod cmdline;
mod demo;
mod world;

use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    // Parse command line arguments.
    let args = cmdline::Args::parse();

    // Set up the logger.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("could not initialize logger: {}", e);
    }

    info!("logger initialized");

    cmdline::cmdline(args);
}
