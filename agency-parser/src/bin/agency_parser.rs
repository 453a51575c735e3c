//! resolves route/stop identifiers and cleans labels of a GTFS feed, writing
//! CSV to stdout. any unresolved identifier stops the run.
use agency_parser::app::AgencyApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = AgencyApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("agency_parser failed: {e}");
            std::process::exit(1);
        }
    }
}
