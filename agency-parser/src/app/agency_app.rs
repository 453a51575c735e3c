use super::{AgencyAppError, FeedProcessor};
use crate::config::AgencyConfiguration;
use crate::normalize::LabelKind;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};

/// command line tool resolving route/stop identifiers and cleaning labels
/// for the agency's GTFS feed. results are written to stdout as CSV.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct AgencyApp {
    /// path to a .toml or .json agency configuration file
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
    /// select the feed operation to run
    #[command(subcommand)]
    pub op: AgencyOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AgencyOperation {
    /// print the configured agency metadata
    Agency,
    /// resolve route IDs and short names from a GTFS routes.txt file
    Routes {
        #[arg(long)]
        routes_file: String,
    },
    /// resolve stop IDs and clean stop names from a GTFS stops.txt file
    Stops {
        #[arg(long)]
        stops_file: String,
    },
    /// clean trip headsigns from a GTFS trips.txt file
    Trips {
        #[arg(long)]
        trips_file: String,
    },
    /// clean a single label
    Label {
        #[arg(long, value_enum)]
        kind: LabelKind,
        /// for direction headsigns, the text was taken from a stop name
        #[arg(long, default_value_t = false)]
        from_stop_name: bool,
        text: String,
    },
}

#[derive(Serialize)]
struct AgencyRow<'a> {
    agency_name: &'a str,
    route_type: u16,
    agency_color: &'a str,
}

impl AgencyApp {
    pub fn run(&self) -> Result<(), AgencyAppError> {
        let conf = match &self.configuration_file {
            None => Ok(AgencyConfiguration::default()),
            Some(f) => {
                log::info!("reading agency configuration from {f}");
                AgencyConfiguration::try_from(f)
            }
        }?;
        self.op.run(&conf, std::io::stdout().lock())
    }
}

impl AgencyOperation {
    pub fn run<W: Write>(
        &self,
        conf: &AgencyConfiguration,
        mut out: W,
    ) -> Result<(), AgencyAppError> {
        match self {
            AgencyOperation::Agency => {
                let mut writer = csv::Writer::from_writer(out);
                writer.serialize(AgencyRow {
                    agency_name: &conf.agency_name,
                    route_type: conf.route_type,
                    agency_color: &conf.agency_color,
                })?;
                writer.flush()?;
                Ok(())
            }
            AgencyOperation::Routes { routes_file } => {
                let processor = FeedProcessor::new(conf.parallelize)?;
                let n = processor.process_routes(open(routes_file)?, out)?;
                log::info!("resolved {n} routes for {}", conf.agency_name);
                Ok(())
            }
            AgencyOperation::Stops { stops_file } => {
                let processor = FeedProcessor::new(conf.parallelize)?;
                let n = processor.process_stops(open(stops_file)?, out)?;
                log::info!("resolved {n} stops for {}", conf.agency_name);
                Ok(())
            }
            AgencyOperation::Trips { trips_file } => {
                let processor = FeedProcessor::new(conf.parallelize)?;
                let n = processor.process_trips(open(trips_file)?, out)?;
                log::info!("cleaned {n} trip headsigns for {}", conf.agency_name);
                Ok(())
            }
            AgencyOperation::Label {
                kind,
                from_stop_name,
                text,
            } => {
                let processor = FeedProcessor::new(conf.parallelize)?;
                let cleaned = processor.normalizer().normalize(*kind, *from_stop_name, text);
                writeln!(out, "{cleaned}")?;
                Ok(())
            }
        }
    }
}

fn open(path: &str) -> Result<BufReader<File>, AgencyAppError> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod test {
    use super::{AgencyApp, AgencyOperation};
    use crate::config::AgencyConfiguration;
    use crate::normalize::LabelKind;
    use clap::Parser;

    fn run(op: AgencyOperation) -> String {
        let mut out = Vec::new();
        op.run(&AgencyConfiguration::default(), &mut out)
            .expect("operation should succeed");
        String::from_utf8(out).expect("output should be utf-8")
    }

    #[test]
    fn test_agency_row() {
        let output = run(AgencyOperation::Agency);
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec!["agency_name,route_type,agency_color", "Airdrie Transit,3,0099CC"]
        );
    }

    #[test]
    fn test_label_operation() {
        let output = run(AgencyOperation::Label {
            kind: LabelKind::DirectionHeadsign,
            from_stop_name: true,
            text: String::from("EB Transit Terminal - Express"),
        });
        assert_eq!(output, "Term\n");
    }

    #[test]
    fn test_missing_feed_file() {
        let op = AgencyOperation::Routes {
            routes_file: String::from("does/not/exist/routes.txt"),
        };
        let result = op.run(&AgencyConfiguration::default(), Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cli() {
        let app = AgencyApp::parse_from([
            "agency_parser",
            "label",
            "--kind",
            "direction-headsign",
            "--from-stop-name",
            "Main St (Downtown)",
        ]);
        match app.op {
            AgencyOperation::Label {
                kind,
                from_stop_name,
                text,
            } => {
                assert_eq!(kind, LabelKind::DirectionHeadsign);
                assert!(from_stop_name);
                assert_eq!(text, "Main St (Downtown)");
            }
            _ => panic!("expected label operation"),
        }
        assert!(app.configuration_file.is_none());
    }
}
