mod agency_config;

pub use agency_config::AgencyConfiguration;
