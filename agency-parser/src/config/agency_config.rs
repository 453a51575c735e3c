use crate::app::AgencyAppError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;

/// agency metadata and run behavior for a feed ingestion run.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AgencyConfiguration {
    pub agency_name: String,
    /// GTFS route_type shared by every route of the agency (3 = bus)
    pub route_type: u16,
    /// agency color as 6 hex digits without the leading '#'
    pub agency_color: String,
    /// resolve records with a rayon worker pool
    pub parallelize: bool,
}

impl Default for AgencyConfiguration {
    fn default() -> Self {
        Self {
            agency_name: String::from("Airdrie Transit"),
            route_type: 3,
            agency_color: String::from("0099CC"),
            parallelize: true,
        }
    }
}

impl AgencyConfiguration {
    pub fn validate(self) -> Result<Self, AgencyAppError> {
        if self.agency_name.trim().is_empty() {
            return Err(AgencyAppError::ConfigurationError(String::from(
                "agency_name must not be empty",
            )));
        }
        let is_hex_color = self.agency_color.len() == 6
            && self.agency_color.chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex_color {
            return Err(AgencyAppError::ConfigurationError(format!(
                "agency_color must be 6 hex digits, found '{}'",
                self.agency_color
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&String> for AgencyConfiguration {
    type Error = AgencyAppError;

    /// reads a .toml or .json configuration; absent fields take their defaults.
    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf = match Path::new(f).extension().and_then(|ext| ext.to_str()) {
            Some("toml") => decode_file(f, |s: &str| toml::from_str(s))?,
            Some("json") => decode_file(f, |s: &str| serde_json::from_str(s))?,
            _ => {
                return Err(AgencyAppError::ConfigurationError(format!(
                    "unsupported file type: {f}"
                )))
            }
        };
        conf.validate()
    }
}

fn decode_file<E, F>(f: &str, decode: F) -> Result<AgencyConfiguration, AgencyAppError>
where
    E: Display,
    F: FnOnce(&str) -> Result<AgencyConfiguration, E>,
{
    let contents = std::fs::read_to_string(f)
        .map_err(|e| AgencyAppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
    decode(&contents)
        .map_err(|e| AgencyAppError::ConfigurationError(format!("failure decoding {f}: {e}")))
}

#[cfg(test)]
mod test {
    use super::AgencyConfiguration;
    use crate::app::AgencyAppError;
    use std::path::PathBuf;

    fn write_temp(filename: &str, contents: &str) -> String {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "agency-parser-{}-{filename}",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("test invariant failed: could not write temp file");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let f = write_temp("partial.toml", "parallelize = false\n");
        let conf = AgencyConfiguration::try_from(&f).expect("should decode");
        assert!(!conf.parallelize);
        assert_eq!(conf.agency_name, "Airdrie Transit");
        assert_eq!(conf.route_type, 3);
        assert_eq!(conf.agency_color, "0099CC");
    }

    #[test]
    fn test_json() {
        let f = write_temp(
            "full.json",
            r#"{"agency_name": "Test Transit", "route_type": 0, "agency_color": "ff00aa"}"#,
        );
        let conf = AgencyConfiguration::try_from(&f).expect("should decode");
        assert_eq!(conf.agency_name, "Test Transit");
        assert_eq!(conf.route_type, 0);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let f = write_temp("color.toml", "agency_color = \"#0099CC\"\n");
        let result = AgencyConfiguration::try_from(&f);
        assert!(matches!(result, Err(AgencyAppError::ConfigurationError(_))));
    }

    #[test]
    fn test_unreadable_and_malformed_files() {
        let missing = String::from("does/not/exist/agency.toml");
        assert!(matches!(
            AgencyConfiguration::try_from(&missing),
            Err(AgencyAppError::ConfigurationError(_))
        ));
        let malformed = write_temp("malformed.json", "{\"route_type\": \"bus\"}");
        assert!(matches!(
            AgencyConfiguration::try_from(&malformed),
            Err(AgencyAppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_unsupported_file_type() {
        let f = String::from("agency.yaml");
        let result = AgencyConfiguration::try_from(&f);
        assert!(matches!(result, Err(AgencyAppError::ConfigurationError(_))));
    }
}
