use std::{fmt, path::Path, str::FromStr};

use crate::{BatchError, core::item::Exporter};

use super::json::JsonExporterBuilder;
#[cfg(feature = "xml")]
use super::xml::XmlExporterBuilder;

/// Output format of the merged rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    #[cfg(feature = "xml")]
    Xml,
}

impl ExportFormat {
    /// Builds an exporter of this format writing to `path`.
    pub fn exporter_for<P: AsRef<Path>>(&self, path: P) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporterBuilder::new().from_path(path)),
            #[cfg(feature = "xml")]
            ExportFormat::Xml => Box::new(XmlExporterBuilder::new().from_path(path)),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            #[cfg(feature = "xml")]
            "xml" => Ok(ExportFormat::Xml),
            other => Err(BatchError::InvalidInput(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            #[cfg(feature = "xml")]
            ExportFormat::Xml => write!(f, "xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExportFormat;

    #[test]
    fn format_should_parse_known_names() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        #[cfg(feature = "xml")]
        assert_eq!("xml".parse::<ExportFormat>().unwrap(), ExportFormat::Xml);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn default_format_should_be_json() {
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
        assert_eq!(ExportFormat::default().to_string(), "json");
    }
}
