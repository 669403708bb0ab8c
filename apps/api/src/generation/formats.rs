use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Document format a report is generated in. Drives model choice, prompt and
/// document template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    College,
    Ieee,
    Simple,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::College, ReportFormat::Ieee, ReportFormat::Simple];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::College => "college",
            ReportFormat::Ieee => "ieee",
            ReportFormat::Simple => "simple",
        }
    }

    /// OpenRouter model id used to generate this format.
    pub fn model(self) -> &'static str {
        match self {
            ReportFormat::College => "mistralai/mistral-7b-instruct",
            ReportFormat::Ieee => "meta-llama/llama-3.1-8b-instruct",
            ReportFormat::Simple => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ReportFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| AppError::Validation(format!("Unknown report format '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("college".parse::<ReportFormat>().unwrap(), ReportFormat::College);
        assert_eq!(" IEEE ".parse::<ReportFormat>().unwrap(), ReportFormat::Ieee);
        assert_eq!("Simple".parse::<ReportFormat>().unwrap(), ReportFormat::Simple);
    }

    #[test]
    fn test_unknown_format_is_validation_error() {
        let err = "thesis".parse::<ReportFormat>().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("thesis")));
    }

    #[test]
    fn test_model_per_format() {
        assert_eq!(ReportFormat::College.model(), "mistralai/mistral-7b-instruct");
        assert_eq!(ReportFormat::Ieee.model(), "meta-llama/llama-3.1-8b-instruct");
        assert_eq!(ReportFormat::Simple.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in ReportFormat::ALL {
            assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), format);
        }
    }
}
