//! Output configuration

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// How cycles are printed
    #[serde(default)]
    pub format: OutputFormat,
}

/// Presentation of a cycle
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `YYOO`
    Short,
    /// `YYOO (effective: ...; expires: ...)`
    #[default]
    Long,
    /// Pretty-printed JSON summary
    Json,
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(OutputFormat::Short),
            "long" => Ok(OutputFormat::Long),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ValidationError::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Short => "short",
            OutputFormat::Long => "long",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default_is_long() {
        assert_eq!(OutputConfig::default().format, OutputFormat::Long);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("short".parse::<OutputFormat>().unwrap(), OutputFormat::Short);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ValidationError::UnknownOutputFormat(_))
        ));
    }

    #[test]
    fn test_output_format_display_roundtrips() {
        for format in [OutputFormat::Short, OutputFormat::Long, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_output_config_deserialization() {
        let config: OutputConfig = serde_json::from_str(r#"{ "format": "short" }"#).unwrap();
        assert_eq!(config.format, OutputFormat::Short);
    }
}
