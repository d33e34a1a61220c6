use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Settings read from an rc file.
///
/// Example YAML:
/// ```yaml
/// scores:
///   - "14 / 100 / 98 / 100 / (1, 0, 6)"
///   - "28 / 100 / 97 / 100 / (1, 2, 6)"
/// percentage: true
/// diff: true
/// format: json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Score strings used when none are given on the command line
    #[serde(default)]
    pub scores: Vec<String>,

    /// Report percentages instead of fractions
    #[serde(default)]
    pub percentage: bool,

    /// Show rows after the first as differences from the first
    #[serde(default)]
    pub diff: bool,

    /// Output format (default: text)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scores:
  - "14 / 100 / 98 / 100 / (1, 0, 6)"
  - "28/100/97/100/(1,2,6)"
percentage: true
diff: true
format: tsv
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.scores.len(), 2);
        assert!(config.percentage);
        assert!(config.diff);
        assert_eq!(config.format, Some(OutputFormat::Tsv));
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
percentage: true
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.scores.is_empty());
        assert!(config.percentage);
        assert!(!config.diff);
        assert!(config.format.is_none());
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_json_config_parse() {
        let json = r#"{"scores": ["14/100/98/100/(1,0,6)"], "format": "json"}"#;
        let config: Config = serde_saphyr::from_str(json).unwrap();
        assert_eq!(config.scores, vec!["14/100/98/100/(1,0,6)".to_string()]);
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "percentag: true\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            scores: vec!["14 / 100 / 98 / 100 / (1, 0, 6)".to_string()],
            percentage: true,
            diff: false,
            format: Some(OutputFormat::Text),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
