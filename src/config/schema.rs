use serde::{Deserialize, Serialize};

pub const DEFAULT_QUIZ_LENGTH: usize = 15;

/// Main configuration.
///
/// Points at the CSV data files and sets how many questions one quiz run
/// asks.
///
/// Example YAML:
/// ```yaml
/// data:
///   careers: /home/me/pathfinder/careers.csv
///   questions: /home/me/pathfinder/questions.csv
///   institutes: /home/me/pathfinder/institutes.csv
/// quiz_length: 15
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub data: DataConfig,

    /// Questions sampled per quiz run (default: 15)
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,
}

/// Paths to the CSV data files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Career catalog (career_name, R..C flags, required_subjects,
    /// Suitable_Interests)
    pub careers: String,

    /// Question bank (Question, Option_A..Option_F)
    pub questions: String,

    /// Institute directory (Institution, Type, City, State, Primary Fields).
    /// Optional; the institutes stage shows an empty state without it.
    #[serde(default)]
    pub institutes: Option<String>,
}

fn default_quiz_length() -> usize {
    DEFAULT_QUIZ_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
data:
  careers: careers.csv
  questions: questions.csv
  institutes: institutes.csv
quiz_length: 10
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.data.careers, "careers.csv");
        assert_eq!(config.data.institutes.as_deref(), Some("institutes.csv"));
        assert_eq!(config.quiz_length, 10);
    }

    #[test]
    fn test_quiz_length_defaults_to_15() {
        let yaml = r#"
data:
  careers: careers.csv
  questions: questions.csv
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.quiz_length, 15);
        assert!(config.data.institutes.is_none());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            data: DataConfig {
                careers: "careers.csv".to_string(),
                questions: "questions.csv".to_string(),
                institutes: None,
            },
            quiz_length: 15,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
