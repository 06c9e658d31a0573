use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scoring::{AnswerOption, RiasecCode};

/// Per-code alignment flags for one career, indexed in R-I-A-S-E-C order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecFlags([bool; 6]);

impl RiasecFlags {
    pub fn new(flags: [bool; 6]) -> Self {
        Self(flags)
    }

    pub fn matches(&self, code: RiasecCode) -> bool {
        self.0[code.index()]
    }

    /// Number of codes this career aligns with.
    pub fn matching_count(&self) -> usize {
        self.0.iter().filter(|f| **f).count()
    }
}

/// One row of the career catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub name: String,
    pub flags: RiasecFlags,
    /// Subjects the career expects, parsed from a semicolon-delimited field.
    /// Ordered set so display output is deterministic.
    pub required_subjects: BTreeSet<String>,
    /// The single general interest area this career belongs to. Institute
    /// lookup is keyed by the same tag.
    pub suitable_interest: String,
}

impl Career {
    /// Semicolon-joined subject list for display.
    pub fn required_subjects_display(&self) -> String {
        self.required_subjects
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// One personality quiz question: a prompt and six options, one per code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: [String; 6],
}

impl QuizQuestion {
    pub fn option_text(&self, option: AnswerOption) -> &str {
        &self.options[option as usize]
    }
}

/// One row of the institute directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institute {
    pub name: String,
    pub kind: String,
    pub city: String,
    pub state: String,
    /// Interest-area tag the institute serves; matched against careers'
    /// `suitable_interest`.
    pub primary_field: String,
}

impl Institute {
    /// Short location line in the form "Type, City, State".
    pub fn location_line(&self) -> String {
        format!("{}, {}, {}", self.kind, self.city, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_match_by_code() {
        let flags = RiasecFlags::new([true, false, false, true, false, false]);
        assert!(flags.matches(RiasecCode::Realistic));
        assert!(flags.matches(RiasecCode::Social));
        assert!(!flags.matches(RiasecCode::Artistic));
        assert_eq!(flags.matching_count(), 2);
    }

    #[test]
    fn test_question_option_text() {
        let question = QuizQuestion {
            prompt: "Pick one".to_string(),
            options: [
                "fix".to_string(),
                "study".to_string(),
                "paint".to_string(),
                "teach".to_string(),
                "sell".to_string(),
                "file".to_string(),
            ],
        };
        assert_eq!(question.option_text(AnswerOption::A), "fix");
        assert_eq!(question.option_text(AnswerOption::F), "file");
    }

    #[test]
    fn test_required_subjects_display_sorted() {
        let career = Career {
            name: "B.Sc. Physics".to_string(),
            flags: RiasecFlags::default(),
            required_subjects: ["Physics", "Mathematics"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            suitable_interest: "Science".to_string(),
        };
        assert_eq!(career.required_subjects_display(), "Mathematics; Physics");
    }

    #[test]
    fn test_institute_location_line() {
        let institute = Institute {
            name: "IIT Madras".to_string(),
            kind: "Public".to_string(),
            city: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            primary_field: "Engineering".to_string(),
        };
        assert_eq!(institute.location_line(), "Public, Chennai, Tamil Nadu");
    }
}
