use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::{Career, Institute, QuizQuestion, RiasecFlags};

/// Degree-level keywords marking postgraduate-only catalog entries. Rows
/// whose name contains any of these (case-insensitive) are dropped at load
/// time; the scoring engine only ever sees the filtered catalog.
pub const POSTGRAD_KEYWORDS: [&str; 12] = [
    "Ph.D.",
    "Master",
    "M.Sc",
    "M.A.",
    "M.Tech",
    "M.Com",
    "MBA",
    "MCA",
    "PGDM",
    "Post Graduate Diploma",
    "M.D.",
    "M.S.",
];

pub fn is_postgraduate(name: &str) -> bool {
    let lower = name.to_lowercase();
    POSTGRAD_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}

/// Result of loading the career catalog: the filtered catalog plus how many
/// postgraduate rows were dropped (reported in verbose mode).
#[derive(Debug, Clone)]
pub struct CareerLoad {
    pub catalog: Vec<Career>,
    pub postgrad_filtered: usize,
}

#[derive(Debug, Deserialize)]
struct CareerRow {
    #[serde(rename = "career_name")]
    name: String,
    #[serde(rename = "R")]
    r: u8,
    #[serde(rename = "I")]
    i: u8,
    #[serde(rename = "A")]
    a: u8,
    #[serde(rename = "S")]
    s: u8,
    #[serde(rename = "E")]
    e: u8,
    #[serde(rename = "C")]
    c: u8,
    required_subjects: String,
    #[serde(rename = "Suitable_Interests")]
    suitable_interest: String,
}

impl CareerRow {
    fn into_career(self) -> Career {
        let required_subjects: BTreeSet<String> = self
            .required_subjects
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Career {
            name: self.name,
            flags: RiasecFlags::new([
                self.r == 1,
                self.i == 1,
                self.a == 1,
                self.s == 1,
                self.e == 1,
                self.c == 1,
            ]),
            required_subjects,
            suitable_interest: self.suitable_interest,
        }
    }
}

pub fn load_careers_from_reader<R: Read>(reader: R) -> Result<CareerLoad> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = Vec::new();
    let mut postgrad_filtered = 0;

    for record in csv_reader.deserialize::<CareerRow>() {
        let row = record.context("Failed to parse career row")?;
        if is_postgraduate(&row.name) {
            postgrad_filtered += 1;
            continue;
        }
        catalog.push(row.into_career());
    }

    Ok(CareerLoad {
        catalog,
        postgrad_filtered,
    })
}

pub fn load_careers<P: AsRef<Path>>(path: P) -> Result<CareerLoad> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open career catalog at {}", path.display()))?;
    load_careers_from_reader(file)
        .with_context(|| format!("Failed to load career catalog from {}", path.display()))
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Option_A")]
    option_a: String,
    #[serde(rename = "Option_B")]
    option_b: String,
    #[serde(rename = "Option_C")]
    option_c: String,
    #[serde(rename = "Option_D")]
    option_d: String,
    #[serde(rename = "Option_E")]
    option_e: String,
    #[serde(rename = "Option_F")]
    option_f: String,
}

pub fn load_questions_from_reader<R: Read>(reader: R) -> Result<Vec<QuizQuestion>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.deserialize::<QuestionRow>() {
        let row = record.context("Failed to parse question row")?;
        questions.push(QuizQuestion {
            prompt: row.question,
            options: [
                row.option_a,
                row.option_b,
                row.option_c,
                row.option_d,
                row.option_e,
                row.option_f,
            ],
        });
    }

    Ok(questions)
}

pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<QuizQuestion>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open question bank at {}", path.display()))?;
    load_questions_from_reader(file)
        .with_context(|| format!("Failed to load question bank from {}", path.display()))
}

#[derive(Debug, Deserialize)]
struct InstituteRow {
    #[serde(rename = "Institution")]
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Primary Fields")]
    primary_field: String,
}

pub fn load_institutes_from_reader<R: Read>(reader: R) -> Result<Vec<Institute>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut institutes = Vec::new();
    for record in csv_reader.deserialize::<InstituteRow>() {
        let row = record.context("Failed to parse institute row")?;
        institutes.push(Institute {
            name: row.name,
            kind: row.kind,
            city: row.city,
            state: row.state,
            primary_field: row.primary_field,
        });
    }

    Ok(institutes)
}

pub fn load_institutes<P: AsRef<Path>>(path: P) -> Result<Vec<Institute>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open institute directory at {}", path.display()))?;
    load_institutes_from_reader(file)
        .with_context(|| format!("Failed to load institute directory from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RiasecCode;
    use std::io::Cursor;

    const CAREERS_CSV: &str = "\
career_name,R,I,A,S,E,C,required_subjects,Suitable_Interests
B.Tech Mechanical Engineering,1,1,0,0,0,0,Physics; Mathematics,Engineering
M.Tech Structural Engineering,1,1,0,0,0,0,Physics; Mathematics,Engineering
B.A. Fine Arts,0,0,1,0,0,0,Art; Drawing,Arts
";

    #[test]
    fn test_load_careers_parses_rows() {
        let load = load_careers_from_reader(Cursor::new(CAREERS_CSV)).unwrap();
        assert_eq!(load.catalog.len(), 2);

        let mech = &load.catalog[0];
        assert_eq!(mech.name, "B.Tech Mechanical Engineering");
        assert!(mech.flags.matches(RiasecCode::Realistic));
        assert!(mech.flags.matches(RiasecCode::Investigative));
        assert!(!mech.flags.matches(RiasecCode::Artistic));
        assert_eq!(mech.suitable_interest, "Engineering");
    }

    #[test]
    fn test_load_careers_filters_postgrad() {
        let load = load_careers_from_reader(Cursor::new(CAREERS_CSV)).unwrap();
        assert_eq!(load.postgrad_filtered, 1);
        assert!(load
            .catalog
            .iter()
            .all(|c| !c.name.contains("M.Tech")));
    }

    #[test]
    fn test_required_subjects_split_and_trimmed() {
        let load = load_careers_from_reader(Cursor::new(CAREERS_CSV)).unwrap();
        let mech = &load.catalog[0];
        assert!(mech.required_subjects.contains("Physics"));
        assert!(mech.required_subjects.contains("Mathematics"));
        assert_eq!(mech.required_subjects.len(), 2);
    }

    #[test]
    fn test_is_postgraduate_case_insensitive() {
        assert!(is_postgraduate("mba in Finance"));
        assert!(is_postgraduate("Ph.D. Economics"));
        assert!(is_postgraduate("Post Graduate Diploma in Management"));
        assert!(!is_postgraduate("B.Sc. Physics"));
    }

    #[test]
    fn test_load_careers_propagates_io_errors() {
        let err = load_careers("./does-not-exist.csv").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.csv"));
    }

    #[test]
    fn test_load_questions() {
        let csv = "\
Question,Option_A,Option_B,Option_C,Option_D,Option_E,Option_F
Which task appeals most?,Repair a bike,Run an experiment,Sketch a poster,Tutor a friend,Pitch an idea,Organize records
";
        let questions = load_questions_from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Which task appeals most?");
        assert_eq!(questions[0].options[0], "Repair a bike");
        assert_eq!(questions[0].options[5], "Organize records");
    }

    #[test]
    fn test_load_institutes() {
        let csv = "\
Institution,Type,City,State,Primary Fields
IIT Madras,Public,Chennai,Tamil Nadu,Engineering
NID Ahmedabad,Public,Ahmedabad,Gujarat,Design
";
        let institutes = load_institutes_from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(institutes.len(), 2);
        assert_eq!(institutes[0].name, "IIT Madras");
        assert_eq!(institutes[1].primary_field, "Design");
    }

    #[test]
    fn test_malformed_flag_is_an_error() {
        let csv = "\
career_name,R,I,A,S,E,C,required_subjects,Suitable_Interests
Bad Row,yes,0,0,0,0,0,Physics,Engineering
";
        assert!(load_careers_from_reader(Cursor::new(csv)).is_err());
    }
}
