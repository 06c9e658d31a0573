use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// The six RIASEC personality codes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecCode {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCode {
    pub const ALL: [RiasecCode; 6] = [
        RiasecCode::Realistic,
        RiasecCode::Investigative,
        RiasecCode::Artistic,
        RiasecCode::Social,
        RiasecCode::Enterprising,
        RiasecCode::Conventional,
    ];

    /// Single-letter form used in catalog column headers (R, I, A, S, E, C).
    pub fn letter(&self) -> char {
        match self {
            RiasecCode::Realistic => 'R',
            RiasecCode::Investigative => 'I',
            RiasecCode::Artistic => 'A',
            RiasecCode::Social => 'S',
            RiasecCode::Enterprising => 'E',
            RiasecCode::Conventional => 'C',
        }
    }

    /// Index into per-code arrays (tally counts, career flags).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A quiz option letter. Each question offers six options, one per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 6] = [
        AnswerOption::A,
        AnswerOption::B,
        AnswerOption::C,
        AnswerOption::D,
        AnswerOption::E,
        AnswerOption::F,
    ];

    pub fn parse(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(AnswerOption::A),
            'B' => Ok(AnswerOption::B),
            'C' => Ok(AnswerOption::C),
            'D' => Ok(AnswerOption::D),
            'E' => Ok(AnswerOption::E),
            'F' => Ok(AnswerOption::F),
            other => bail!("Answer must be a letter A-F, got '{}'", other),
        }
    }

    /// Parse a whole answer string ("ABCAFD...") into one option per question.
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>> {
        s.trim().chars().map(Self::parse).collect()
    }

    /// The personality code this option maps onto. Fixed table:
    /// A->R, B->I, C->A, D->S, E->E, F->C.
    pub fn code(&self) -> RiasecCode {
        match self {
            AnswerOption::A => RiasecCode::Realistic,
            AnswerOption::B => RiasecCode::Investigative,
            AnswerOption::C => RiasecCode::Artistic,
            AnswerOption::D => RiasecCode::Social,
            AnswerOption::E => RiasecCode::Enterprising,
            AnswerOption::F => RiasecCode::Conventional,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            AnswerOption::A => 'A',
            AnswerOption::B => 'B',
            AnswerOption::C => 'C',
            AnswerOption::D => 'D',
            AnswerOption::E => 'E',
            AnswerOption::F => 'F',
        }
    }
}

/// Per-code answer counts for one completed quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTally {
    counts: [u32; 6],
}

impl AnswerTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from an ordered answer sequence, one option per question.
    pub fn from_answers(answers: &[AnswerOption]) -> Self {
        let mut tally = Self::new();
        for answer in answers {
            tally.record(answer.code());
        }
        tally
    }

    pub fn record(&mut self, code: RiasecCode) {
        self.counts[code.index()] += 1;
    }

    pub fn count(&self, code: RiasecCode) -> u32 {
        self.counts[code.index()]
    }

    /// Sum over all codes. Equals the number of answers recorded.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
