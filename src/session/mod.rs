pub mod sampler;

pub use sampler::sample_questions;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::catalog::{Career, QuizQuestion};
use crate::scoring::{rank, AnswerOption, AnswerTally, ScoredCareer};

/// How many ranked careers the results and institutes screens surface.
pub const TOP_RESULTS: usize = 3;

/// Where the wizard currently is. Transitions only happen through
/// [`Session::advance`] and [`Session::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preferences,
    Quiz { index: usize },
    Results,
    Institutes,
}

/// Why a forward transition was refused. Surfaced to the user as-is; the
/// stage does not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionBlock {
    NoSubjectsSelected,
    NoInterestsSelected,
    QuestionUnanswered,
    ScoringFailed(String),
}

impl TransitionBlock {
    pub fn message(&self) -> String {
        match self {
            TransitionBlock::NoSubjectsSelected => {
                "Select at least one subject to continue".to_string()
            }
            TransitionBlock::NoInterestsSelected => {
                "Select at least one interest area to continue".to_string()
            }
            TransitionBlock::QuestionUnanswered => {
                "Answer the question to continue".to_string()
            }
            TransitionBlock::ScoringFailed(reason) => format!("Scoring failed: {}", reason),
        }
    }
}

/// All state for one run of the wizard: the frozen question sample, the
/// user's selections and answers, and the ranking once computed. Created at
/// session start, mutated only through its methods, discarded on restart.
#[derive(Debug, Clone)]
pub struct Session {
    stage: Stage,
    selected_subjects: Vec<String>,
    selected_interests: Vec<String>,
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<AnswerOption>>,
    ranking: Option<Vec<ScoredCareer>>,
}

impl Session {
    /// Start a fresh session, sampling `quiz_length` questions from the bank.
    pub fn new(bank: &[QuizQuestion], quiz_length: usize) -> Result<Self> {
        if bank.is_empty() {
            bail!("Question bank is empty");
        }
        if quiz_length == 0 {
            bail!("quiz_length must be positive");
        }
        let questions = sample_questions(bank, quiz_length);
        let answers = vec![None; questions.len()];
        Ok(Self {
            stage: Stage::Preferences,
            selected_subjects: Vec::new(),
            selected_interests: Vec::new(),
            questions,
            answers,
            ranking: None,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen, when the wizard is in the quiz stage.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.stage {
            Stage::Quiz { index } => self.questions.get(index),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<AnswerOption> {
        match self.stage {
            Stage::Quiz { index } => self.answers.get(index).copied().flatten(),
            _ => None,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Record the answer for the question on screen. Ignored outside the
    /// quiz stage.
    pub fn set_answer(&mut self, option: AnswerOption) {
        if let Stage::Quiz { index } = self.stage {
            if let Some(slot) = self.answers.get_mut(index) {
                *slot = Some(option);
            }
        }
    }

    pub fn selected_subjects(&self) -> &[String] {
        &self.selected_subjects
    }

    pub fn selected_interests(&self) -> &[String] {
        &self.selected_interests
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.selected_subjects.iter().any(|s| s == subject)
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.selected_interests.iter().any(|s| s == interest)
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        if let Some(pos) = self.selected_subjects.iter().position(|s| s == subject) {
            self.selected_subjects.remove(pos);
        } else {
            self.selected_subjects.push(subject.to_string());
        }
    }

    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.selected_interests.iter().position(|s| s == interest) {
            self.selected_interests.remove(pos);
        } else {
            self.selected_interests.push(interest.to_string());
        }
    }

    /// Tally of the answers given so far.
    pub fn tally(&self) -> AnswerTally {
        let answered: Vec<AnswerOption> = self.answers.iter().filter_map(|a| *a).collect();
        AnswerTally::from_answers(&answered)
    }

    /// Move forward one stage. Guards: the preferences stage requires at
    /// least one subject and one interest; each quiz question must be
    /// answered before the next. Entering the results stage runs the engine
    /// over the session inputs and stores the ranking.
    pub fn advance(&mut self, catalog: &[Career]) -> Result<(), TransitionBlock> {
        match self.stage {
            Stage::Preferences => {
                if self.selected_subjects.is_empty() {
                    return Err(TransitionBlock::NoSubjectsSelected);
                }
                if self.selected_interests.is_empty() {
                    return Err(TransitionBlock::NoInterestsSelected);
                }
                self.stage = Stage::Quiz { index: 0 };
                Ok(())
            }
            Stage::Quiz { index } => {
                if self.answers.get(index).copied().flatten().is_none() {
                    return Err(TransitionBlock::QuestionUnanswered);
                }
                if index + 1 < self.questions.len() {
                    self.stage = Stage::Quiz { index: index + 1 };
                } else {
                    self.ranking = Some(self.score(catalog)?);
                    self.stage = Stage::Results;
                }
                Ok(())
            }
            Stage::Results => {
                self.stage = Stage::Institutes;
                Ok(())
            }
            Stage::Institutes => Ok(()),
        }
    }

    /// Move back one stage. Answers and selections are retained. Returns
    /// false when already at the first stage.
    pub fn back(&mut self) -> bool {
        match self.stage {
            Stage::Preferences => false,
            Stage::Quiz { index: 0 } => {
                self.stage = Stage::Preferences;
                true
            }
            Stage::Quiz { index } => {
                self.stage = Stage::Quiz { index: index - 1 };
                true
            }
            Stage::Results => {
                self.stage = Stage::Quiz {
                    index: self.questions.len() - 1,
                };
                true
            }
            Stage::Institutes => {
                self.stage = Stage::Results;
                true
            }
        }
    }

    fn score(&self, catalog: &[Career]) -> Result<Vec<ScoredCareer>, TransitionBlock> {
        let subjects: HashSet<String> = self.selected_subjects.iter().cloned().collect();
        let interests: HashSet<String> = self.selected_interests.iter().cloned().collect();
        rank(
            catalog,
            &self.tally(),
            &subjects,
            &interests,
            self.questions.len(),
        )
        .map_err(|e| TransitionBlock::ScoringFailed(e.to_string()))
    }

    /// The ranking computed on entering the results stage, highest first.
    pub fn ranking(&self) -> Option<&[ScoredCareer]> {
        self.ranking.as_deref()
    }

    pub fn top_careers(&self) -> &[ScoredCareer] {
        match &self.ranking {
            Some(ranking) => &ranking[..ranking.len().min(TOP_RESULTS)],
            None => &[],
        }
    }

    /// Distinct interest fields of the top careers, in rank order. Drives
    /// the institutes screen.
    pub fn top_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        for scored in self.top_careers() {
            if !fields.contains(&scored.career.suitable_interest) {
                fields.push(scored.career.suitable_interest.clone());
            }
        }
        fields
    }
}
