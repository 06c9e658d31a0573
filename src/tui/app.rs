use std::time::Instant;

use anyhow::Result;
use ratatui::widgets::ListState;

use crate::catalog::{interest_areas, Career, Institute, QuizQuestion, SUBJECT_DOMAINS};
use crate::scoring::AnswerOption;
use crate::session::{Session, Stage};

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Which panel of the preferences screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefPanel {
    Domains,
    Subjects,
    Interests,
}

pub struct App {
    pub session: Session,
    pub catalog: Vec<Career>,
    pub institutes: Vec<Institute>,
    /// Distinct interest areas from the catalog, for the interests panel.
    pub interests: Vec<String>,
    question_bank: Vec<QuizQuestion>,
    quiz_length: usize,
    pub input_mode: InputMode,
    pub pref_panel: PrefPanel,
    pub domain_state: ListState,
    pub subject_state: ListState,
    pub interest_state: ListState,
    pub option_state: ListState,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub verbose: bool,
}

impl App {
    pub fn new(
        catalog: Vec<Career>,
        institutes: Vec<Institute>,
        question_bank: Vec<QuizQuestion>,
        quiz_length: usize,
        verbose: bool,
    ) -> Result<Self> {
        let session = Session::new(&question_bank, quiz_length)?;
        let interests = interest_areas(&catalog);

        let mut domain_state = ListState::default();
        domain_state.select(Some(0));
        let mut subject_state = ListState::default();
        subject_state.select(Some(0));
        let mut interest_state = ListState::default();
        if !interests.is_empty() {
            interest_state.select(Some(0));
        }
        let mut option_state = ListState::default();
        option_state.select(Some(0));

        Ok(Self {
            session,
            catalog,
            institutes,
            interests,
            question_bank,
            quiz_length,
            input_mode: InputMode::Normal,
            pref_panel: PrefPanel::Domains,
            domain_state,
            subject_state,
            interest_state,
            option_state,
            flash_message: None,
            should_quit: false,
            verbose,
        })
    }

    /// Name of the domain the cursor is on.
    pub fn current_domain(&self) -> &'static str {
        let idx = self.domain_state.selected().unwrap_or(0);
        SUBJECT_DOMAINS
            .get(idx)
            .map(|(name, _)| *name)
            .unwrap_or(SUBJECT_DOMAINS[0].0)
    }

    /// Subjects offered by the domain the cursor is on.
    pub fn visible_subjects(&self) -> &'static [&'static str] {
        let idx = self.domain_state.selected().unwrap_or(0);
        SUBJECT_DOMAINS
            .get(idx)
            .map(|(_, subjects)| *subjects)
            .unwrap_or(SUBJECT_DOMAINS[0].1)
    }

    fn move_list(state: &mut ListState, len: usize, down: bool) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if down {
                    if i >= len - 1 {
                        0
                    } else {
                        i + 1
                    }
                } else if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    /// Move the cursor of whichever list the current stage shows.
    pub fn move_cursor(&mut self, down: bool) {
        match self.session.stage() {
            Stage::Preferences => match self.pref_panel {
                PrefPanel::Domains => {
                    Self::move_list(&mut self.domain_state, SUBJECT_DOMAINS.len(), down);
                    // Subject list changes with the domain; reset its cursor.
                    self.subject_state.select(Some(0));
                }
                PrefPanel::Subjects => {
                    let len = self.visible_subjects().len();
                    Self::move_list(&mut self.subject_state, len, down);
                }
                PrefPanel::Interests => {
                    Self::move_list(&mut self.interest_state, self.interests.len(), down);
                }
            },
            Stage::Quiz { .. } => {
                Self::move_list(&mut self.option_state, AnswerOption::ALL.len(), down);
            }
            Stage::Results | Stage::Institutes => {}
        }
    }

    /// Cycle focus across the preferences panels.
    pub fn cycle_panel(&mut self) {
        self.pref_panel = match self.pref_panel {
            PrefPanel::Domains => PrefPanel::Subjects,
            PrefPanel::Subjects => PrefPanel::Interests,
            PrefPanel::Interests => PrefPanel::Domains,
        };
    }

    /// Toggle the item under the cursor (subject or interest); on the quiz
    /// screen, pick the option under the cursor.
    pub fn toggle_current(&mut self) {
        match self.session.stage() {
            Stage::Preferences => match self.pref_panel {
                PrefPanel::Domains => {}
                PrefPanel::Subjects => {
                    if let Some(idx) = self.subject_state.selected() {
                        if let Some(subject) = self.visible_subjects().get(idx) {
                            self.session.toggle_subject(subject);
                        }
                    }
                }
                PrefPanel::Interests => {
                    if let Some(idx) = self.interest_state.selected() {
                        if let Some(interest) = self.interests.get(idx).cloned() {
                            self.session.toggle_interest(&interest);
                        }
                    }
                }
            },
            Stage::Quiz { .. } => {
                if let Some(idx) = self.option_state.selected() {
                    self.session.set_answer(AnswerOption::ALL[idx]);
                }
            }
            Stage::Results | Stage::Institutes => {}
        }
    }

    /// Advance the wizard. A refused transition becomes a flash message and
    /// the stage stays put.
    pub fn advance(&mut self) {
        // On the quiz screen Enter both picks the highlighted option and
        // moves on, so an unanswered question takes a single keypress.
        if matches!(self.session.stage(), Stage::Quiz { .. }) {
            self.toggle_current();
        }
        match self.session.advance(&self.catalog) {
            Ok(()) => self.sync_quiz_cursor(),
            Err(block) => self.show_flash(block.message()),
        }
    }

    pub fn go_back(&mut self) {
        if self.session.back() {
            self.sync_quiz_cursor();
        }
    }

    /// Point the option cursor at the stored answer when (re)entering a
    /// quiz question.
    fn sync_quiz_cursor(&mut self) {
        if let Stage::Quiz { .. } = self.session.stage() {
            let idx = self
                .session
                .current_answer()
                .map(|answer| answer as usize)
                .unwrap_or(0);
            self.option_state.select(Some(idx));
        }
    }

    /// Throw the session away and start over with a fresh question sample.
    pub fn restart(&mut self) {
        match Session::new(&self.question_bank, self.quiz_length) {
            Ok(session) => {
                self.session = session;
                self.pref_panel = PrefPanel::Domains;
                self.domain_state.select(Some(0));
                self.subject_state.select(Some(0));
                if !self.interests.is_empty() {
                    self.interest_state.select(Some(0));
                }
                self.option_state.select(Some(0));
                self.show_flash("Started over with a fresh quiz".to_string());
            }
            Err(e) => self.show_flash(format!("Restart failed: {}", e)),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
