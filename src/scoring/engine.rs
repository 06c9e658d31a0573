use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::Serialize;

use super::tally::{AnswerTally, RiasecCode};
use crate::catalog::Career;

/// Fixed component weights. The final score is always the weighted sum of
/// the three component scores, each in [0,100].
pub const RIASEC_WEIGHT: f64 = 0.5;
pub const SUBJECT_WEIGHT: f64 = 0.3;
pub const INTEREST_WEIGHT: f64 = 0.2;

/// A career with its component and final scores for one quiz run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCareer {
    pub career: Career,
    pub riasec_score: f64,
    pub subject_score: f64,
    pub interest_score: f64,
    pub final_score: f64,
}

/// Score every career in the catalog and return them sorted by final score,
/// highest first. Ties keep catalog order (the sort is stable), so the same
/// inputs always produce the same ranking.
///
/// `total_questions` must be positive. `selected_subjects` is expected to be
/// non-empty (callers validate that upstream), but an empty set is defined
/// as subject_score 0 for every career rather than an error.
pub fn rank(
    catalog: &[Career],
    tally: &AnswerTally,
    selected_subjects: &HashSet<String>,
    selected_interests: &HashSet<String>,
    total_questions: usize,
) -> Result<Vec<ScoredCareer>> {
    if total_questions == 0 {
        bail!("total_questions must be positive");
    }

    let mut scored: Vec<ScoredCareer> = catalog
        .iter()
        .map(|career| {
            score_career(
                career,
                tally,
                selected_subjects,
                selected_interests,
                total_questions,
            )
        })
        .collect();

    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(scored)
}

fn score_career(
    career: &Career,
    tally: &AnswerTally,
    selected_subjects: &HashSet<String>,
    selected_interests: &HashSet<String>,
    total_questions: usize,
) -> ScoredCareer {
    let riasec_score = riasec_score(career, tally, total_questions);
    let subject_score = subject_score(career, selected_subjects);
    let interest_score = interest_score(career, selected_interests);
    let final_score = RIASEC_WEIGHT * riasec_score
        + SUBJECT_WEIGHT * subject_score
        + INTEREST_WEIGHT * interest_score;

    ScoredCareer {
        career: career.clone(),
        riasec_score,
        subject_score,
        interest_score,
        final_score,
    }
}

/// Fraction of all answered questions that pointed at codes this career
/// values, as a percentage. Normalized by total questions answered, not by
/// the number of flagged codes, so a career matching several codes can
/// outscore one matching a single code.
fn riasec_score(career: &Career, tally: &AnswerTally, total_questions: usize) -> f64 {
    let matched: u32 = RiasecCode::ALL
        .iter()
        .filter(|code| career.flags.matches(**code))
        .map(|code| tally.count(*code))
        .sum();
    (matched as f64 / total_questions as f64) * 100.0
}

/// Share of the user's selected subjects covered by the career's required
/// set. The denominator is the selection size, not the requirement size: a
/// career requiring extra subjects the user never picked still scores 100
/// when it covers everything the user chose.
fn subject_score(career: &Career, selected_subjects: &HashSet<String>) -> f64 {
    if selected_subjects.is_empty() {
        return 0.0;
    }
    let matched = career
        .required_subjects
        .iter()
        .filter(|subject| selected_subjects.contains(subject.as_str()))
        .count();
    (matched as f64 / selected_subjects.len() as f64) * 100.0
}

/// Binary: 100 when the career's interest tag is among the user's selected
/// interest areas, otherwise 0. Never an intermediate value.
fn interest_score(career: &Career, selected_interests: &HashSet<String>) -> f64 {
    if selected_interests.contains(&career.suitable_interest) {
        100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RiasecFlags;
    use crate::scoring::AnswerOption;

    fn sample_career(name: &str, flags: [bool; 6], subjects: &[&str], interest: &str) -> Career {
        Career {
            name: name.to_string(),
            flags: RiasecFlags::new(flags),
            required_subjects: subjects.iter().map(|s| s.to_string()).collect(),
            suitable_interest: interest.to_string(),
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Tally {R:5}, 5 questions, career flagging only R -> riasec 100.
    #[test]
    fn test_riasec_full_match() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A; 5]);
        let career = sample_career(
            "Mechanic",
            [true, false, false, false, false, false],
            &["Physics"],
            "Engineering",
        );
        let ranked = rank(&[career], &tally, &set(&["Physics"]), &set(&[]), 5).unwrap();
        assert_eq!(ranked[0].riasec_score, 100.0);
    }

    #[test]
    fn test_riasec_normalized_by_total_questions() {
        // 3 of 6 answers point at R; career flags R only.
        let answers = vec![
            AnswerOption::A,
            AnswerOption::A,
            AnswerOption::A,
            AnswerOption::B,
            AnswerOption::C,
            AnswerOption::D,
        ];
        let tally = AnswerTally::from_answers(&answers);
        let career = sample_career(
            "Mechanic",
            [true, false, false, false, false, false],
            &["Physics"],
            "Engineering",
        );
        let ranked = rank(&[career], &tally, &set(&["Physics"]), &set(&[]), 6).unwrap();
        assert_eq!(ranked[0].riasec_score, 50.0);
    }

    #[test]
    fn test_riasec_monotonic_in_flag_count() {
        // Same tally; a career flagging more codes never scores lower.
        let answers = vec![
            AnswerOption::A,
            AnswerOption::B,
            AnswerOption::C,
            AnswerOption::D,
        ];
        let tally = AnswerTally::from_answers(&answers);
        let one_code = sample_career(
            "One",
            [true, false, false, false, false, false],
            &["Physics"],
            "X",
        );
        let two_codes = sample_career(
            "Two",
            [true, true, false, false, false, false],
            &["Physics"],
            "X",
        );
        let ranked = rank(
            &[one_code, two_codes],
            &tally,
            &set(&["Physics"]),
            &set(&[]),
            4,
        )
        .unwrap();
        let one = ranked.iter().find(|s| s.career.name == "One").unwrap();
        let two = ranked.iter().find(|s| s.career.name == "Two").unwrap();
        assert!(two.riasec_score >= one.riasec_score);
        assert_eq!(one.riasec_score, 25.0);
        assert_eq!(two.riasec_score, 50.0);
    }

    /// Selected {Physics, Chemistry}, required {Physics, Biology} ->
    /// intersection 1, subject_score 50.
    #[test]
    fn test_subject_score_intersection_over_selection_size() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A]);
        let career = sample_career(
            "Lab Tech",
            [true, false, false, false, false, false],
            &["Physics", "Biology"],
            "Science",
        );
        let ranked = rank(
            &[career],
            &tally,
            &set(&["Physics", "Chemistry"]),
            &set(&[]),
            1,
        )
        .unwrap();
        assert_eq!(ranked[0].subject_score, 50.0);
    }

    #[test]
    fn test_subject_score_100_when_requirements_superset_of_selection() {
        // The career requires more than the user picked; full coverage of the
        // selection still scores 100 because the denominator is the selection.
        let tally = AnswerTally::from_answers(&[AnswerOption::A]);
        let career = sample_career(
            "Engineer",
            [true, false, false, false, false, false],
            &["Physics", "Mathematics", "Chemistry"],
            "Engineering",
        );
        let ranked = rank(&[career], &tally, &set(&["Physics"]), &set(&[]), 1).unwrap();
        assert_eq!(ranked[0].subject_score, 100.0);
    }

    #[test]
    fn test_subject_score_zero_on_empty_selection() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A]);
        let career = sample_career(
            "Engineer",
            [true, false, false, false, false, false],
            &["Physics"],
            "Engineering",
        );
        let ranked = rank(&[career], &tally, &set(&[]), &set(&[]), 1).unwrap();
        assert_eq!(ranked[0].subject_score, 0.0);
    }

    #[test]
    fn test_interest_score_binary() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A]);
        let engineering = sample_career(
            "Engineer",
            [true, false, false, false, false, false],
            &["Physics"],
            "Engineering",
        );
        let law = sample_career(
            "Lawyer",
            [false, false, false, true, false, false],
            &["Legal Studies"],
            "Law",
        );
        let ranked = rank(
            &[engineering, law],
            &tally,
            &set(&["Physics"]),
            &set(&["Engineering"]),
            1,
        )
        .unwrap();
        let eng = ranked.iter().find(|s| s.career.name == "Engineer").unwrap();
        let law = ranked.iter().find(|s| s.career.name == "Lawyer").unwrap();
        assert_eq!(eng.interest_score, 100.0);
        assert_eq!(law.interest_score, 0.0);
    }

    #[test]
    fn test_final_score_is_weighted_sum_and_bounded() {
        let answers = vec![AnswerOption::A, AnswerOption::A, AnswerOption::B];
        let tally = AnswerTally::from_answers(&answers);
        let careers = vec![
            sample_career(
                "Engineer",
                [true, true, false, false, false, false],
                &["Physics", "Mathematics"],
                "Engineering",
            ),
            sample_career(
                "Artist",
                [false, false, true, false, false, false],
                &["Art"],
                "Arts",
            ),
        ];
        let ranked = rank(
            &careers,
            &tally,
            &set(&["Physics", "Chemistry"]),
            &set(&["Engineering"]),
            3,
        )
        .unwrap();
        for scored in &ranked {
            let expected = RIASEC_WEIGHT * scored.riasec_score
                + SUBJECT_WEIGHT * scored.subject_score
                + INTEREST_WEIGHT * scored.interest_score;
            assert_eq!(scored.final_score, expected);
            assert!(scored.final_score >= 0.0 && scored.final_score <= 100.0);
        }
    }

    #[test]
    fn test_ranking_sorted_descending() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A; 4]);
        let careers = vec![
            sample_career(
                "Low",
                [false, false, true, false, false, false],
                &["Art"],
                "Arts",
            ),
            sample_career(
                "High",
                [true, false, false, false, false, false],
                &["Physics"],
                "Engineering",
            ),
        ];
        let ranked = rank(
            &careers,
            &tally,
            &set(&["Physics"]),
            &set(&["Engineering"]),
            4,
        )
        .unwrap();
        assert_eq!(ranked[0].career.name, "High");
        for pair in ranked.windows(2) {
            assert!(pair[0].final_score >= pair[1].final_score);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A; 2]);
        // Identical scores for both careers.
        let careers = vec![
            sample_career(
                "First",
                [true, false, false, false, false, false],
                &["Physics"],
                "Engineering",
            ),
            sample_career(
                "Second",
                [true, false, false, false, false, false],
                &["Physics"],
                "Engineering",
            ),
        ];
        let ranked = rank(
            &careers,
            &tally,
            &set(&["Physics"]),
            &set(&["Engineering"]),
            2,
        )
        .unwrap();
        assert_eq!(ranked[0].career.name, "First");
        assert_eq!(ranked[1].career.name, "Second");
    }

    #[test]
    fn test_idempotent_over_same_inputs() {
        let tally = AnswerTally::from_answers(&[
            AnswerOption::A,
            AnswerOption::C,
            AnswerOption::E,
            AnswerOption::F,
        ]);
        let careers = vec![
            sample_career(
                "Engineer",
                [true, true, false, false, false, true],
                &["Physics", "Mathematics"],
                "Engineering",
            ),
            sample_career(
                "Designer",
                [false, false, true, false, true, false],
                &["Design", "Art"],
                "Design",
            ),
        ];
        let subjects = set(&["Physics", "Art"]);
        let interests = set(&["Design"]);

        let first = rank(&careers, &tally, &subjects, &interests, 4).unwrap();
        let second = rank(&careers, &tally, &subjects, &interests, 4).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.career.name, b.career.name);
            assert_eq!(a.final_score, b.final_score);
        }
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let tally = AnswerTally::from_answers(&[AnswerOption::A]);
        let ranked = rank(&[], &tally, &set(&["Physics"]), &set(&["X"]), 1).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_zero_total_questions_rejected() {
        let tally = AnswerTally::new();
        let result = rank(&[], &tally, &set(&["Physics"]), &set(&[]), 0);
        assert!(result.is_err());
    }
}
