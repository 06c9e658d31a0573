use rand::seq::SliceRandom;

use crate::catalog::QuizQuestion;

/// Draw `count` questions from the bank uniformly, without replacement. The
/// whole bank is returned (in random order) when it holds fewer than `count`
/// questions. Sampling happens once per session; scoring itself is
/// deterministic over the frozen question set.
pub fn sample_questions(bank: &[QuizQuestion], count: usize) -> Vec<QuizQuestion> {
    let mut rng = rand::thread_rng();
    bank.choose_multiple(&mut rng, count).cloned().collect()
}
