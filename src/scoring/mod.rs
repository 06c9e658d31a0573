pub mod engine;
pub mod tally;
pub mod validation;

pub use engine::{rank, ScoredCareer, INTEREST_WEIGHT, RIASEC_WEIGHT, SUBJECT_WEIGHT};
pub use tally::{AnswerOption, AnswerTally, RiasecCode};
pub use validation::validate_catalog;
