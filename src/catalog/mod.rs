pub mod domains;
pub mod loader;
pub mod types;

pub use domains::{subjects_for_domain, SUBJECT_DOMAINS};
pub use loader::{
    is_postgraduate, load_careers, load_careers_from_reader, load_institutes,
    load_institutes_from_reader, load_questions, load_questions_from_reader, CareerLoad,
    POSTGRAD_KEYWORDS,
};
pub use types::{Career, Institute, QuizQuestion, RiasecFlags};

/// Distinct interest areas present in the catalog, sorted, for the
/// preferences screen.
pub fn interest_areas(catalog: &[Career]) -> Vec<String> {
    let mut areas: Vec<String> = catalog
        .iter()
        .map(|career| career.suitable_interest.clone())
        .collect();
    areas.sort();
    areas.dedup();
    areas
}

/// Institutes whose primary field matches the given interest tag.
pub fn institutes_for_field<'a>(institutes: &'a [Institute], field: &str) -> Vec<&'a Institute> {
    institutes
        .iter()
        .filter(|institute| institute.primary_field == field)
        .collect()
}
