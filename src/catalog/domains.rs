//! Fixed table of broad subject domains and the concrete subjects each one
//! offers on the preferences screen.

pub type SubjectDomain = (&'static str, &'static [&'static str]);

pub const SUBJECT_DOMAINS: &[SubjectDomain] = &[
    (
        "Natural Sciences",
        &[
            "Biology",
            "Botany",
            "Zoology",
            "Microbiology",
            "Chemistry",
            "Physics",
            "Mathematics",
            "Statistics",
            "Geology",
            "Geography",
            "Environmental Science",
            "Environmental Studies",
            "Science (Pure & Applied)",
        ],
    ),
    (
        "Medical & Health Sciences",
        &[
            "Anatomy",
            "Anesthesia",
            "Audiology",
            "Biomedical Engineering",
            "Biotechnology",
            "Cardiac Technology",
            "Dentistry",
            "Dialysis",
            "Medical Imaging",
            "Medical & Healthcare",
            "Medicine",
            "Nursing",
            "Occupational Therapy",
            "Optometry",
            "Pathology",
            "Perfusion",
            "Pharmacology",
            "Pharmacy",
            "Physiotherapy",
            "Radiology",
            "Respiratory Therapy",
            "Veterinary Science",
        ],
    ),
    (
        "Engineering & Technology",
        &[
            "Engineering",
            "Engineering & Technology",
            "Mechanical Engineering",
            "Civil Engineering",
            "Automotive Engineering",
            "Computer Science",
            "IT & Software",
            "Networking",
            "Cybersecurity",
            "Artificial Intelligence",
            "Algorithms",
            "Robotics",
            "Materials Science",
            "Textile Engineering",
        ],
    ),
    (
        "Agricultural & Allied Sciences",
        &[
            "Agriculture",
            "Agriculture & Environment",
            "Agronomy",
            "Dairy Technology",
            "Food Science",
        ],
    ),
    (
        "Arts, Humanities & Social Sciences",
        &[
            "Art",
            "Fine Arts",
            "Drawing",
            "Photography",
            "Literature",
            "Linguistics",
            "Philosophy",
            "Psychology",
            "Sociology",
            "Political Science",
            "History",
            "Ethics",
            "Humanities & Social Sciences",
            "Social Sciences",
            "Communication",
            "Creativity",
        ],
    ),
    (
        "Business, Management & Commerce",
        &[
            "Accountancy",
            "Business & Management",
            "Business Studies",
            "Economics",
            "Finance",
            "Finance & Banking",
            "Human Resources",
            "International Business",
            "Management",
            "Marketing",
            "Marketing & Sales",
            "Logistics",
            "Public Administration",
        ],
    ),
    (
        "Education & Pedagogy",
        &[
            "Education",
            "Education Studies",
            "Child Development",
            "Pedagogy",
        ],
    ),
    (
        "Design, Media & Creative Studies",
        &[
            "Animation",
            "Animation & VFX",
            "Arts & Design",
            "Design",
            "Fashion Design",
            "Film & Television",
            "Film Studies",
            "Interior Design",
            "Jewellery Design",
            "Textile Design",
            "Textile Science",
            "Urban Planning",
        ],
    ),
    (
        "Media, Journalism & Mass Communication",
        &[
            "Journalism",
            "Journalism & Mass Comm",
            "Mass Comm",
            "Mass Communication",
        ],
    ),
    (
        "Hospitality, Travel & Tourism",
        &[
            "Hospitality",
            "Hospitality & Tourism",
            "Hotel Management",
            "Tourism",
            "Culinary Arts",
            "Sports Science",
        ],
    ),
    (
        "Law, Governance & Public Service",
        &["Law & Public Service", "Legal Studies"],
    ),
    (
        "Miscellaneous / General",
        &[
            "Archaeology",
            "Architecture",
            "Child Development",
            "Foreign Language",
            "General Knowledge",
            "Library & Information Science",
            "Navigation",
        ],
    ),
];

/// Subjects offered under a domain name, or None if the domain is unknown.
pub fn subjects_for_domain(domain: &str) -> Option<&'static [&'static str]> {
    SUBJECT_DOMAINS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, subjects)| *subjects)
}
