use anyhow::Result;

use crate::catalog::Career;

/// Validate a loaded catalog before any scoring happens.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &[Career]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, career) in catalog.iter().enumerate() {
        if career.name.trim().is_empty() {
            errors.push(format!("careers[{}]: name is empty", i));
        }
        if career.required_subjects.is_empty() {
            errors.push(format!(
                "careers[{}] '{}': required_subjects is empty",
                i, career.name
            ));
        }
        if career
            .required_subjects
            .iter()
            .any(|s| s.trim().is_empty())
        {
            errors.push(format!(
                "careers[{}] '{}': required_subjects contains a blank entry",
                i, career.name
            ));
        }
        if career.suitable_interest.trim().is_empty() {
            errors.push(format!(
                "careers[{}] '{}': suitable_interest is empty",
                i, career.name
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RiasecFlags;

    fn sample_career(name: &str, subjects: &[&str], interest: &str) -> Career {
        Career {
            name: name.to_string(),
            flags: RiasecFlags::new([true, false, false, false, false, false]),
            required_subjects: subjects.iter().map(|s| s.to_string()).collect(),
            suitable_interest: interest.to_string(),
        }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = vec![
            sample_career("B.Tech Mechanical", &["Physics", "Mathematics"], "Engineering"),
            sample_career("B.A. History", &["History"], "Humanities"),
        ];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let catalog = vec![sample_career("", &["Physics"], "Engineering")];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("name is empty"));
    }

    #[test]
    fn test_empty_required_subjects() {
        let catalog = vec![sample_career("B.Sc. Physics", &[], "Science")];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("required_subjects is empty"));
    }

    #[test]
    fn test_empty_interest() {
        let catalog = vec![sample_career("B.Sc. Physics", &["Physics"], "")];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("suitable_interest is empty"));
    }

    #[test]
    fn test_collects_all_errors() {
        let catalog = vec![
            sample_career("", &["Physics"], "Science"), // Error 1
            sample_career("B.Sc. Botany", &[], ""),     // Errors 2 and 3
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
