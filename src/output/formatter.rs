use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::catalog::Institute;
use crate::scoring::ScoredCareer;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as a percentage with one decimal, "87.5%"
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a career name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Horizontal match bar, filled proportionally to score out of 100.
fn score_bar(score: f64, width: usize) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Format ranked careers as a table with columns: Index, Score, Bar, Career,
/// Interest. No headers (minimal format).
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: right-aligned, 6 chars wide (fits "100.0%")
pub fn format_ranked_table(careers: &[ScoredCareer], use_colors: bool) -> String {
    if careers.is_empty() {
        return "No careers matched.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 6;
    let bar_width = 10;
    let separator = "  ";

    careers
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", format_percent(scored.final_score), width = score_width);
            let bar = score_bar(scored.final_score, bar_width);

            let interest = scored.career.suitable_interest.as_str();
            let fixed_width = index_width
                + 1
                + score_width
                + bar_width
                + separator.len() * 3
                + interest.chars().count();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&scored.career.name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&scored.career.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.career.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    bar,
                    separator,
                    name,
                    separator,
                    interest.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, bar, separator, name, separator, interest
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single scored career with detailed multi-line output, component
/// percentages included (the card layout from the results screen).
pub fn format_career_detail(scored: &ScoredCareer, use_colors: bool) -> String {
    let overall = format_percent(scored.final_score);
    let bar = score_bar(scored.final_score, 20);
    let personality = format_percent(scored.riasec_score);
    let subject = format_percent(scored.subject_score);
    let interest = format_percent(scored.interest_score);
    let subjects = scored.career.required_subjects_display();

    if use_colors {
        format!(
            "{}\n  {}  Overall: {}\n  Personality: {}  Subject: {}  Interest: {}\n  Subjects required: {}",
            scored.career.name.bold(),
            bar,
            overall.bold(),
            personality.cyan(),
            subject.cyan(),
            interest.cyan(),
            subjects
        )
    } else {
        format!(
            "{}\n  {}  Overall: {}\n  Personality: {}  Subject: {}  Interest: {}\n  Subjects required: {}",
            scored.career.name, bar, overall, personality, subject, interest, subjects
        )
    }
}

/// Format ranked careers as tab-separated values for scripting
/// Columns: final, riasec, subject, interest, career, field (no headers, no colors)
pub fn format_tsv(careers: &[ScoredCareer]) -> String {
    if careers.is_empty() {
        return String::new();
    }

    careers
        .iter()
        .map(|scored| {
            format!(
                "{:.1}\t{:.1}\t{:.1}\t{:.1}\t{}\t{}",
                scored.final_score,
                scored.riasec_score,
                scored.subject_score,
                scored.interest_score,
                scored.career.name,
                scored.career.suitable_interest
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked careers as pretty-printed JSON
pub fn format_json(careers: &[ScoredCareer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(careers)?)
}

/// Format an institute listing for one interest field
pub fn format_institutes(field: &str, institutes: &[&Institute], use_colors: bool) -> String {
    if institutes.is_empty() {
        return format!("Institutes for {}:\n  (none found)", field);
    }

    let mut lines = Vec::with_capacity(institutes.len() + 1);
    if use_colors {
        lines.push(format!("Institutes for {}:", field.bold()));
    } else {
        lines.push(format!("Institutes for {}:", field));
    }
    for institute in institutes {
        if use_colors {
            lines.push(format!(
                "  {} - {}",
                institute.name.bold(),
                institute.location_line().dimmed()
            ));
        } else {
            lines.push(format!(
                "  {} - {}",
                institute.name,
                institute.location_line()
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Career, RiasecFlags};

    fn sample_scored(name: &str, final_score: f64) -> ScoredCareer {
        ScoredCareer {
            career: Career {
                name: name.to_string(),
                flags: RiasecFlags::new([true, false, false, false, false, false]),
                required_subjects: ["Physics", "Mathematics"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                suitable_interest: "Engineering".to_string(),
            },
            riasec_score: 80.0,
            subject_score: 50.0,
            interest_score: 100.0,
            final_score,
        }
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.5), "87.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_score_bar_full_and_empty() {
        assert_eq!(score_bar(100.0, 10), "██████████");
        assert_eq!(score_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(score_bar(50.0, 10), "█████░░░░░");
    }

    #[test]
    fn test_format_ranked_table_empty() {
        let careers: Vec<ScoredCareer> = vec![];
        assert_eq!(format_ranked_table(&careers, false), "No careers matched.");
    }

    #[test]
    fn test_format_ranked_table_single() {
        let careers = vec![sample_scored("B.Tech Mechanical Engineering", 75.0)];
        let result = format_ranked_table(&careers, false);
        assert!(result.contains(" 1."));
        assert!(result.contains("75.0%"));
        assert!(result.contains("B.Tech Mechanical Engineering"));
        assert!(result.contains("Engineering"));
    }

    #[test]
    fn test_format_ranked_table_indices_sequential() {
        let careers = vec![
            sample_scored("First", 90.0),
            sample_scored("Second", 70.0),
        ];
        let result = format_ranked_table(&careers, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 1."));
        assert!(lines[1].contains(" 2."));
    }

    #[test]
    fn test_format_career_detail() {
        let scored = sample_scored("B.Sc. Physics", 79.0);
        let result = format_career_detail(&scored, false);
        assert!(result.contains("B.Sc. Physics"));
        assert!(result.contains("Overall: 79.0%"));
        assert!(result.contains("Personality: 80.0%"));
        assert!(result.contains("Subject: 50.0%"));
        assert!(result.contains("Interest: 100.0%"));
        assert!(result.contains("Subjects required: Mathematics; Physics"));
    }

    #[test]
    fn test_format_tsv_empty() {
        let careers: Vec<ScoredCareer> = vec![];
        assert_eq!(format_tsv(&careers), "");
    }

    #[test]
    fn test_format_tsv_columns() {
        let careers = vec![sample_scored("Engineer", 79.0)];
        let result = format_tsv(&careers);
        assert_eq!(result.split('\t').count(), 6);
        assert!(result.starts_with("79.0\t80.0\t50.0\t100.0\t"));
        assert!(result.ends_with("Engineer\tEngineering"));
    }

    #[test]
    fn test_format_json_roundtrips() {
        let careers = vec![sample_scored("Engineer", 79.0)];
        let json = format_json(&careers).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["final_score"], 79.0);
        assert_eq!(value[0]["career"]["name"], "Engineer");
    }

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("Short name", 20), "Short name");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(
            truncate_name("This is a very long career name", 15),
            "This is a ve..."
        );
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_institutes_empty() {
        let result = format_institutes("Law", &[], false);
        assert!(result.contains("(none found)"));
    }

    #[test]
    fn test_format_institutes_listing() {
        let institute = Institute {
            name: "IIT Madras".to_string(),
            kind: "Public".to_string(),
            city: "Chennai".to_string(),
            state: "Tamil Nadu".to_string(),
            primary_field: "Engineering".to_string(),
        };
        let result = format_institutes("Engineering", &[&institute], false);
        assert!(result.contains("Institutes for Engineering:"));
        assert!(result.contains("IIT Madras"));
        assert!(result.contains("Public, Chennai, Tamil Nadu"));
    }
}
