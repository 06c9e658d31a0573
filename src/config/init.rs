use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config, DataConfig, DEFAULT_QUIZ_LENGTH};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Prompt for a CSV path until the user names a file that exists, or accept
/// a missing one after confirmation (useful when the data lands later).
fn prompt_csv_path(label: &str, default: &str) -> Result<String> {
    loop {
        let input = prompt_with_default(label, default)?;
        if input.is_empty() {
            println!("  A path is required.");
            continue;
        }
        if Path::new(&input).exists() {
            return Ok(input);
        }
        let keep = prompt_yes_no(
            &format!("  '{}' does not exist yet. Use it anyway?", input),
            false,
        )?;
        if keep {
            return Ok(input);
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("PathFinder Configuration Wizard");
    println!("===============================");
    println!();

    // 1. Data files
    typewriter("PathFinder scores careers from three CSV files: a career catalog, a quiz question bank, and an optional institute directory.");
    println!();

    typewriter("The career catalog needs the columns: career_name, R, I, A, S, E, C, required_subjects, Suitable_Interests.");
    let careers = prompt_csv_path("Career catalog CSV", "careers.csv")?;

    println!();
    typewriter("The question bank needs the columns: Question, Option_A through Option_F. Each option maps onto one personality code.");
    let questions = prompt_csv_path("Question bank CSV", "questions.csv")?;

    println!();
    typewriter("The institute directory needs: Institution, Type, City, State, Primary Fields. Skip it and the institutes screen just stays empty.");
    let institutes = {
        let input = prompt_with_default("Institute directory CSV ('none' to skip)", "none")?;
        if input == "none" || input.is_empty() {
            None
        } else {
            Some(input)
        }
    };

    // 2. Quiz length
    println!();
    typewriter("Each run samples a fixed number of questions from the bank. 15 is a good balance between signal and patience.");
    let quiz_length: usize = loop {
        let input = prompt_with_default("Questions per quiz", &DEFAULT_QUIZ_LENGTH.to_string())?;
        match input.parse::<usize>() {
            Ok(v) if v >= 1 => break v,
            Ok(_) => println!("  Invalid: must be at least 1. Try again."),
            Err(_) => println!("  Invalid: must be a positive number. Try again."),
        }
    };

    // 3. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        data: DataConfig {
            careers,
            questions,
            institutes,
        },
        quiz_length,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `pathfinder` to take the quiz.");

    Ok(())
}
