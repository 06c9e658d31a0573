use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use pathfinder::catalog::{Career, Institute, QuizQuestion};
use pathfinder::config::Config;
use pathfinder::scoring::{AnswerOption, AnswerTally};
use pathfinder::session::TOP_RESULTS;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_TUI: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the guided quiz in the terminal (default if no subcommand)
    Quiz,
    /// Score and rank careers from flags, without the TUI
    Rank {
        /// Comma-separated subjects you like (e.g. "Physics,Chemistry")
        #[arg(long)]
        subjects: String,

        /// Comma-separated interest areas (e.g. "Engineering")
        #[arg(long)]
        interests: String,

        /// One answer letter A-F per quiz question (e.g. "ABCAFD")
        #[arg(long)]
        answers: String,

        /// Show only the first N careers
        #[arg(long)]
        top: Option<usize>,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,

        /// Pretty-printed JSON output
        #[arg(long)]
        json: bool,

        /// Also list institutes for the top careers' interest fields
        #[arg(long)]
        institutes: bool,
    },
    /// Create the config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Guided career recommendation quiz", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pathfinder/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything the quiz and rank commands need in memory.
struct LoadedData {
    catalog: Vec<Career>,
    questions: Vec<QuizQuestion>,
    institutes: Vec<Institute>,
}

fn load_data(config: &Config, verbose: bool) -> Result<LoadedData, String> {
    let career_load = pathfinder::catalog::load_careers(&config.data.careers)
        .map_err(|e| format!("{:#}", e))?;

    if verbose {
        eprintln!(
            "Loaded {} careers from {} ({} postgraduate entries filtered out)",
            career_load.catalog.len(),
            config.data.careers,
            career_load.postgrad_filtered
        );
    }

    if let Err(errors) = pathfinder::scoring::validate_catalog(&career_load.catalog) {
        let mut msg = String::from("Career catalog errors:");
        for error in errors {
            msg.push_str(&format!("\n  - {}", error));
        }
        return Err(msg);
    }

    let questions = pathfinder::catalog::load_questions(&config.data.questions)
        .map_err(|e| format!("{:#}", e))?;
    if questions.is_empty() {
        return Err(format!(
            "Question bank at {} has no questions",
            config.data.questions
        ));
    }
    if verbose {
        eprintln!(
            "Loaded {} questions from {}",
            questions.len(),
            config.data.questions
        );
    }

    let institutes = match &config.data.institutes {
        Some(path) => {
            let institutes =
                pathfinder::catalog::load_institutes(path).map_err(|e| format!("{:#}", e))?;
            if verbose {
                eprintln!("Loaded {} institutes from {}", institutes.len(), path);
            }
            institutes
        }
        None => {
            if verbose {
                eprintln!("No institute directory configured");
            }
            Vec::new()
        }
    };

    Ok(LoadedData {
        catalog: career_load.catalog,
        questions,
        institutes,
    })
}

/// Parse a comma-separated selection flag into a set of trimmed names.
fn parse_selection(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Quiz);
    let start_time = Instant::now();

    // Init needs no config or data
    if let Commands::Init = command {
        if let Err(e) = pathfinder::config::run_init_wizard(cli.config.map(PathBuf::from)) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pathfinder::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Quiz length: {} questions", config.quiz_length);
    }

    // Load and validate data files
    let data = match load_data(&config, cli.verbose) {
        Ok(d) => d,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(EXIT_DATA);
        }
    };

    match command {
        Commands::Quiz => {
            let app = match pathfinder::tui::App::new(
                data.catalog,
                data.institutes,
                data.questions,
                config.quiz_length,
                cli.verbose,
            ) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("Failed to start session: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            if let Err(e) = pathfinder::tui::run_tui(app).await {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_TUI);
            }
        }
        Commands::Rank {
            subjects,
            interests,
            answers,
            top,
            tsv,
            json,
            institutes,
        } => {
            let selected_subjects = parse_selection(&subjects);
            if selected_subjects.is_empty() {
                eprintln!("--subjects must name at least one subject");
                std::process::exit(EXIT_INPUT);
            }

            let selected_interests = parse_selection(&interests);
            if selected_interests.is_empty() {
                eprintln!("--interests must name at least one interest area");
                std::process::exit(EXIT_INPUT);
            }

            let parsed_answers = match AnswerOption::parse_sequence(&answers) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Invalid --answers: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            if parsed_answers.is_empty() {
                eprintln!("--answers must contain at least one letter A-F");
                std::process::exit(EXIT_INPUT);
            }

            let tally = AnswerTally::from_answers(&parsed_answers);
            let ranked = match pathfinder::scoring::rank(
                &data.catalog,
                &tally,
                &selected_subjects,
                &selected_interests,
                parsed_answers.len(),
            ) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Scoring error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let shown = match top {
                Some(n) => &ranked[..n.min(ranked.len())],
                None => &ranked[..],
            };

            if json {
                match pathfinder::output::format_json(shown) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else if tsv {
                println!("{}", pathfinder::output::format_tsv(shown));
            } else if cli.verbose {
                // Verbose mode: detailed cards with component percentages
                let use_colors = pathfinder::output::should_use_colors();
                for scored in shown {
                    println!(
                        "{}",
                        pathfinder::output::format_career_detail(scored, use_colors)
                    );
                    println!();
                }
            } else {
                let use_colors = pathfinder::output::should_use_colors();
                println!(
                    "{}",
                    pathfinder::output::format_ranked_table(shown, use_colors)
                );
            }

            if institutes {
                // Institute lookup follows the top careers' interest fields,
                // deduplicated in rank order.
                let mut fields: Vec<&str> = Vec::new();
                for scored in ranked.iter().take(TOP_RESULTS) {
                    let field = scored.career.suitable_interest.as_str();
                    if !fields.contains(&field) {
                        fields.push(field);
                    }
                }

                let use_colors = pathfinder::output::should_use_colors();
                for field in fields {
                    let matched =
                        pathfinder::catalog::institutes_for_field(&data.institutes, field);
                    println!();
                    println!(
                        "{}",
                        pathfinder::output::format_institutes(field, &matched, use_colors)
                    );
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Ranked {} careers in {:?}",
                    ranked.len(),
                    start_time.elapsed()
                );
            }
        }
        // Handled before config loading
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
